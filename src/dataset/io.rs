use std::path::Path;

use crate::dataset::Dataset;
use crate::error::{Result, ScorerError};

impl Dataset {
    /// Load a full CSV file into memory, preserving column and row order.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ScorerError::InputNotFound(path.to_path_buf()));
        }

        let mut reader = csv::ReaderBuilder::new().from_path(path)?;
        let headers = reader.headers()?.iter().map(str::to_string).collect();

        let mut dataset = Dataset::new(headers);
        for record in reader.records() {
            let record = record?;
            dataset.push_row(record.iter().map(str::to_string).collect())?;
        }
        Ok(dataset)
    }

    /// Write the dataset to a CSV file, header row first.
    pub fn write(&self, path: &Path) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(self.headers())?;
        for row in self.rows() {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.csv");

        let result = Dataset::load(&path);
        assert!(matches!(result, Err(ScorerError::InputNotFound(_))));
    }

    #[test]
    fn test_load_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.csv");
        fs::write(&path, "id,sentence\n1,first\n2,second\n3,third\n").unwrap();

        let dataset = Dataset::load(&path).unwrap();
        assert_eq!(dataset.headers(), &["id", "sentence"]);
        assert_eq!(dataset.len(), 3);
        assert_eq!(
            dataset.column("sentence").unwrap(),
            vec!["first", "second", "third"]
        );
    }

    #[test]
    fn test_load_rejects_ragged_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ragged.csv");
        fs::write(&path, "id,sentence\n1,first\n2\n").unwrap();

        assert!(Dataset::load(&path).is_err());
    }

    #[test]
    fn test_round_trip_preserves_other_columns() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.csv");
        let output = dir.path().join("output.csv");
        fs::write(&input, "id,sentence,source\n7,\"hello, there\",web\n8,plain,book\n").unwrap();

        let mut dataset = Dataset::load(&input).unwrap();
        dataset
            .append_column("score", vec!["0.1".to_string(), "-0.2".to_string()])
            .unwrap();
        dataset.write(&output).unwrap();

        let reloaded = Dataset::load(&output).unwrap();
        assert_eq!(reloaded.headers(), &["id", "sentence", "source", "score"]);
        assert_eq!(reloaded.column("id").unwrap(), vec!["7", "8"]);
        assert_eq!(
            reloaded.column("sentence").unwrap(),
            vec!["hello, there", "plain"]
        );
        assert_eq!(reloaded.column("source").unwrap(), vec!["web", "book"]);
    }

    #[test]
    fn test_write_header_only_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");

        let dataset = Dataset::new(vec!["sentence".to_string(), "score".to_string()]);
        dataset.write(&path).unwrap();

        let reloaded = Dataset::load(&path).unwrap();
        assert_eq!(reloaded.headers(), &["sentence", "score"]);
        assert!(reloaded.is_empty());
    }
}
