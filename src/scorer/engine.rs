use indicatif::ProgressBar;
use tracing::info;

use crate::dataset::Dataset;
use crate::error::Result;
use crate::scorer::summary::ScoreSummary;
use crate::sentiment::PolarityModel;

/// Batch scorer: one pass over the dataset, strictly in row order.
pub struct ScoreEngine<M: PolarityModel> {
    model: M,
    score_column: String,
    neutral_threshold: f64,
}

impl<M: PolarityModel> ScoreEngine<M> {
    pub fn new(model: M, score_column: impl Into<String>, neutral_threshold: f64) -> Self {
        Self {
            model,
            score_column: score_column.into(),
            neutral_threshold,
        }
    }

    /// Score the text column of every row and append the results as the
    /// trailing score column. Scores are written with VADER's conventional
    /// 4-decimal precision.
    pub fn score_dataset(&self, dataset: &mut Dataset, text_column: &str) -> Result<ScoreSummary> {
        let text_idx = dataset.require_column(text_column)?;

        info!(
            "Scoring {} rows from column '{}'",
            dataset.len(),
            text_column
        );

        let bar = ProgressBar::new(dataset.len() as u64);
        let mut scores = Vec::with_capacity(dataset.len());
        for row in dataset.rows() {
            scores.push(self.model.compound(&row[text_idx]));
            bar.inc(1);
        }
        bar.finish_and_clear();

        let cells = scores.iter().map(|s| format!("{:.4}", s)).collect();
        dataset.append_column(&self.score_column, cells)?;

        let summary = ScoreSummary::from_scores(&scores, self.neutral_threshold);
        info!(
            "Scoring complete: {} positive, {} negative, {} neutral",
            summary.positive, summary.negative, summary.neutral
        );
        Ok(summary)
    }
}
