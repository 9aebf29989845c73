use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScorerError {
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Column not found in CSV header: {0}")]
    ColumnNotFound(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid score in column '{column}', row {row}: '{value}'")]
    InvalidScore {
        column: String,
        row: usize,
        value: String,
    },

    #[error("Dataset shape error: {0}")]
    Shape(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ScorerError>;
