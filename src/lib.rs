pub mod config;
pub mod dataset;
pub mod error;
pub mod scorer;
pub mod sentiment;
pub mod utils;

pub use config::Config;
pub use error::{Result, ScorerError};
