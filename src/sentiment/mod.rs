pub mod analyzer;

pub use analyzer::{Polarity, PolarityBreakdown, PolarityModel, VaderAnalyzer};

#[cfg(test)]
pub use analyzer::MockPolarityModel;
