use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    pub input: InputConfig,
    pub output: OutputConfig,
    pub scoring: ScoringConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct InputConfig {
    pub path: String,
    pub text_column: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OutputConfig {
    pub path: String,
    pub score_column: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ScoringConfig {
    /// Compound scores within this distance of zero are reported as neutral.
    pub neutral_threshold: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: InputConfig {
                path: "climate_sentences.csv".to_string(),
                text_column: "sentence".to_string(),
            },
            output: OutputConfig {
                path: "climate_sentences_with_scores.csv".to_string(),
                score_column: "sentiment_score".to_string(),
            },
            scoring: ScoringConfig {
                neutral_threshold: 0.05,
            },
        }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();

        let defaults = Config::default();
        let config = config::Config::builder()
            .set_default("input.path", defaults.input.path)?
            .set_default("input.text_column", defaults.input.text_column)?
            .set_default("output.path", defaults.output.path)?
            .set_default("output.score_column", defaults.output.score_column)?
            .set_default("scoring.neutral_threshold", defaults.scoring.neutral_threshold)?
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::Environment::with_prefix("SENTIMENT").separator("__"))
            .build()?;

        let config: Config = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.input.text_column.trim().is_empty() {
            anyhow::bail!("input.text_column must not be empty");
        }
        if self.output.score_column.trim().is_empty() {
            anyhow::bail!("output.score_column must not be empty");
        }
        if !(0.0..1.0).contains(&self.scoring.neutral_threshold) {
            anyhow::bail!(
                "scoring.neutral_threshold must be in [0, 1), got {}",
                self.scoring.neutral_threshold
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.input.text_column, "sentence");
        assert_eq!(config.output.score_column, "sentiment_score");
    }

    #[test]
    fn test_rejects_out_of_range_threshold() {
        let mut config = Config::default();
        config.scoring.neutral_threshold = 1.5;
        assert!(config.validate().is_err());

        config.scoring.neutral_threshold = -0.1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_empty_column_names() {
        let mut config = Config::default();
        config.input.text_column = "  ".to_string();
        assert!(config.validate().is_err());
    }
}
