use serde::Serialize;
use vader_sentiment::SentimentIntensityAnalyzer;

#[cfg(test)]
use mockall::automock;

/// Scoring seam for the batch engine.
///
/// Implementations must be deterministic: the same text always yields the
/// same score, and the score always lies in [-1.0, 1.0].
#[cfg_attr(test, automock)]
pub trait PolarityModel {
    /// Compound polarity of the text, in [-1.0, 1.0]. Text without any
    /// sentiment-bearing tokens scores 0.0.
    fn compound(&self, text: &str) -> f64;
}

/// Lexicon/rule-based analyzer backed by the VADER port.
pub struct VaderAnalyzer {
    inner: SentimentIntensityAnalyzer<'static>,
}

impl VaderAnalyzer {
    pub fn new() -> Self {
        Self {
            inner: SentimentIntensityAnalyzer::new(),
        }
    }

    /// Full VADER result: positive/neutral/negative proportions plus the
    /// normalized compound score.
    pub fn breakdown(&self, text: &str) -> PolarityBreakdown {
        let scores = self.inner.polarity_scores(text);
        let get = |key: &str| scores.get(key).copied().unwrap_or(0.0);

        PolarityBreakdown {
            positive: get("pos"),
            neutral: get("neu"),
            negative: get("neg"),
            compound: get("compound"),
        }
    }
}

impl Default for VaderAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl PolarityModel for VaderAnalyzer {
    fn compound(&self, text: &str) -> f64 {
        self.breakdown(text).compound
    }
}

/// Per-text VADER score components.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PolarityBreakdown {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
    pub compound: f64,
}

/// Classification of a compound score around a neutral band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Polarity {
    Positive,
    Negative,
    Neutral,
}

impl Polarity {
    pub fn from_compound(score: f64, neutral_threshold: f64) -> Self {
        if score > neutral_threshold {
            Polarity::Positive
        } else if score < -neutral_threshold {
            Polarity::Negative
        } else {
            Polarity::Neutral
        }
    }
}

impl std::fmt::Display for Polarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Polarity::Positive => write!(f, "positive"),
            Polarity::Negative => write!(f, "negative"),
            Polarity::Neutral => write!(f, "neutral"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_text() {
        let analyzer = VaderAnalyzer::new();
        assert!(analyzer.compound("I love sunny days") > 0.0);
    }

    #[test]
    fn test_negative_text() {
        let analyzer = VaderAnalyzer::new();
        assert!(analyzer.compound("This is a disaster and I hate it") < 0.0);
    }

    #[test]
    fn test_empty_text_scores_zero() {
        let analyzer = VaderAnalyzer::new();
        assert_eq!(analyzer.compound(""), 0.0);
    }

    #[test]
    fn test_scores_are_deterministic() {
        let analyzer = VaderAnalyzer::new();
        let text = "The weather today is wonderful";
        assert_eq!(analyzer.compound(text), analyzer.compound(text));
    }

    #[test]
    fn test_compound_stays_in_range() {
        let analyzer = VaderAnalyzer::new();
        for text in [
            "",
            "great great great great amazing wonderful best",
            "horrible terrible awful worst disaster hate",
            "the cat sat on the mat",
        ] {
            let score = analyzer.compound(text);
            assert!((-1.0..=1.0).contains(&score), "out of range for {text:?}");
        }
    }

    #[test]
    fn test_polarity_classification() {
        assert_eq!(Polarity::from_compound(0.6, 0.05), Polarity::Positive);
        assert_eq!(Polarity::from_compound(-0.6, 0.05), Polarity::Negative);
        assert_eq!(Polarity::from_compound(0.02, 0.05), Polarity::Neutral);
        assert_eq!(Polarity::from_compound(-0.02, 0.05), Polarity::Neutral);
    }
}
