use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::Serialize;

use crate::sentiment::Polarity;
use crate::utils;

/// Aggregate result of one scoring run.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreSummary {
    pub total_rows: usize,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    pub mean_score: f64,
    pub min_score: f64,
    pub max_score: f64,
    pub generated_at: DateTime<Utc>,
}

impl ScoreSummary {
    pub fn from_scores(scores: &[f64], neutral_threshold: f64) -> Self {
        let mut positive = 0;
        let mut negative = 0;
        let mut neutral = 0;
        let mut min_score = f64::INFINITY;
        let mut max_score = f64::NEG_INFINITY;
        let mut sum = 0.0;

        for &score in scores {
            match Polarity::from_compound(score, neutral_threshold) {
                Polarity::Positive => positive += 1,
                Polarity::Negative => negative += 1,
                Polarity::Neutral => neutral += 1,
            }
            min_score = min_score.min(score);
            max_score = max_score.max(score);
            sum += score;
        }

        let (mean_score, min_score, max_score) = if scores.is_empty() {
            (0.0, 0.0, 0.0)
        } else {
            (sum / scores.len() as f64, min_score, max_score)
        };

        Self {
            total_rows: scores.len(),
            positive,
            negative,
            neutral,
            mean_score,
            min_score,
            max_score,
            generated_at: Utc::now(),
        }
    }

    /// Share of rows classified positive, as a percentage.
    pub fn positive_rate(&self) -> f64 {
        if self.total_rows == 0 {
            0.0
        } else {
            (self.positive as f64 / self.total_rows as f64) * 100.0
        }
    }

    /// Print a formatted summary block to console.
    pub fn print_summary(&self) {
        println!("\n{}", "=== Sentiment Score Summary ===".cyan().bold());
        println!("Rows Scored:  {}", self.total_rows);
        println!("Positive:     {}", self.positive.to_string().green());
        println!("Negative:     {}", self.negative.to_string().red());
        println!("Neutral:      {}", self.neutral);
        println!("Mean Score:   {:+.4}", self.mean_score);
        println!("Score Range:  [{:+.4}, {:+.4}]", self.min_score, self.max_score);
        println!("Generated:    {}", utils::format_timestamp(&self.generated_at));
        println!("{}", "===============================".cyan());
    }
}
