use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "sentiment-score")]
#[command(about = "Batch sentiment scorer for sentence CSV files (VADER compound polarity)")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score every sentence in a CSV and write a copy with a score column
    Score {
        /// Input CSV path (defaults to the configured input)
        #[arg(short, long)]
        input: Option<String>,

        /// Output CSV path (defaults to the configured output)
        #[arg(short, long)]
        output: Option<String>,

        /// Name of the text column to score
        #[arg(short, long)]
        column: Option<String>,

        /// Print a per-row score table
        #[arg(short, long)]
        verbose: bool,

        /// Skip the overwrite confirmation prompt
        #[arg(short, long)]
        yes: bool,

        /// Compute scores but don't write the output file
        #[arg(long)]
        dry_run: bool,
    },

    /// Score a single piece of text from the command line
    Preview {
        /// Text to score
        text: String,
    },

    /// Show score statistics for an already-scored CSV
    Stats {
        /// Scored CSV path (defaults to the configured output)
        #[arg(short, long)]
        input: Option<String>,

        /// Output format: table or json
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Write the default configuration file
    Init {
        /// Skip the overwrite confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}
