mod cli;
mod config;
mod dataset;
mod error;
mod scorer;
mod sentiment;
mod utils;

use std::path::Path;

use clap::Parser;
use cli::{Cli, Commands};
use colored::*;
use config::Config;
use tracing::{error, info};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("sentiment_score=debug,info")
        .init();

    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Score {
            input,
            output,
            column,
            verbose,
            yes,
            dry_run,
        } => {
            info!("Scoring sentences...");
            score_file(&config, input, output, column, verbose, yes, dry_run)
        }

        Commands::Preview { text } => preview_text(&config, &text),

        Commands::Stats { input, format } => {
            info!("Generating statistics...");
            show_stats(&config, input, &format)
        }

        Commands::Init { yes } => {
            info!("Initializing...");
            initialize(&config, yes)
        }
    };

    if let Err(e) = result {
        error!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}

fn score_file(
    config: &Config,
    input: Option<String>,
    output: Option<String>,
    column: Option<String>,
    verbose: bool,
    yes: bool,
    dry_run: bool,
) -> error::Result<()> {
    let input_path = input.unwrap_or_else(|| config.input.path.clone());
    let output_path = output.unwrap_or_else(|| config.output.path.clone());
    let text_column = column.unwrap_or_else(|| config.input.text_column.clone());

    println!("{}", format!("Scoring sentences from '{}'", input_path).cyan());

    let mut dataset = dataset::Dataset::load(Path::new(&input_path))?;
    println!("Loaded {} rows", dataset.len());

    let engine = scorer::ScoreEngine::new(
        sentiment::VaderAnalyzer::new(),
        config.output.score_column.as_str(),
        config.scoring.neutral_threshold,
    );
    println!("{}", "✓ VADER sentiment analyzer loaded".green());

    let summary = engine.score_dataset(&mut dataset, &text_column)?;

    if verbose && !dataset.is_empty() {
        println!("\n{}", "Scored Sentences:".yellow());
        utils::print_table_border(76);
        utils::print_table_row(&["Sentence", "Score", "Polarity"], &[50, 10, 10]);
        utils::print_table_border(76);

        let sentences = dataset.column(&text_column)?;
        let cells = dataset.column(&config.output.score_column)?;
        for (text, cell) in sentences.iter().zip(&cells) {
            let score = cell.parse::<f64>().unwrap_or(0.0);
            let polarity =
                sentiment::Polarity::from_compound(score, config.scoring.neutral_threshold);
            utils::print_table_row(
                &[
                    &utils::truncate_text(text, 50),
                    &utils::format_score(score, config.scoring.neutral_threshold),
                    &polarity.to_string(),
                ],
                &[50, 10, 10],
            );
        }
        utils::print_table_border(76);
    }

    if dry_run {
        println!("\n{}", "DRY RUN: No output file will be written".yellow());
        summary.print_summary();
        return Ok(());
    }

    let out = Path::new(&output_path);
    if out.exists() && !yes {
        if !utils::confirm_action(&format!("Overwrite '{}'?", output_path)) {
            println!("Cancelled");
            return Ok(());
        }
    }

    dataset.write(out)?;

    println!(
        "{}",
        format!("✓ Sentiment scores added and saved to '{}'", output_path).green()
    );
    summary.print_summary();
    Ok(())
}

fn preview_text(config: &Config, text: &str) -> error::Result<()> {
    let analyzer = sentiment::VaderAnalyzer::new();
    let breakdown = analyzer.breakdown(text);
    let polarity =
        sentiment::Polarity::from_compound(breakdown.compound, config.scoring.neutral_threshold);

    println!("{}", format!("Text: {}", text).cyan());
    println!(
        "Compound:  {}",
        utils::format_score(breakdown.compound, config.scoring.neutral_threshold)
    );
    println!("Positive:  {:.3}", breakdown.positive);
    println!("Neutral:   {:.3}", breakdown.neutral);
    println!("Negative:  {:.3}", breakdown.negative);
    println!("Polarity:  {}", polarity);
    Ok(())
}

fn show_stats(config: &Config, input: Option<String>, format: &str) -> error::Result<()> {
    let input_path = input.unwrap_or_else(|| config.output.path.clone());
    let dataset = dataset::Dataset::load(Path::new(&input_path))?;

    let cells = dataset.column(&config.output.score_column)?;
    let mut scores = Vec::with_capacity(cells.len());
    for (row, cell) in cells.iter().enumerate() {
        let score = cell
            .parse::<f64>()
            .map_err(|_| error::ScorerError::InvalidScore {
                column: config.output.score_column.clone(),
                row: row + 1,
                value: cell.to_string(),
            })?;
        scores.push(score);
    }

    let summary = scorer::ScoreSummary::from_scores(&scores, config.scoring.neutral_threshold);

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!(
        "{}",
        format!("=== Sentiment Statistics for '{}' ===", input_path)
            .cyan()
            .bold()
    );
    println!("\nRows:");
    println!("  Total:      {}", summary.total_rows);
    println!("  Positive:   {}", summary.positive.to_string().green());
    println!("  Negative:   {}", summary.negative.to_string().red());
    println!("  Neutral:    {}", summary.neutral);

    println!("\nScores:");
    println!("  Mean:       {:+.4}", summary.mean_score);
    println!("  Min:        {:+.4}", summary.min_score);
    println!("  Max:        {:+.4}", summary.max_score);
    println!("  Positive:   {:.1}%", summary.positive_rate());
    Ok(())
}

fn initialize(config: &Config, yes: bool) -> error::Result<()> {
    let path = Path::new("config/default.toml");
    if path.exists() && !yes {
        if !utils::confirm_action("Overwrite existing 'config/default.toml'?") {
            println!("Cancelled");
            return Ok(());
        }
    }

    std::fs::create_dir_all("config")?;
    let rendered = toml::to_string_pretty(&Config::default())
        .map_err(|e| error::ScorerError::Config(format!("failed to render defaults: {}", e)))?;
    std::fs::write(path, rendered)?;

    println!("{}", "✓ Default configuration written".green());
    println!("\n{}", "Configuration:".cyan());
    println!("  Input:         {}", config.input.path);
    println!("  Text Column:   {}", config.input.text_column);
    println!("  Output:        {}", config.output.path);
    println!("  Score Column:  {}", config.output.score_column);
    println!("  Neutral Band:  ±{}", config.scoring.neutral_threshold);

    println!("\n{}", "Ready to use! Try running:".cyan());
    println!(
        "  {} to score the configured input",
        "sentiment-score score --verbose".yellow()
    );
    println!("  {} to view statistics", "sentiment-score stats".yellow());
    println!(
        "  {} to score ad-hoc text",
        "sentiment-score preview \"I love sunny days\"".yellow()
    );
    Ok(())
}
