//! Search command implementation.

use crate::cli::args::OutputFormat;
use crate::core::agent::Agent;
use crate::core::matcher::good_matches;
use crate::models::media::SearchResult;
use anyhow::Result;
use colored::Colorize;

/// Execute search command.
pub async fn execute_search(
    agent: &Agent,
    title: &str,
    year: Option<u16>,
    all: bool,
    format: OutputFormat,
) -> Result<()> {
    let good_score = agent.config().good_score();
    let ranked = agent.search(title, year).await?;
    let results = if all {
        ranked
    } else {
        good_matches(&ranked, good_score)
    };

    match format {
        OutputFormat::Json => print_json(&results)?,
        OutputFormat::Simple => print_simple(&results),
        OutputFormat::Table => print_table(&results, good_score),
    }

    Ok(())
}

/// Print results as JSON.
fn print_json(results: &[SearchResult]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(results)?);
    Ok(())
}

/// Print results in simple format.
fn print_simple(results: &[SearchResult]) {
    if results.is_empty() {
        println!("No results found.");
        return;
    }

    for result in results {
        println!("{}\t{}\t{}\t{}", result.score, result.id, result.format, result.name);
    }
}

/// Print results as table.
fn print_table(results: &[SearchResult], good_score: i32) {
    if results.is_empty() {
        println!("{}", "No results found.".yellow());
        return;
    }

    println!(
        "{}",
        format!("Found {} results:", results.len()).bold().cyan()
    );
    println!();
    println!(
        " {:>4} | {:>5} | {:<9} | {:<4} | {}",
        "#", "Score", "ID", "Fmt", "Title"
    );
    println!("{}", "-".repeat(80));

    for (i, result) in results.iter().enumerate() {
        let name = if result.name.chars().count() > 50 {
            format!("{}...", result.name.chars().take(47).collect::<String>())
        } else {
            result.name.clone()
        };

        let score = if result.score >= good_score {
            format!("{:>5}", result.score).green().to_string()
        } else {
            format!("{:>5}", result.score).red().to_string()
        };

        println!(
            " {:>4} | {} | {:<9} | {:<4} | {}",
            i + 1,
            score,
            result.id,
            result.format.to_string(),
            name
        );
    }
    println!();
}
