//! ADE Agent CLI
//!
//! Matches media titles against the Adult DVD Empire catalog and fetches movie metadata.

use ade_agent::cli::{
    args::{Cli, Commands},
    commands::{config as config_cmd, identify, search, update},
};
use ade_agent::models::config::{load_config, Config, ConfigSource};
use ade_agent::{preflight, Agent};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    let (config, source) = load_config(cli.config.as_deref());

    // Initialize logging
    init_logging(cli.verbose || config.debug);

    if let ConfigSource::Invalid(path, e) = &source {
        tracing::warn!("Ignoring config {}: {}", path.display(), e);
    }

    if let Commands::Config = cli.command {
        return config_cmd::show_config(&config, &source);
    }

    // Run preflight checks unless skipped
    if !cli.skip_preflight {
        run_preflight_checks(&config).await?;
    }

    let agent = Agent::new(config)?;

    // Run the appropriate command
    match cli.command {
        Commands::Search {
            title,
            year,
            all,
            format,
        } => {
            search::execute_search(&agent, &title, year, all, format).await?;
        }

        Commands::Update {
            id,
            title,
            output,
            format,
            poster,
        } => {
            update::execute_update(
                &agent,
                &id,
                title.as_deref(),
                output.as_deref(),
                format,
                poster,
            )
            .await?;
        }

        Commands::Identify { path, dry_run } => {
            identify::execute_identify(&agent, &path, dry_run).await?;
        }

        Commands::Config => {}
    }

    Ok(())
}

/// Initialize the logging system.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("ade_agent=debug")
    } else {
        EnvFilter::new("ade_agent=info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();

    tracing::debug!("Agent debug logging is enabled");
}

/// Run preflight checks and exit if any fail.
async fn run_preflight_checks(config: &Config) -> anyhow::Result<()> {
    use colored::Colorize;

    println!("{}", "Running preflight checks...".bold());
    println!();

    let results = preflight::run_preflight_checks(config).await?;
    preflight::print_results(&results);

    println!();

    if !preflight::all_passed(&results) {
        anyhow::bail!("Preflight checks failed. Fix the issues above and try again.");
    }

    Ok(())
}
