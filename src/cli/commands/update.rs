//! Update command implementation.

use crate::cli::args::MetadataFormat;
use crate::core::agent::Agent;
use crate::generators::nfo::generate_movie_nfo;
use crate::models::media::MovieMetadata;
use crate::utils::fs::write_file;
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

/// Render metadata in the requested format.
pub fn render_metadata(metadata: &MovieMetadata, format: MetadataFormat) -> Result<String> {
    Ok(match format {
        MetadataFormat::Nfo => generate_movie_nfo(metadata),
        MetadataFormat::Json => serde_json::to_string_pretty(metadata)?,
    })
}

/// Execute update command.
pub async fn execute_update(
    agent: &Agent,
    id: &str,
    title: Option<&str>,
    output: Option<&Path>,
    format: MetadataFormat,
    poster: bool,
) -> Result<()> {
    let metadata = agent.update(id, title.unwrap_or_default()).await?;
    let rendered = render_metadata(&metadata, format)?;

    let Some(dir) = output else {
        println!("{}", rendered);
        return Ok(());
    };

    let extension = match format {
        MetadataFormat::Nfo => "nfo",
        MetadataFormat::Json => "json",
    };
    let metadata_path = dir.join(format!("{}.{}", metadata.catalog_id, extension));
    write_file(&metadata_path, rendered)?;
    println!("{} {}", "Wrote".green(), metadata_path.display());

    if poster {
        match agent.fetch_poster(&metadata).await {
            Ok(Some((_, bytes))) => {
                let poster_path = dir.join(format!("{}-poster.jpg", metadata.catalog_id));
                write_file(&poster_path, bytes)?;
                println!("{} {}", "Wrote".green(), poster_path.display());
            }
            Ok(None) => println!("{}", "No poster listed.".yellow()),
            Err(e) => tracing::warn!("Failed to download poster: {}", e),
        }
    }

    Ok(())
}
