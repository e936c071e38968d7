//! Identify command implementation.

use crate::core::agent::Agent;
use crate::core::parser::media_title_from_filename;
use crate::core::scanner::scan_directory;
use crate::generators::nfo::generate_movie_nfo;
use crate::models::media::VideoFile;
use crate::utils::fs::{sidecar_path, write_file};
use anyhow::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

/// Outcome counters for a run.
#[derive(Debug, Default)]
struct Summary {
    matched: usize,
    unmatched: usize,
    failed: usize,
}

/// Execute identify command.
pub async fn execute_identify(agent: &Agent, path: &Path, dry_run: bool) -> Result<()> {
    let videos = scan_directory(path)?;
    if videos.is_empty() {
        println!("{}", "No video files found.".yellow());
        return Ok(());
    }

    let pb = ProgressBar::new(videos.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let mut summary = Summary::default();
    for video in &videos {
        pb.set_message(video.filename.clone());
        match identify_one(agent, video, dry_run, &pb).await {
            Ok(true) => summary.matched += 1,
            Ok(false) => summary.unmatched += 1,
            Err(e) => {
                summary.failed += 1;
                pb.suspend(|| {
                    println!("{} {}: {}", "[FAIL]".red(), video.filename, e);
                });
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    println!(
        "{} matched, {} unmatched, {} failed",
        summary.matched.to_string().green(),
        summary.unmatched.to_string().yellow(),
        summary.failed.to_string().red()
    );

    Ok(())
}

/// Identify one video file. Returns whether a match was found.
async fn identify_one(
    agent: &Agent,
    video: &VideoFile,
    dry_run: bool,
    pb: &ProgressBar,
) -> Result<bool> {
    let media_title = media_title_from_filename(&video.filename);
    tracing::debug!("{} -> {:?}", video.filename, media_title);

    let Some(metadata) = agent.identify(&media_title, None).await? else {
        pb.suspend(|| println!("{} {}", "[----]".yellow(), video.filename));
        return Ok(false);
    };

    pb.suspend(|| {
        println!(
            "{} {} -> {} ({})",
            "[ OK ]".green(),
            video.filename,
            metadata.title.bold(),
            metadata.catalog_id
        );
    });

    if dry_run {
        return Ok(true);
    }

    let nfo_path = sidecar_path(&video.path, ".nfo");
    write_file(&nfo_path, generate_movie_nfo(&metadata))?;

    match agent.fetch_poster(&metadata).await {
        Ok(Some((_, bytes))) => {
            write_file(&sidecar_path(&video.path, "-poster.jpg"), bytes)?;
        }
        Ok(None) => {}
        Err(e) => tracing::warn!("Failed to download poster for {}: {}", video.filename, e),
    }

    Ok(true)
}
