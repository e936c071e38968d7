//! Directory scanner module.
//!
//! Finds the video files a library folder holds so they can be identified.

use crate::models::media::VideoFile;
use crate::utils::fs::{ensure_directory, is_sample, is_video_file};
use crate::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Create a VideoFile from a path.
fn create_video_file(path: &Path) -> Result<VideoFile> {
    let metadata = std::fs::metadata(path)?;

    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let parent_dir = path
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));

    Ok(VideoFile {
        path: path.to_path_buf(),
        filename,
        size: metadata.len(),
        parent_dir,
    })
}

/// Collect video files below `path`, or `path` itself when it is a video file.
///
/// Sample files are skipped. Results are sorted by path.
pub fn scan_directory(path: &Path) -> Result<Vec<VideoFile>> {
    if path.is_file() {
        return Ok(if is_video_file(path) {
            vec![create_video_file(path)?]
        } else {
            Vec::new()
        });
    }
    ensure_directory(path)?;

    let mut videos = Vec::new();
    let mut total_files = 0usize;

    for entry in WalkDir::new(path)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_file() {
            continue;
        }
        total_files += 1;

        let entry_path = entry.path();
        if !is_video_file(entry_path) {
            continue;
        }
        let relative = entry_path.strip_prefix(path).unwrap_or(entry_path);
        if is_sample(relative) {
            tracing::debug!("Skipping sample file: {}", entry_path.display());
            continue;
        }

        match create_video_file(entry_path) {
            Ok(video_file) => videos.push(video_file),
            Err(e) => {
                tracing::warn!("Failed to read video file {:?}: {}", entry_path, e);
            }
        }
    }

    videos.sort_by(|a, b| a.path.cmp(&b.path));

    tracing::info!("Scanned {} files: {} videos", total_files, videos.len());

    Ok(videos)
}
