//! File system utilities.

use crate::Result;
use std::path::{Path, PathBuf};

/// Supported video file extensions.
const VIDEO_EXTENSIONS: &[&str] = &[
    "mkv", "mp4", "avi", "mov", "wmv", "m4v", "ts", "m2ts", "flv", "webm", "mpg", "mpeg", "vob",
    "divx", "xvid", "3gp", "mts", "rmvb", "asf", "f4v",
];

/// Check if a path exists and is a directory.
pub fn ensure_directory(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(crate::Error::PathNotFound(path.display().to_string()));
    }
    if !path.is_dir() {
        return Err(crate::Error::NotADirectory(path.display().to_string()));
    }
    Ok(())
}

/// Get file extension in lowercase.
pub fn get_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
}

/// Check if a file is a video file based on extension.
pub fn is_video_file(path: &Path) -> bool {
    get_extension(path)
        .map(|ext| VIDEO_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// Check if a path names a sample clip.
///
/// Matches a file stem of `sample` or one ending in `-sample`, `.sample` or
/// `_sample`, and directories named `sample` or `samples`. Pass a path
/// relative to the scan root so the root itself is never considered.
pub fn is_sample(path: &Path) -> bool {
    let stem_is_sample = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_lowercase())
        .is_some_and(|stem| {
            stem == "sample"
                || [".sample", "-sample", "_sample"]
                    .iter()
                    .any(|suffix| stem.ends_with(suffix))
        });
    if stem_is_sample {
        return true;
    }

    path.parent()
        .map(|dir| {
            dir.components().any(|c| {
                let name = c.as_os_str().to_string_lossy().to_lowercase();
                name == "sample" || name == "samples"
            })
        })
        .unwrap_or(false)
}

/// Path next to `video` with the stem kept and a new suffix, e.g. `movie.nfo`.
pub fn sidecar_path(video: &Path, suffix: &str) -> PathBuf {
    let stem = video
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    video.with_file_name(format!("{}{}", stem, suffix))
}

/// Write a file, creating parent directories first.
pub fn write_file(path: &Path, contents: impl AsRef<[u8]>) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, contents)?;
    Ok(())
}
