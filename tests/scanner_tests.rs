//! Integration tests for the scanner module.
//!
//! Tests cover:
//! - Directory scanning with video files
//! - Sample file skipping
//! - Single file paths
//! - Error handling for non-existent paths

use ade_agent::core::scanner::scan_directory;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_scan_empty_directory() {
    let temp_dir = TempDir::new().unwrap();
    let result = scan_directory(temp_dir.path()).unwrap();
    assert!(result.is_empty());
}

#[test]
fn test_scan_with_video_files() {
    let temp_dir = TempDir::new().unwrap();

    fs::write(temp_dir.path().join("b movie.mkv"), "fake video content").unwrap();
    fs::write(temp_dir.path().join("a movie.mp4"), "fake video content").unwrap();
    fs::write(temp_dir.path().join("a movie.nfo"), "<movie/>").unwrap();

    let result = scan_directory(temp_dir.path()).unwrap();

    assert_eq!(result.len(), 2);
    assert_eq!(result[0].filename, "a movie.mp4");
    assert_eq!(result[1].filename, "b movie.mkv");
    assert_eq!(result[1].size, 18);
}

#[test]
fn test_scan_nested_and_samples() {
    let temp_dir = TempDir::new().unwrap();

    let nested = temp_dir.path().join("Studio").join("Big Picture (2019)");
    fs::create_dir_all(&nested).unwrap();
    fs::write(nested.join("Big Picture (2019).mkv"), "fake video").unwrap();
    fs::write(nested.join("Big Picture-sample.mkv"), "fake sample").unwrap();

    let result = scan_directory(temp_dir.path()).unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].filename, "Big Picture (2019).mkv");
    assert_eq!(result[0].parent_dir, nested);
}

#[test]
fn test_scan_sample_words_in_names() {
    let temp_dir = TempDir::new().unwrap();

    let root = temp_dir.path().join("Samples Collection");
    fs::create_dir_all(root.join("Samples")).unwrap();
    fs::write(root.join("Big Picture (2019).mp4"), "fake video").unwrap();
    fs::write(root.join("Free Samples (2018).mp4"), "fake video").unwrap();
    fs::write(root.join("Samples").join("clip.mp4"), "fake sample").unwrap();

    let result = scan_directory(&root).unwrap();

    let names: Vec<_> = result.iter().map(|v| v.filename.as_str()).collect();
    assert_eq!(names, vec!["Big Picture (2019).mp4", "Free Samples (2018).mp4"]);
}

#[test]
fn test_scan_single_file() {
    let temp_dir = TempDir::new().unwrap();
    let video = temp_dir.path().join("movie.mkv");
    fs::write(&video, "fake video").unwrap();

    let result = scan_directory(&video).unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].path, video);

    let text = temp_dir.path().join("notes.txt");
    fs::write(&text, "notes").unwrap();
    assert!(scan_directory(&text).unwrap().is_empty());
}

#[test]
fn test_scan_nonexistent_path() {
    let result = scan_directory(Path::new("/nonexistent/path/12345"));
    assert!(result.is_err());
}
