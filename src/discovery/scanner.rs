//! File system scanner for discovering map images.
//!
//! Recursively scans a directory for raster files the loader can decode.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::manifest::Config;

/// Extensions treated as map images.
pub const MAP_EXTENSIONS: &[&str] = &["pgm", "pnm", "png", "bmp", "tif", "tiff"];

/// Check whether a path looks like a map image.
pub fn is_map_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            MAP_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Scan a directory for map images, sorted by path.
///
/// Files matching the config's exclude patterns are skipped. A missing
/// root yields no files.
pub fn scan_maps(root: &Path, config: &Config) -> Vec<PathBuf> {
    if !root.exists() {
        return Vec::new();
    }

    let mut maps: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| !config.is_excluded(path) && is_map_file(path))
        .collect();

    maps.sort();
    maps
}
