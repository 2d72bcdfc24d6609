//! Project configuration (gridmask.yaml) parsing.
//!
//! The configuration names the default input map, where masks are written,
//! and how ranges are partitioned. Every key is optional.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GridMaskError, Result};
use crate::types::{Boundary, Legend};

/// Project configuration loaded from gridmask.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Map image (or directory of maps) to process.
    #[serde(default = "default_input")]
    pub input: PathBuf,

    /// Directory that receives rendered masks.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Boundary handling between adjacent ranges.
    #[serde(default)]
    pub boundary: Boundary,

    /// Intensity painted under the last mask in the fill preview.
    #[serde(default)]
    pub fill: u8,

    /// Integer upscale applied to written images.
    #[serde(default)]
    pub scale: Option<u32>,

    /// Region names used to label ranges.
    #[serde(default)]
    pub legend: Legend,

    /// Patterns to exclude from directory scans.
    #[serde(default)]
    pub excludes: Vec<String>,
}

fn default_input() -> PathBuf {
    PathBuf::from("img/map.pgm")
}

fn default_output() -> PathBuf {
    PathBuf::from("masks")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
            boundary: Boundary::default(),
            fill: 0,
            scale: None,
            legend: Legend::default(),
            excludes: vec![],
        }
    }
}

impl Config {
    /// Load configuration from a gridmask.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| GridMaskError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse configuration from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| GridMaskError::Config {
            message: format!("Invalid config: {}", e),
            help: Some("Check gridmask.yaml syntax".to_string()),
        })
    }

    /// Check if a path should be excluded based on exclude patterns.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.excludes
            .iter()
            .any(|pattern| Self::matches_pattern(&path_str, pattern))
    }

    /// Simple glob pattern matching.
    fn matches_pattern(path: &str, pattern: &str) -> bool {
        if let Some(suffix) = pattern.strip_prefix("**/") {
            // **/dir/* matches anything inside dir anywhere in the path
            if let Some(dir) = suffix.strip_suffix("/*") {
                return path.contains(&format!("/{}/", dir)) || path.starts_with(&format!("{}/", dir));
            }
            return path.contains(suffix);
        }

        if let Some(suffix) = pattern.strip_prefix('*') {
            if !pattern.contains('/') {
                return path.ends_with(suffix);
            }
        }

        if let Some(prefix) = pattern.strip_suffix("/*") {
            return path.starts_with(&format!("{}/", prefix))
                || path.contains(&format!("/{}/", prefix));
        }

        path.contains(pattern)
    }

    /// Get the effective scale factor.
    pub fn effective_scale(&self) -> u32 {
        self.scale.unwrap_or(1).max(1)
    }
}
