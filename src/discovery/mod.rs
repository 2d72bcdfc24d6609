//! Input discovery for gridmask.
//!
//! Finds the project configuration, resolves which map images to process
//! and decodes them.
//!
//! # Example
//!
//! ```ignore
//! use gridmask::discovery::discover;
//!
//! let project = discover(".", None)?;
//! for map in &project.maps {
//!     println!("{}", map.display());
//! }
//! ```

mod loader;
mod manifest;
mod scanner;

use std::path::{Path, PathBuf};

use crate::error::{GridMaskError, Result};

pub use loader::{load_image, load_map, load_mask};
pub use manifest::Config;
pub use scanner::{is_map_file, scan_maps, MAP_EXTENSIONS};

/// The name of the configuration file.
pub const CONFIG_FILENAME: &str = "gridmask.yaml";

/// Resolved configuration and inputs for one invocation.
#[derive(Debug)]
pub struct Project {
    /// Directory the configuration was looked up in.
    pub root: PathBuf,

    /// The loaded configuration (default if no gridmask.yaml was found).
    pub config: Config,

    /// Whether a gridmask.yaml was found.
    pub has_config: bool,

    /// Map images to process, in order.
    pub maps: Vec<PathBuf>,
}

/// Load the configuration for a project directory.
///
/// Returns the default configuration when no gridmask.yaml exists.
pub fn load_config(root: &Path) -> Result<(Config, bool)> {
    let path = root.join(CONFIG_FILENAME);
    if path.exists() {
        Ok((Config::load(&path)?, true))
    } else {
        Ok((Config::default(), false))
    }
}

/// Resolve the maps to process.
///
/// `input` overrides the configured input. A file is used as-is; a directory
/// is scanned recursively for map images. Relative configured inputs are
/// resolved against `root`.
pub fn discover(root: impl AsRef<Path>, input: Option<&Path>) -> Result<Project> {
    let root = root.as_ref().to_path_buf();
    let (config, has_config) = load_config(&root)?;
    resolve(root, config, has_config, input)
}

/// Resolve maps against an already loaded configuration.
pub fn resolve(
    root: PathBuf,
    config: Config,
    has_config: bool,
    input: Option<&Path>,
) -> Result<Project> {
    let target = match input {
        Some(path) => path.to_path_buf(),
        None if config.input.is_absolute() => config.input.clone(),
        None => root.join(&config.input),
    };

    let maps = if target.is_dir() {
        let maps = scan_maps(&target, &config);
        if maps.is_empty() {
            return Err(GridMaskError::Load {
                path: target,
                message: format!(
                    "no map images found (looked for .{})",
                    MAP_EXTENSIONS.join(", .")
                ),
            });
        }
        maps
    } else {
        vec![target]
    };

    Ok(Project {
        root,
        config,
        has_config,
        maps,
    })
}
