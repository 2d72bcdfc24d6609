pub mod completions;
pub mod composite;
pub mod fill;
pub mod masks;
pub mod preview;
pub mod ranges;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::discovery::{discover, resolve, Config, Project};
use crate::error::Result;
use crate::pipeline::PipelineOptions;
use crate::types::Boundary;

/// gridmask - Occupancy-grid map region masks
#[derive(Parser, Debug)]
#[command(name = "gridmask")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Only print warnings and errors
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split a map into one mask per intensity range
    Masks(masks::MasksArgs),

    /// Print the intensity ranges derived from a map
    Ranges(ranges::RangesArgs),

    /// Paint an intensity into an image wherever a mask is set
    Fill(fill::FillArgs),

    /// Overlay a foreground image onto a background through a mask
    Composite(composite::CompositeArgs),

    /// Write a colour-coded preview of a map's regions
    Preview(preview::PreviewArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Options shared by commands that partition a map.
#[derive(Args, Debug, Clone, Default)]
pub struct ProjectArgs {
    /// Configuration file (default: ./gridmask.yaml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Give divider values to the lower range only
    #[arg(long)]
    pub disjoint: bool,
}

impl ProjectArgs {
    /// Load the configuration and resolve the maps to process.
    pub fn project(&self, input: Option<&Path>) -> Result<Project> {
        match &self.config {
            Some(path) => {
                let config = Config::load(path)?;
                let root = path
                    .parent()
                    .filter(|p| !p.as_os_str().is_empty())
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| PathBuf::from("."));
                resolve(root, config, true, input)
            }
            None => discover(".", input),
        }
    }

    /// Pipeline options from the configuration, with flags applied on top.
    pub fn pipeline_options(&self, config: &Config, fill: Option<u8>) -> PipelineOptions {
        let boundary = if self.disjoint {
            Boundary::Disjoint
        } else {
            config.boundary
        };

        PipelineOptions {
            boundary,
            fill: fill.unwrap_or(config.fill),
            legend: config.legend.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_masks_command() {
        let cli = Cli::parse_from(["gridmask", "masks", "map.pgm", "-o", "out", "--disjoint"]);
        match cli.command {
            Commands::Masks(args) => {
                assert_eq!(args.input, Some(PathBuf::from("map.pgm")));
                assert_eq!(args.output, Some(PathBuf::from("out")));
                assert!(args.project.disjoint);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_pipeline_options_flags_override_config() {
        let config = Config {
            boundary: Boundary::Shared,
            fill: 5,
            ..Default::default()
        };
        let args = ProjectArgs {
            config: None,
            disjoint: true,
        };

        let options = args.pipeline_options(&config, Some(42));

        assert_eq!(options.boundary, Boundary::Disjoint);
        assert_eq!(options.fill, 42);
    }

    #[test]
    fn test_pipeline_options_from_config() {
        let config = Config {
            boundary: Boundary::Disjoint,
            fill: 5,
            ..Default::default()
        };
        let options = ProjectArgs::default().pipeline_options(&config, None);

        assert_eq!(options.boundary, Boundary::Disjoint);
        assert_eq!(options.fill, 5);
    }

    #[test]
    fn test_project_with_explicit_config() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("floor.yaml");
        fs::write(&config_path, "input: level.pgm\n").unwrap();

        let args = ProjectArgs {
            config: Some(config_path),
            disjoint: false,
        };
        let project = args.project(None).unwrap();

        assert!(project.has_config);
        assert_eq!(project.maps, vec![dir.path().join("level.pgm")]);
    }
}
