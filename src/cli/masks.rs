//! Masks command implementation.
//!
//! Runs the mask pipeline over one map, or over every map in a directory,
//! and writes each displayed image as a numbered PNG.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::discovery::{load_map, Project};
use crate::display::PngSink;
use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::pipeline::{self, MapReport};

use super::ProjectArgs;

/// Obstacle, unknown and free.
const TRI_VALUES: usize = 3;

/// Split a map into one mask per intensity range
#[derive(Args, Debug)]
pub struct MasksArgs {
    /// Map image or directory of maps (default: `input` from gridmask.yaml)
    pub input: Option<PathBuf>,

    /// Output directory (default: `output` from gridmask.yaml)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Scale factor for written images (integer upscaling)
    #[arg(long)]
    pub scale: Option<u32>,

    /// Intensity painted under the last mask in the fill preview
    #[arg(long)]
    pub fill: Option<u8>,

    #[command(flatten)]
    pub project: ProjectArgs,
}

pub fn run(args: MasksArgs, printer: &Printer) -> Result<Vec<MapReport>> {
    let project = args.project.project(args.input.as_deref())?;
    let options = args.project.pipeline_options(&project.config, args.fill);
    let scale = args
        .scale
        .unwrap_or_else(|| project.config.effective_scale())
        .max(1);
    let output = output_dir(&project, args.output.as_deref());

    let mut reports = Vec::with_capacity(project.maps.len());
    let multiple = project.maps.len() > 1;

    for map in &project.maps {
        let img = load_map(map)?;
        printer.status(
            "Loading",
            &format!("{} ({}x{})", display_path(map), img.width(), img.height()),
        );

        let dir = if multiple {
            output.join(map_stem(map))
        } else {
            output.clone()
        };

        let mut sink = PngSink::new(&dir).with_scale(scale);
        let report = pipeline::run(&img, &options, &mut sink)?;

        let distinct = report.distinct_values();
        if distinct > TRI_VALUES {
            printer.warning(
                "Warning",
                &format!(
                    "{} has {} distinct values; occupancy grids usually have {}",
                    display_path(map),
                    distinct,
                    TRI_VALUES
                ),
            );
        }

        printer.info(
            "Partitioned",
            &format!(
                "{} ({} boundaries)",
                plural(report.regions.len(), "range", "ranges"),
                options.boundary
            ),
        );
        printer.status(
            "Wrote",
            &format!(
                "{} to {}",
                plural(sink.written().len(), "image", "images"),
                printer.cyan(&display_path(sink.dir()))
            ),
        );

        reports.push(report);
    }

    if multiple {
        printer.status("Finished", &plural(reports.len(), "map", "maps"));
    }

    Ok(reports)
}

/// Resolve the output directory: the flag wins, else the configured output
/// relative to the project root.
pub(crate) fn output_dir(project: &Project, flag: Option<&Path>) -> PathBuf {
    match flag {
        Some(dir) => dir.to_path_buf(),
        None if project.config.output.is_absolute() => project.config.output.clone(),
        None => project.root.join(&project.config.output),
    }
}

fn map_stem(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("map")
        .to_string()
}
