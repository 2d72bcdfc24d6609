//! Ranges command implementation.
//!
//! Prints the partition of each map to stdout, as a table or as JSON.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::discovery::load_map;
use crate::error::{GridMaskError, Result};
use crate::output::{display_path, plural, Printer};
use crate::pipeline::{analyze, MapReport};

use super::ProjectArgs;

/// Print the intensity ranges derived from a map
#[derive(Args, Debug)]
pub struct RangesArgs {
    /// Map image or directory of maps (default: `input` from gridmask.yaml)
    pub input: Option<PathBuf>,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub project: ProjectArgs,
}

/// A report tagged with the map it came from.
#[derive(Debug, Serialize)]
pub struct MapEntry {
    pub map: String,
    #[serde(flatten)]
    pub report: MapReport,
}

pub fn run(args: RangesArgs, printer: &Printer) -> Result<Vec<MapEntry>> {
    let project = args.project.project(args.input.as_deref())?;
    let options = args.project.pipeline_options(&project.config, None);

    let mut entries = Vec::with_capacity(project.maps.len());
    for map in &project.maps {
        let img = load_map(map)?;
        let report = analyze(&img, &options)?;
        printer.status(
            "Analyzed",
            &format!(
                "{} ({})",
                display_path(map),
                plural(report.regions.len(), "range", "ranges")
            ),
        );
        entries.push(MapEntry {
            map: display_path(map),
            report,
        });
    }

    if args.json {
        let json = serde_json::to_string_pretty(&entries).map_err(|e| GridMaskError::Parse {
            message: format!("Failed to serialize report: {}", e),
            help: None,
        })?;
        println!("{}", json);
    } else {
        for entry in &entries {
            if entries.len() > 1 {
                println!("{}", entry.map);
            }
            print!("{}", format_table(&entry.report));
        }
    }

    Ok(entries)
}

/// Render a report as an aligned text table.
pub fn format_table(report: &MapReport) -> String {
    let label_width = report
        .regions
        .iter()
        .map(|r| r.label.len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for region in &report.regions {
        let values: Vec<String> = region.values.iter().map(|v| v.to_string()).collect();
        out.push_str(&format!(
            "{:<width$}  {:>3}..={:<3}  {:>8} px  [{}]\n",
            region.label,
            region.low,
            region.high,
            region.pixels,
            values.join(", "),
            width = label_width,
        ));
    }
    out
}
