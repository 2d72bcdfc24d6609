//! Preview command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::load_map;
use crate::display::{region_colours, region_preview, write_png};
use crate::error::Result;
use crate::output::{display_path, Printer};
use crate::pipeline::analyze;

use super::masks::output_dir;
use super::ProjectArgs;

/// Write a colour-coded preview of a map's regions
#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// Map image (default: `input` from gridmask.yaml)
    pub input: Option<PathBuf>,

    /// Output PNG path (default: <output>/<map>-preview.png)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Scale factor for output (integer upscaling)
    #[arg(long)]
    pub scale: Option<u32>,

    #[command(flatten)]
    pub project: ProjectArgs,
}

pub fn run(args: PreviewArgs, printer: &Printer) -> Result<Vec<PathBuf>> {
    let project = args.project.project(args.input.as_deref())?;
    let options = args.project.pipeline_options(&project.config, None);
    let scale = args
        .scale
        .unwrap_or_else(|| project.config.effective_scale());

    let single = project.maps.len() == 1;
    let mut written = Vec::with_capacity(project.maps.len());

    for map in &project.maps {
        let img = load_map(map)?;
        let report = analyze(&img, &options)?;
        let ranges: Vec<_> = report.regions.iter().map(|r| r.range()).collect();
        let preview = region_preview(&img, &ranges)?;

        let path = match &args.output {
            Some(path) if single => path.clone(),
            _ => {
                let stem = map.file_stem().and_then(|s| s.to_str()).unwrap_or("map");
                output_dir(&project, args.output.as_deref().filter(|_| !single))
                    .join(format!("{}-preview.png", stem))
            }
        };
        write_png(&preview, &path, scale)?;

        for (region, colour) in report.regions.iter().zip(region_colours(ranges.len())) {
            let [r, g, b] = colour.0;
            printer.info(
                "Region",
                &format!(
                    "{} {} {}",
                    region.label,
                    region.range(),
                    printer.dim(&format!("#{:02X}{:02X}{:02X}", r, g, b))
                ),
            );
        }
        printer.status("Wrote", &display_path(&path));
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::GrayImage;
    use tempfile::tempdir;

    #[test]
    fn test_preview_command() {
        let dir = tempdir().unwrap();
        let map = dir.path().join("map.png");
        let output = dir.path().join("preview.png");
        GrayImage::from_raw(3, 1, vec![0, 205, 254])
            .unwrap()
            .save(&map)
            .unwrap();

        let args = PreviewArgs {
            input: Some(map),
            output: Some(output.clone()),
            scale: Some(2),
            project: ProjectArgs::default(),
        };
        let written = run(args, &Printer::new().quiet(true)).unwrap();

        assert_eq!(written, vec![output.clone()]);
        let img = image::open(&output).unwrap().to_rgb8();
        assert_eq!(img.dimensions(), (6, 2));
        assert_ne!(img.get_pixel(0, 0), img.get_pixel(2, 0));
    }

    #[test]
    fn test_preview_directory_uses_output_as_dir() {
        let dir = tempdir().unwrap();
        let maps = dir.path().join("maps");
        std::fs::create_dir_all(&maps).unwrap();
        for name in ["a.png", "b.png"] {
            GrayImage::from_raw(2, 1, vec![0, 254])
                .unwrap()
                .save(maps.join(name))
                .unwrap();
        }
        let out = dir.path().join("previews");

        let args = PreviewArgs {
            input: Some(maps),
            output: Some(out.clone()),
            scale: None,
            project: ProjectArgs::default(),
        };
        let written = run(args, &Printer::new().quiet(true)).unwrap();

        assert_eq!(written, vec![out.join("a-preview.png"), out.join("b-preview.png")]);
        assert!(written.iter().all(|p| p.exists()));
    }
}
