//! Composite command implementation.
//!
//! Grayscale inputs stay grayscale; if either input carries colour both are
//! composited as RGB.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::{load_image, load_mask};
use crate::display::write_png;
use crate::error::Result;
use crate::output::{display_path, Printer};
use crate::threshold::masked_overlay;

/// Overlay a foreground image onto a background through a mask
#[derive(Args, Debug)]
pub struct CompositeArgs {
    /// Foreground image, used where the mask is set
    pub foreground: PathBuf,

    /// Mask image; pixels with any nonzero colour channel select the foreground
    pub mask: PathBuf,

    /// Background image, used where the mask is clear
    pub background: PathBuf,

    /// Output PNG path
    #[arg(long, short, required = true)]
    pub output: PathBuf,
}

pub fn run(args: CompositeArgs, printer: &Printer) -> Result<()> {
    let fg = load_image(&args.foreground)?;
    let bg = load_image(&args.background)?;
    let mask = load_mask(&args.mask)?;

    let colour = fg.color().has_color() || bg.color().has_color();
    if colour {
        let out = masked_overlay(&fg.into_rgb8(), &mask, &bg.into_rgb8())?;
        write_png(&out, &args.output, 1)?;
    } else {
        let out = masked_overlay(&fg.into_luma8(), &mask, &bg.into_luma8())?;
        write_png(&out, &args.output, 1)?;
    }

    printer.status(
        "Composited",
        &format!(
            "{} over {} -> {}",
            display_path(&args.foreground),
            display_path(&args.background),
            display_path(&args.output)
        ),
    );

    Ok(())
}
