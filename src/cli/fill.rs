//! Fill command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::{load_map, load_mask};
use crate::display::write_png;
use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::threshold::{fill_mask, mask_coverage};

/// Paint an intensity into an image wherever a mask is set
#[derive(Args, Debug)]
pub struct FillArgs {
    /// Grayscale image to paint into
    pub image: PathBuf,

    /// Mask image; a pixel with any nonzero colour channel is painted
    pub mask: PathBuf,

    /// Replacement intensity
    #[arg(long, default_value = "0")]
    pub value: u8,

    /// Output PNG path
    #[arg(long, short, required = true)]
    pub output: PathBuf,
}

pub fn run(args: FillArgs, printer: &Printer) -> Result<()> {
    let img = load_map(&args.image)?;
    let mask = load_mask(&args.mask)?;

    let filled = fill_mask(&img, &mask, args.value)?;
    write_png(&filled, &args.output, 1)?;

    let painted = mask_coverage(&mask) as usize;
    printer.status(
        "Filled",
        &format!(
            "{} with {} -> {}",
            plural(painted, "pixel", "pixels"),
            args.value,
            display_path(&args.output)
        ),
    );

    Ok(())
}
