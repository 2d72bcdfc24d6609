//! PNG output for masks and maps.
//!
//! Writes 8-bit images to PNG files with optional integer scaling.

use std::fs;
use std::path::Path;

use image::{ImageBuffer, Pixel};

use crate::error::{GridMaskError, Result};

/// Write an image to a PNG file.
///
/// # Arguments
///
/// * `img` - The image to write (grayscale or RGB)
/// * `path` - Output file path; parent directories are created
/// * `scale` - Integer scale factor (1 = no scaling)
pub fn write_png<P>(img: &ImageBuffer<P, Vec<u8>>, path: &Path, scale: u32) -> Result<()>
where
    P: Pixel<Subpixel = u8> + image::PixelWithColorType,
{
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| GridMaskError::Io {
                path: parent.to_path_buf(),
                message: format!("Failed to create output directory: {}", e),
            })?;
        }
    }

    let scaled = scale_nearest(img, scale)?;
    scaled.save(path).map_err(|e| GridMaskError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(())
}

/// Scale an image by an integer factor.
///
/// Uses nearest-neighbour scaling so mask edges stay crisp. A scale of 0 is
/// treated as 1. A scale whose output would not fit in `u32` dimensions is
/// rejected.
pub fn scale_nearest<P>(
    img: &ImageBuffer<P, Vec<u8>>,
    scale: u32,
) -> Result<ImageBuffer<P, Vec<u8>>>
where
    P: Pixel<Subpixel = u8>,
{
    let scale = scale.max(1);
    if scale == 1 {
        return Ok(img.clone());
    }

    let (width, height) = img.dimensions();
    let scaled = width.checked_mul(scale).zip(height.checked_mul(scale));
    let Some((out_width, out_height)) = scaled else {
        return Err(GridMaskError::Config {
            message: format!(
                "scale {} is too large for a {}x{} image",
                scale, width, height
            ),
            help: Some("Use a smaller `--scale` or `scale:` in gridmask.yaml".to_string()),
        });
    };

    Ok(ImageBuffer::from_fn(out_width, out_height, |x, y| {
        *img.get_pixel(x / scale, y / scale)
    }))
}
