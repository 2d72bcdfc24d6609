//! Map loader - decodes a raster file into an 8-bit grayscale buffer.

use std::path::Path;

use image::{DynamicImage, GrayImage, Luma};

use crate::error::{GridMaskError, Result};
use crate::threshold::{MASK_OFF, MASK_ON};

/// Load a map image as 8-bit grayscale.
///
/// Colour inputs are converted to luma. A missing, unreadable or
/// undecodable file is reported as [`GridMaskError::Load`]; an image without
/// pixels is reported as [`GridMaskError::EmptyImage`].
pub fn load_map(path: &Path) -> Result<GrayImage> {
    let img = load_image(path)?.into_luma8();

    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(GridMaskError::EmptyImage { width, height });
    }

    Ok(img)
}

/// Load a mask image, binarised to `0`/`255`.
///
/// A pixel is set when any colour channel is nonzero. Alpha is ignored.
/// Converting through luma instead would drop dark colours such as
/// `(0, 0, 1)`.
pub fn load_mask(path: &Path) -> Result<GrayImage> {
    let img = load_image(path)?.into_rgb16();

    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(GridMaskError::EmptyImage { width, height });
    }

    Ok(GrayImage::from_fn(width, height, |x, y| {
        if img.get_pixel(x, y).0.iter().any(|&c| c != 0) {
            Luma([MASK_ON])
        } else {
            Luma([MASK_OFF])
        }
    }))
}

/// Load an image keeping its colour type.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    if !path.exists() {
        return Err(GridMaskError::Load {
            path: path.to_path_buf(),
            message: "file not found".to_string(),
        });
    }

    image::open(path).map_err(|e| GridMaskError::Load {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
