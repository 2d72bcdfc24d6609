//! Binary masks and mask-driven painting.

use image::GrayImage;

use crate::error::{GridMaskError, Result};
use crate::types::Range;

/// Mask value for pixels selected by a range.
pub const MASK_ON: u8 = u8::MAX;
/// Mask value for pixels outside a range.
pub const MASK_OFF: u8 = 0;

/// Build a mask of `img`: 255 where the pixel lies in `range`, 0 elsewhere.
pub fn in_range_mask(img: &GrayImage, range: Range) -> GrayImage {
    let mut mask = GrayImage::new(img.width(), img.height());
    for (dst, src) in mask.iter_mut().zip(img.iter()) {
        *dst = if range.contains(*src) { MASK_ON } else { MASK_OFF };
    }
    mask
}

/// Paint `value` into `img` wherever `mask` is nonzero.
///
/// Mutates the caller's buffer.
pub fn fill_mask_in_place(img: &mut GrayImage, mask: &GrayImage, value: u8) -> Result<()> {
    GridMaskError::check_dimensions("fill mask", img.dimensions(), mask.dimensions())?;

    for (dst, m) in img.iter_mut().zip(mask.iter()) {
        if *m != 0 {
            *dst = value;
        }
    }
    Ok(())
}

/// Copying variant of [`fill_mask_in_place`]; `img` is left untouched.
pub fn fill_mask(img: &GrayImage, mask: &GrayImage, value: u8) -> Result<GrayImage> {
    let mut out = img.clone();
    fill_mask_in_place(&mut out, mask, value)?;
    Ok(out)
}

/// Count selected (nonzero) mask pixels.
pub fn mask_coverage(mask: &GrayImage) -> u64 {
    mask.iter().filter(|m| **m != 0).count() as u64
}
