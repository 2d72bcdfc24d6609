//! Masked compositing of two same-sized images.

use image::{GrayImage, ImageBuffer, Pixel};

use crate::error::{GridMaskError, Result};

/// Overlay `fg` onto `bg` through `mask`.
///
/// Pixels where the mask is nonzero come from the foreground; the rest come
/// from the background. All three images must share dimensions.
pub fn masked_overlay<P>(
    fg: &ImageBuffer<P, Vec<P::Subpixel>>,
    mask: &GrayImage,
    bg: &ImageBuffer<P, Vec<P::Subpixel>>,
) -> Result<ImageBuffer<P, Vec<P::Subpixel>>>
where
    P: Pixel,
{
    let dims = fg.dimensions();
    GridMaskError::check_dimensions("composite mask", dims, mask.dimensions())?;
    GridMaskError::check_dimensions("composite background", dims, bg.dimensions())?;

    let mut out = bg.clone();
    for ((dst, src), m) in out.pixels_mut().zip(fg.pixels()).zip(mask.iter()) {
        if *m != 0 {
            *dst = *src;
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, Rgb, RgbImage};

    #[test]
    fn test_masked_overlay_gray() {
        let fg = GrayImage::from_pixel(2, 2, Luma([10]));
        let bg = GrayImage::from_pixel(2, 2, Luma([200]));
        let mask = GrayImage::from_raw(2, 2, vec![255, 0, 0, 255]).unwrap();

        let out = masked_overlay(&fg, &mask, &bg).unwrap();

        assert_eq!(out.as_raw(), &vec![10, 200, 200, 10]);
    }

    #[test]
    fn test_masked_overlay_rgb() {
        let fg = RgbImage::from_pixel(2, 1, Rgb([255, 0, 0]));
        let bg = RgbImage::from_pixel(2, 1, Rgb([0, 0, 255]));
        let mask = GrayImage::from_raw(2, 1, vec![0, 1]).unwrap();

        let out = masked_overlay(&fg, &mask, &bg).unwrap();

        assert_eq!(out.get_pixel(0, 0), &Rgb([0, 0, 255]));
        assert_eq!(out.get_pixel(1, 0), &Rgb([255, 0, 0]));
    }

    #[test]
    fn test_masked_overlay_mask_mismatch() {
        let fg = GrayImage::new(2, 2);
        let bg = GrayImage::new(2, 2);
        let mask = GrayImage::new(2, 3);

        let err = masked_overlay(&fg, &mask, &bg).unwrap_err();
        match err {
            GridMaskError::DimensionMismatch {
                what,
                expected,
                actual,
            } => {
                assert_eq!(what, "composite mask");
                assert_eq!(expected, (2, 2));
                assert_eq!(actual, (2, 3));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_masked_overlay_background_mismatch() {
        let fg = GrayImage::new(4, 4);
        let bg = GrayImage::new(3, 4);
        let mask = GrayImage::new(4, 4);

        assert!(masked_overlay(&fg, &mask, &bg).is_err());
    }
}
