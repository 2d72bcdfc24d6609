//! Colour-coded region previews.
//!
//! Each range is painted in its own hue so the partition of a map can be
//! checked at a glance.

use image::{GrayImage, Rgb, RgbImage};
use palette::{Hsl, IntoColor, Srgb};

use crate::error::Result;
use crate::threshold::{in_range_mask, masked_overlay};
use crate::types::Range;

const PREVIEW_SATURATION: f32 = 0.75;
const PREVIEW_LIGHTNESS: f32 = 0.5;

/// Evenly spaced hues, one per region.
pub fn region_colours(count: usize) -> Vec<Rgb<u8>> {
    (0..count)
        .map(|i| {
            let hue = 360.0 * i as f32 / count as f32;
            let hsl = Hsl::new(hue, PREVIEW_SATURATION, PREVIEW_LIGHTNESS);
            let rgb: Srgb<f32> = hsl.into_color();
            Rgb([
                (rgb.red * 255.0).round() as u8,
                (rgb.green * 255.0).round() as u8,
                (rgb.blue * 255.0).round() as u8,
            ])
        })
        .collect()
}

/// Paint every range of `img` in its region colour.
///
/// Ranges are applied in order, so a pixel on a shared boundary ends up in
/// the colour of the later range.
pub fn region_preview(img: &GrayImage, ranges: &[Range]) -> Result<RgbImage> {
    let (width, height) = img.dimensions();
    let mut out: RgbImage = image::DynamicImage::ImageLuma8(img.clone()).into_rgb8();

    for (range, colour) in ranges.iter().zip(region_colours(ranges.len())) {
        let mask = in_range_mask(img, *range);
        let fill = RgbImage::from_pixel(width, height, colour);
        out = masked_overlay(&fill, &mask, &out)?;
    }

    Ok(out)
}
