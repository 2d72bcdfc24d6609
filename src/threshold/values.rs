//! Distinct intensity extraction.

use std::collections::{BTreeMap, BTreeSet};

use image::GrayImage;

use crate::error::{GridMaskError, Result};

/// Collect the distinct intensities present in an image.
///
/// The set iterates in ascending order. An image without pixels has no
/// values to partition and is rejected.
pub fn distinct_values(img: &GrayImage) -> Result<BTreeSet<u8>> {
    ensure_not_empty(img)?;

    let mut seen = [false; 256];
    for px in img.as_raw() {
        seen[*px as usize] = true;
    }

    Ok(seen
        .iter()
        .enumerate()
        .filter(|&(_, &present)| present)
        .map(|(value, _)| value as u8)
        .collect())
}

/// Count pixels per distinct intensity.
pub fn value_histogram(img: &GrayImage) -> Result<BTreeMap<u8, u64>> {
    ensure_not_empty(img)?;

    let mut counts = [0u64; 256];
    for px in img.as_raw() {
        counts[*px as usize] += 1;
    }

    Ok(counts
        .iter()
        .enumerate()
        .filter(|&(_, &n)| n > 0)
        .map(|(value, &n)| (value as u8, n))
        .collect())
}

fn ensure_not_empty(img: &GrayImage) -> Result<()> {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(GridMaskError::EmptyImage { width, height });
    }
    Ok(())
}
