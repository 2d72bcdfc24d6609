//! Midpoint partitioning of distinct intensities into ranges.
//!
//! For sorted distinct values `v_1 < ... < v_k` each adjacent pair gets a
//! divider `v_i + (v_{i+1} - v_i) / 2`. The dividers, bracketed by the
//! minimum and maximum value, become the range endpoints.

use image::GrayImage;

use crate::error::{GridMaskError, Result};
use crate::types::{Boundary, Range};

use super::values::distinct_values;

/// Midpoint dividers between adjacent sorted values.
///
/// Returns `k - 1` dividers for `k` values; a single value yields none.
/// Each divider satisfies `v_i <= d_i < v_{i+1}`.
pub fn dividers(values: &[u8]) -> Vec<u8> {
    values
        .windows(2)
        .map(|pair| pair[0] + (pair[1] - pair[0]) / 2)
        .collect()
}

/// Partition sorted distinct values into contiguous inclusive ranges.
///
/// Values must be strictly ascending. The ranges jointly cover
/// `[values[0], values[k-1]]` and every value lies in at least one range.
pub fn partition_ranges(values: &[u8], boundary: Boundary) -> Result<Vec<Range>> {
    let (first, last) = match (values.first(), values.last()) {
        (Some(&first), Some(&last)) => (first, last),
        _ => {
            return Err(GridMaskError::InvalidValues {
                message: "no values to partition".to_string(),
            })
        }
    };

    if let Some(pair) = values.windows(2).find(|pair| pair[0] >= pair[1]) {
        return Err(GridMaskError::InvalidValues {
            message: format!(
                "values must be strictly ascending, found {} before {}",
                pair[0], pair[1]
            ),
        });
    }

    let mut points = Vec::with_capacity(values.len() + 1);
    points.push(first);
    points.extend(dividers(values));
    points.push(last);

    points
        .windows(2)
        .enumerate()
        .map(|(i, ends)| {
            let low = match boundary {
                Boundary::Disjoint if i > 0 => ends[0] + 1,
                _ => ends[0],
            };
            Range::new(low, ends[1])
        })
        .collect()
}

/// Derive the threshold ranges for an image from its distinct values.
pub fn tri_ranges(img: &GrayImage, boundary: Boundary) -> Result<Vec<Range>> {
    let values: Vec<u8> = distinct_values(img)?.into_iter().collect();
    partition_ranges(&values, boundary)
}
