//! Thresholding for occupancy-grid maps.
//!
//! Everything here is side-effect free: functions take images by reference
//! and return new buffers, except [`fill_mask_in_place`] which mutates the
//! buffer it is handed.

mod composite;
mod mask;
mod partition;
mod values;

pub use composite::masked_overlay;
pub use mask::{fill_mask, fill_mask_in_place, in_range_mask, mask_coverage, MASK_OFF, MASK_ON};
pub use partition::{dividers, partition_ranges, tri_ranges};
pub use values::{distinct_values, value_histogram};
