//! Core domain types for gridmask.
//!
//! - `Range` - inclusive intensity range
//! - `Boundary` - how adjacent ranges treat their shared divider
//! - `Legend` - conventional names for map intensities

mod legend;
mod range;

pub use legend::{Legend, FREE, OBSTACLE, UNKNOWN};
pub use range::{Boundary, Range};
