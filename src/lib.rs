//! gridmask - Occupancy-grid map region masks
//!
//! A library for splitting grayscale occupancy-grid maps into per-intensity
//! regions: distinct value extraction, midpoint range partitioning, binary
//! masks, mask fills and masked compositing.

pub mod cli;
pub mod discovery;
pub mod display;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod threshold;
pub mod types;

pub use discovery::{discover, load_map, Config, Project};
pub use display::{CaptureSink, DisplaySink, NullSink, PngSink};
pub use error::{GridMaskError, Result};
pub use pipeline::{analyze, MapReport, PipelineOptions, RegionSummary};
pub use threshold::{
    distinct_values, fill_mask, fill_mask_in_place, in_range_mask, masked_overlay,
    partition_ranges, tri_ranges,
};
pub use types::{Boundary, Legend, Range};
