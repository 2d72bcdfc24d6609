//! Presenting images.
//!
//! This module covers where pipeline output goes: display sinks, PNG
//! writing and colour previews of a partitioned map.

mod png;
mod preview;
mod sink;

pub use png::{scale_nearest, write_png};
pub use preview::{region_colours, region_preview};
pub use sink::{CaptureSink, DisplaySink, NullSink, PngSink};
