//! Port definitions for hexagonal architecture.
//!
//! These traits define the boundaries between the gate pipeline and the
//! collaborators it consumes: image decoding, pose extraction, the framing and
//! margin analyzers, the legacy compression comparator, and report output.

mod analyzers;
mod image_loader;
mod report_output;

pub use analyzers::{FramingAnalyzer, KeypointExtractor, LegacyComparator, MarginAnalyzer};
pub use image_loader::ImageLoader;
pub use report_output::ReportOutput;
