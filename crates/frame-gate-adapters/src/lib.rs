//! Frame Gate Adapters - External adapters for frame-gate.
//!
//! This crate provides adapters for:
//! - Filesystem image loading
//! - Keypoints recorded in JSON sidecar files
//! - Framing, margin and compression analyses recorded in a JSON file

pub mod fs;
pub mod recorded;
pub mod sidecar;

pub use fs::FsImageLoader;
pub use recorded::{analysis_path, RecordedAnalysis};
pub use sidecar::{sidecar_path, SidecarKeypoints};
