//! Keypoints read from JSON files recorded next to each image.
//!
//! The pose extractor runs out of process and writes `<stem>.keypoints.json`
//! beside the photo it analyzed. This adapter reads those files back.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use frame_gate_core::domain::{ImageInfo, KeypointSet};
use frame_gate_core::KeypointExtractor;
use tracing::debug;

/// Suffix appended to an image's file stem to find its keypoints.
pub const SIDECAR_SUFFIX: &str = ".keypoints.json";

/// Returns the default sidecar path for an image.
///
/// `shots/me.jpg` maps to `shots/me.keypoints.json`.
#[must_use]
pub fn sidecar_path(image: &Path) -> PathBuf {
    let stem = image
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    image.with_file_name(format!("{stem}{SIDECAR_SUFFIX}"))
}

/// Keypoint extractor backed by sidecar JSON files.
#[derive(Debug, Clone, Default)]
pub struct SidecarKeypoints {
    overrides: HashMap<String, PathBuf>,
}

impl SidecarKeypoints {
    /// Reads keypoints from the default sidecar location of each image.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the keypoints for `image` from `file` instead of its sidecar.
    #[must_use]
    pub fn with_override(mut self, image: impl Into<String>, file: impl Into<PathBuf>) -> Self {
        self.overrides.insert(image.into(), file.into());
        self
    }

    /// Where keypoints for `image` are read from.
    #[must_use]
    pub fn source_for(&self, image: &str) -> PathBuf {
        self.overrides
            .get(image)
            .cloned()
            .unwrap_or_else(|| sidecar_path(Path::new(image)))
    }
}

impl KeypointExtractor for SidecarKeypoints {
    fn extract(&self, image: &ImageInfo) -> Result<KeypointSet> {
        let source = self.source_for(&image.path);
        debug!("Reading keypoints from {}", source.display());
        read_keypoints(&source)
    }
}

/// Parses a keypoints JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid keypoints JSON.
pub fn read_keypoints(path: &Path) -> Result<KeypointSet> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read keypoints: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Invalid keypoints JSON: {}", path.display()))
}
