//! Keypoints produced by the external pose extractor.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single named landmark in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keypoint {
    /// `[x, y]` pixel position.
    pub position: [f64; 2],
}

impl Keypoint {
    /// Creates a keypoint at the given pixel position.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { position: [x, y] }
    }
}

/// Body joints and face landmarks detected in one image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeypointSet {
    /// Number of detected people.
    pub num_persons: u32,
    /// Named body joints (`nose`, `left_shoulder`, ...).
    pub body_keypoints: BTreeMap<String, Keypoint>,
    /// Named face landmarks.
    pub face_landmarks: BTreeMap<String, Keypoint>,
}

impl KeypointSet {
    /// An empty set: nobody detected.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether at least one person was detected.
    #[must_use]
    pub const fn has_subject(&self) -> bool {
        self.num_persons > 0
    }

    /// Position of a named body joint.
    #[must_use]
    pub fn body(&self, name: &str) -> Option<[f64; 2]> {
        self.body_keypoints.get(name).map(|k| k.position)
    }
}
