//! Image shape and decoded image types.

use image::GenericImageView;
use serde::{Deserialize, Serialize};

/// Pixel dimensions of an image, fixed once the image is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageShape {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl ImageShape {
    /// Creates a new shape.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width divided by height.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height.max(1))
    }

    /// Dimensions as `[width, height]`.
    #[must_use]
    pub const fn dims(&self) -> [u32; 2] {
        [self.width, self.height]
    }

    /// Normalizes a pixel position into `0..=1` image coordinates.
    #[must_use]
    pub fn normalize(&self, position: [f64; 2]) -> [f64; 2] {
        [
            position[0] / f64::from(self.width.max(1)),
            position[1] / f64::from(self.height.max(1)),
        ]
    }
}

/// A decoded image together with where it came from.
#[derive(Debug, Clone)]
pub struct ImageInfo {
    /// Path to the image file.
    pub path: String,
    /// Image dimensions.
    pub shape: ImageShape,
    /// Decoded image data.
    pub image: image::DynamicImage,
}

impl ImageInfo {
    /// Wraps a decoded image, reading its dimensions.
    #[must_use]
    pub fn new(path: impl Into<String>, image: image::DynamicImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            path: path.into(),
            shape: ImageShape::new(width, height),
            image,
        }
    }
}
