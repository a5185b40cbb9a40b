//! Image loader port.

use crate::domain::ImageInfo;

/// Port for loading one image by path.
pub trait ImageLoader: Send + Sync {
    /// Loads and decodes an image.
    ///
    /// Returns `None` when the image cannot be read or decoded; the pipeline
    /// turns that into an input failure instead of an error.
    fn load(&self, path: &str) -> Option<ImageInfo>;
}
