//! Filesystem adapter for loading images.

use std::path::Path;

use anyhow::{Context, Result};
use frame_gate_core::{ImageInfo, ImageLoader};
use tracing::{debug, warn};

/// Supported image extensions.
const RASTER_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "tiff", "tif", "webp", "bmp", "gif"];

/// Filesystem image loader adapter.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsImageLoader;

impl FsImageLoader {
    /// Creates a new filesystem loader.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ImageLoader for FsImageLoader {
    fn load(&self, path: &str) -> Option<ImageInfo> {
        match load_image(Path::new(path)) {
            Ok(info) => {
                debug!(
                    "Loaded {} ({}x{})",
                    info.path, info.shape.width, info.shape.height
                );
                Some(info)
            }
            Err(e) => {
                warn!("{e:#}");
                None
            }
        }
    }
}

/// Checks if a path has a supported image extension.
#[must_use]
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .is_some_and(|e| RASTER_EXTENSIONS.contains(&e.as_str()))
}

/// Loads an image from the filesystem.
///
/// # Errors
///
/// Returns an error if the extension is unsupported or decoding fails.
pub fn load_image(path: &Path) -> Result<ImageInfo> {
    if !is_supported_image(path) {
        anyhow::bail!("Unsupported file type: {}", path.display());
    }
    let image =
        image::open(path).with_context(|| format!("Failed to open image: {}", path.display()))?;
    Ok(ImageInfo::new(path.to_string_lossy(), image))
}
