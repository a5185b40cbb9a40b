//! Generated image pairs with their recorded keypoints and analysis.

#![allow(dead_code, clippy::unwrap_used)]

use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage};
use serde_json::{json, Value};
use tempfile::TempDir;

/// A temp directory holding `current.png`, `reference.png` and their sidecars.
pub struct Scene {
    pub dir: TempDir,
    pub current: PathBuf,
    pub reference: PathBuf,
}

impl Scene {
    /// Matching portrait shots that pass every gate.
    pub fn matching() -> Self {
        Self::build((90, 160), (90, 160), "normal (0.50)", "normal (0.52)")
    }

    /// A landscape current shot against a portrait reference.
    pub fn rotated() -> Self {
        Self::build((160, 90), (90, 160), "normal (0.50)", "normal (0.52)")
    }

    /// Same orientation, but a wide lens against a telephoto reference.
    pub fn lens_mismatch() -> Self {
        Self::build((90, 160), (90, 160), "wide (0.20)", "tele (0.80)")
    }

    fn build(current: (u32, u32), reference: (u32, u32), cur_lens: &str, ref_lens: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let current_path = write_png(dir.path(), "current.png", current);
        let reference_path = write_png(dir.path(), "reference.png", reference);

        write_keypoints(&dir.path().join("current.keypoints.json"), current, 0.45);
        write_keypoints(&dir.path().join("reference.keypoints.json"), reference, 0.48);
        std::fs::write(
            dir.path().join("current.analysis.json"),
            analysis(cur_lens, ref_lens).to_string(),
        )
        .unwrap();

        Self {
            dir,
            current: current_path,
            reference: reference_path,
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

fn write_png(dir: &Path, name: &str, (width, height): (u32, u32)) -> PathBuf {
    let path = dir.join(name);
    RgbImage::from_pixel(width, height, Rgb([120, 110, 100]))
        .save(&path)
        .unwrap();
    path
}

/// One person whose nose sits at `fraction` of both image dimensions.
fn write_keypoints(path: &Path, (width, height): (u32, u32), fraction: f64) {
    let doc = json!({
        "num_persons": 1,
        "body_keypoints": {
            "nose": {"position": [f64::from(width) * fraction, f64::from(height) * fraction]}
        }
    });
    std::fs::write(path, doc.to_string()).unwrap();
}

fn analysis(cur_lens: &str, ref_lens: &str) -> Value {
    let margins = json!({"left": 0.2, "right": 0.2, "top": 0.1, "bottom": 0.1});
    json!({
        "framing": {
            "shot_type": {
                "current": {"type": "medium_shot", "name": "Medium shot"},
                "reference": {"type": "medium_shot", "name": "Medium shot"},
                "score": 90.0,
                "same_category": true
            },
            "subject_ratio": {"current_ratio": 0.3, "reference_ratio": 0.3, "score": 90.0}
        },
        "margins": {
            "current_margins": margins,
            "reference_margins": margins,
            "horizontal": {"status": "balanced", "score": 90.0},
            "vertical": {"status": "balanced", "score": 90.0},
            "overall_score": 90.0
        },
        "legacy": {"compression": {"current": cur_lens, "reference": ref_lens}}
    })
}
