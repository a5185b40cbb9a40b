//! Integration tests for the filesystem adapters against real files.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::path::{Path, PathBuf};

use frame_gate_adapters::{
    analysis_path, sidecar_path, FsImageLoader, RecordedAnalysis, SidecarKeypoints,
};
use frame_gate_core::{
    Evaluation, ExecutionPolicy, GateConfig, GateKey, GatePipeline, GateSession, ImageLoader,
    ImageShape, KeypointExtractor, RunStatus,
};
use image::{Rgb, RgbImage};
use tempfile::TempDir;

fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    RgbImage::from_pixel(width, height, Rgb([90, 120, 150]))
        .save(&path)
        .expect("write test image");
    path
}

fn write_keypoints(image: &Path, nose: (f64, f64)) {
    let doc = serde_json::json!({
        "num_persons": 1,
        "body_keypoints": {"nose": {"position": [nose.0, nose.1]}},
        "face_landmarks": {}
    });
    std::fs::write(sidecar_path(image), doc.to_string()).unwrap();
}

fn write_analysis(current: &Path, current_lens: &str, reference_lens: &str) -> PathBuf {
    let margins = serde_json::json!({"left": 0.2, "right": 0.2, "top": 0.1, "bottom": 0.1});
    let doc = serde_json::json!({
        "framing": {
            "shot_type": {
                "current": {"type": "medium_shot", "name": "Medium shot"},
                "reference": {"type": "medium_shot", "name": "Medium shot"},
                "score": 92.0,
                "same_category": true
            },
            "subject_ratio": {"current_ratio": 0.3, "reference_ratio": 0.31, "score": 88.0}
        },
        "margins": {
            "current_margins": margins,
            "reference_margins": margins,
            "horizontal": {"status": "balanced", "score": 90.0},
            "vertical": {"status": "balanced", "score": 90.0},
            "overall_score": 90.0
        },
        "legacy": {"compression": {"current": current_lens, "reference": reference_lens}}
    });
    let path = analysis_path(current);
    std::fs::write(&path, doc.to_string()).unwrap();
    path
}

fn session(analysis: &RecordedAnalysis) -> GateSession {
    GateSession::new(
        Box::new(FsImageLoader::new()),
        Box::new(SidecarKeypoints::new()),
        Box::new(analysis.clone()),
        GatePipeline::new(
            GateConfig::default(),
            Box::new(analysis.clone()),
            Box::new(analysis.clone()),
        ),
    )
}

#[test]
fn test_load_png_reads_dimensions() {
    let dir = TempDir::new().unwrap();
    let path = write_png(dir.path(), "shot.png", 60, 80);

    let info = FsImageLoader::new()
        .load(path.to_str().unwrap())
        .expect("png should load");
    assert_eq!(info.shape, ImageShape::new(60, 80));
}

#[test]
fn test_corrupt_file_does_not_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.jpg");
    std::fs::write(&path, b"definitely not a jpeg").unwrap();

    assert!(FsImageLoader::new().load(path.to_str().unwrap()).is_none());
}

#[test]
fn test_sidecar_keypoints_round_trip_from_disk() {
    let dir = TempDir::new().unwrap();
    let image = write_png(dir.path(), "me.png", 40, 40);
    write_keypoints(&image, (12.0, 18.0));

    let info = FsImageLoader::new().load(image.to_str().unwrap()).unwrap();
    let keypoints = SidecarKeypoints::new().extract(&info).unwrap();
    assert_eq!(keypoints.num_persons, 1);
    assert_eq!(keypoints.body("nose"), Some([12.0, 18.0]));
}

#[test]
fn test_malformed_sidecar_is_error() {
    let dir = TempDir::new().unwrap();
    let image = write_png(dir.path(), "me.png", 40, 40);
    std::fs::write(sidecar_path(&image), "{ not json").unwrap();

    let info = FsImageLoader::new().load(image.to_str().unwrap()).unwrap();
    let err = SidecarKeypoints::new().extract(&info).unwrap_err();
    assert!(format!("{err:#}").contains("Invalid keypoints JSON"));
}

#[test]
fn test_end_to_end_from_files_passes() {
    let dir = TempDir::new().unwrap();
    let current = write_png(dir.path(), "current.png", 90, 160);
    let reference = write_png(dir.path(), "reference.png", 90, 160);
    write_keypoints(&current, (40.0, 60.0));
    write_keypoints(&reference, (44.0, 64.0));
    let analysis =
        RecordedAnalysis::from_file(&write_analysis(&current, "normal (0.50)", "normal (0.52)"))
            .unwrap();

    let evaluation = session(&analysis).evaluate(
        current.to_str().unwrap(),
        reference.to_str().unwrap(),
        "generic",
        ExecutionPolicy::StopOnFail,
    );

    let result = evaluation.as_run().expect("completed run");
    assert_eq!(result.status, RunStatus::AllGatesPassed);
    assert_eq!(result.score(GateKey::Compression), Some(95.0));
    assert_eq!(result.score(GateKey::Composition), Some(90.0));
}

#[test]
fn test_end_to_end_missing_sidecars_still_runs() {
    let dir = TempDir::new().unwrap();
    let current = write_png(dir.path(), "current.png", 160, 90);
    let reference = write_png(dir.path(), "reference.png", 160, 90);
    let analysis =
        RecordedAnalysis::from_file(&write_analysis(&current, "wide (0.20)", "tele (0.80)"))
            .unwrap();

    let evaluation = session(&analysis).evaluate(
        current.to_str().unwrap(),
        reference.to_str().unwrap(),
        "galaxy",
        ExecutionPolicy::StopOnFail,
    );

    let result = evaluation.as_run().expect("completed run");
    assert_eq!(result.score(GateKey::Composition), Some(75.0));
    assert_eq!(result.status, RunStatus::BlockedAtCompression);
}

#[test]
fn test_end_to_end_missing_image_fails_input() {
    let dir = TempDir::new().unwrap();
    let current = write_png(dir.path(), "current.png", 90, 160);
    let analysis =
        RecordedAnalysis::from_file(&write_analysis(&current, "normal (0.5)", "normal (0.5)"))
            .unwrap();

    let evaluation = session(&analysis).evaluate(
        current.to_str().unwrap(),
        dir.path().join("gone.png").to_str().unwrap(),
        "generic",
        ExecutionPolicy::EvaluateAll,
    );

    assert!(matches!(evaluation, Evaluation::Failed(_)));
}
