//! Mock implementations of core port traits.
//!
//! Mocks are cheap to clone and clones share their recorded calls, so a test
//! can hand a boxed clone to the pipeline and assert on the original.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use frame_gate_core::domain::{
    ComparisonMode, Evaluation, FramingAnalysis, ImageInfo, ImageShape, KeypointSet,
    LegacyComparison, MarginAnalysis,
};
use frame_gate_core::ports::{
    FramingAnalyzer, ImageLoader, KeypointExtractor, LegacyComparator, MarginAnalyzer,
    ReportOutput,
};

use crate::SyntheticImageBuilder;

fn bump(counter: &Mutex<usize>) {
    *counter.lock().unwrap_or_else(PoisonError::into_inner) += 1;
}

fn read(counter: &Mutex<usize>) -> usize {
    *counter.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Mock implementation of `ImageLoader`.
///
/// Serves pre-built images by path; unknown paths fail to load.
#[derive(Clone, Default)]
pub struct MockImageLoader {
    images: HashMap<String, ImageInfo>,
    requested: Arc<Mutex<Vec<String>>>,
}

impl MockImageLoader {
    /// Creates a loader that knows no images.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a blank image of the given size under `path`.
    #[must_use]
    pub fn with_image(mut self, path: &str, width: u32, height: u32) -> Self {
        self.images.insert(
            path.to_string(),
            SyntheticImageBuilder::blank(path, width, height),
        );
        self
    }

    /// Paths requested so far, in order.
    #[must_use]
    pub fn requested(&self) -> Vec<String> {
        self.requested
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ImageLoader for MockImageLoader {
    fn load(&self, path: &str) -> Option<ImageInfo> {
        self.requested
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(path.to_string());
        self.images.get(path).cloned()
    }
}

/// Mock implementation of `KeypointExtractor`.
///
/// Returns the keypoints registered for an image path, or an empty set.
#[derive(Clone, Default)]
pub struct MockKeypointExtractor {
    keypoints: HashMap<String, KeypointSet>,
    fail: bool,
    call_count: Arc<Mutex<usize>>,
}

impl MockKeypointExtractor {
    /// Creates an extractor that finds nobody.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an extractor whose every call fails.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Registers keypoints for an image path.
    #[must_use]
    pub fn with(mut self, path: &str, keypoints: KeypointSet) -> Self {
        self.keypoints.insert(path.to_string(), keypoints);
        self
    }

    /// Number of `extract()` calls.
    #[must_use]
    pub fn call_count(&self) -> usize {
        read(&self.call_count)
    }
}

impl KeypointExtractor for MockKeypointExtractor {
    fn extract(&self, image: &ImageInfo) -> anyhow::Result<KeypointSet> {
        bump(&self.call_count);
        if self.fail {
            anyhow::bail!("pose model unavailable");
        }
        Ok(self
            .keypoints
            .get(&image.path)
            .cloned()
            .unwrap_or_default())
    }
}

/// Mock implementation of `FramingAnalyzer` returning a fixed result.
#[derive(Clone)]
pub struct MockFramingAnalyzer {
    result: FramingAnalysis,
    call_count: Arc<Mutex<usize>>,
}

impl MockFramingAnalyzer {
    /// Creates an analyzer that always returns `result`.
    #[must_use]
    pub fn new(result: FramingAnalysis) -> Self {
        Self {
            result,
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Number of `analyze()` calls.
    #[must_use]
    pub fn call_count(&self) -> usize {
        read(&self.call_count)
    }
}

impl FramingAnalyzer for MockFramingAnalyzer {
    fn analyze(
        &self,
        _current: &KeypointSet,
        _reference: &KeypointSet,
        _current_shape: ImageShape,
        _reference_shape: ImageShape,
    ) -> FramingAnalysis {
        bump(&self.call_count);
        self.result.clone()
    }
}

/// Mock implementation of `MarginAnalyzer` returning a fixed result.
#[derive(Clone)]
pub struct MockMarginAnalyzer {
    result: MarginAnalysis,
    call_count: Arc<Mutex<usize>>,
}

impl MockMarginAnalyzer {
    /// Creates an analyzer that always returns `result`.
    #[must_use]
    pub fn new(result: MarginAnalysis) -> Self {
        Self {
            result,
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Number of `analyze()` calls.
    #[must_use]
    pub fn call_count(&self) -> usize {
        read(&self.call_count)
    }
}

impl MarginAnalyzer for MockMarginAnalyzer {
    fn analyze(
        &self,
        _current: &KeypointSet,
        _reference: &KeypointSet,
        _current_shape: ImageShape,
        _reference_shape: ImageShape,
    ) -> MarginAnalysis {
        bump(&self.call_count);
        self.result.clone()
    }
}

/// Mock implementation of `LegacyComparator` returning a fixed result.
#[derive(Clone)]
pub struct MockLegacyComparator {
    result: LegacyComparison,
    modes: Arc<Mutex<Vec<ComparisonMode>>>,
}

impl MockLegacyComparator {
    /// Creates a comparator that always returns `result`.
    #[must_use]
    pub fn new(result: LegacyComparison) -> Self {
        Self {
            result,
            modes: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Modes requested so far, in order.
    #[must_use]
    pub fn modes(&self) -> Vec<ComparisonMode> {
        self.modes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl LegacyComparator for MockLegacyComparator {
    fn compare(
        &self,
        _current_path: &str,
        _reference_path: &str,
        mode: ComparisonMode,
    ) -> LegacyComparison {
        self.modes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(mode);
        self.result.clone()
    }
}

/// Mock implementation of `ReportOutput`.
///
/// Captures evaluations for later assertions.
#[derive(Clone, Default)]
pub struct MockReportOutput {
    evaluations: Arc<Mutex<Vec<Evaluation>>>,
    flush_count: Arc<Mutex<usize>>,
}

impl MockReportOutput {
    /// Creates a new mock output.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all captured evaluations.
    #[must_use]
    pub fn evaluations(&self) -> Vec<Evaluation> {
        self.evaluations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the number of times `flush()` was called.
    #[must_use]
    pub fn flush_count(&self) -> usize {
        read(&self.flush_count)
    }
}

impl ReportOutput for MockReportOutput {
    fn write(&self, evaluation: &Evaluation) -> anyhow::Result<()> {
        self.evaluations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(evaluation.clone());
        Ok(())
    }

    fn flush(&self) -> anyhow::Result<()> {
        bump(&self.flush_count);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::{CollaboratorFixtures, KeypointSetBuilder};
    use frame_gate_core::domain::InputFailure;

    #[test]
    fn test_mock_image_loader() {
        let loader = MockImageLoader::new().with_image("a.jpg", 40, 30);
        let shared = loader.clone();

        assert_eq!(loader.load("a.jpg").map(|i| i.shape), Some(ImageShape::new(40, 30)));
        assert!(loader.load("missing.jpg").is_none());
        assert_eq!(shared.requested(), vec!["a.jpg", "missing.jpg"]);
    }

    #[test]
    fn test_mock_extractor() {
        let subject = KeypointSetBuilder::new().nose(1.0, 2.0).build();
        let extractor = MockKeypointExtractor::new().with("a.jpg", subject.clone());
        let image = SyntheticImageBuilder::blank("a.jpg", 4, 4);
        let other = SyntheticImageBuilder::blank("b.jpg", 4, 4);

        assert_eq!(extractor.extract(&image).unwrap(), subject);
        assert_eq!(extractor.extract(&other).unwrap(), KeypointSet::empty());
        assert_eq!(extractor.call_count(), 2);

        assert!(MockKeypointExtractor::failing().extract(&image).is_err());
    }

    #[test]
    fn test_mock_analyzers_count_calls() {
        let framing = MockFramingAnalyzer::new(CollaboratorFixtures::framing_matched(80.0));
        let shape = ImageShape::new(10, 10);
        let empty = KeypointSet::empty();
        let result = framing.clone().analyze(&empty, &empty, shape, shape);
        assert!((result.shot_type.score - 80.0).abs() < f64::EPSILON);
        assert_eq!(framing.call_count(), 1);

        let legacy = MockLegacyComparator::new(LegacyComparison::default());
        let _ = legacy.compare("a", "b", ComparisonMode::Detailed);
        assert_eq!(legacy.modes(), vec![ComparisonMode::Detailed]);
    }

    #[test]
    fn test_mock_report_output() {
        let output = MockReportOutput::new();
        output
            .write(&Evaluation::Failed(InputFailure::new("image load failed")))
            .unwrap();
        output.flush().unwrap();

        assert_eq!(output.evaluations().len(), 1);
        assert_eq!(output.flush_count(), 1);
    }
}
