//! End-to-end evaluation of two image files.

use tracing::{info, warn};

use crate::domain::{
    ComparisonMode, Evaluation, ExecutionPolicy, ImageInfo, InputFailure, KeypointSet,
};
use crate::ports::{ImageLoader, KeypointExtractor, LegacyComparator};

use super::{GateInput, GatePipeline};

/// A pipeline wired to its image-level collaborators.
pub struct GateSession {
    loader: Box<dyn ImageLoader>,
    extractor: Box<dyn KeypointExtractor>,
    legacy: Box<dyn LegacyComparator>,
    pipeline: GatePipeline,
}

impl GateSession {
    /// Creates a session.
    #[must_use]
    pub fn new(
        loader: Box<dyn ImageLoader>,
        extractor: Box<dyn KeypointExtractor>,
        legacy: Box<dyn LegacyComparator>,
        pipeline: GatePipeline,
    ) -> Self {
        Self {
            loader,
            extractor,
            legacy,
            pipeline,
        }
    }

    /// The wrapped pipeline.
    #[must_use]
    pub const fn pipeline(&self) -> &GatePipeline {
        &self.pipeline
    }

    /// Loads both images, gathers collaborator results and runs the gates.
    ///
    /// An image that fails to load yields [`Evaluation::Failed`]; everything
    /// else degrades inside the gates.
    pub fn evaluate(
        &self,
        current_path: &str,
        reference_path: &str,
        device: &str,
        policy: ExecutionPolicy,
    ) -> Evaluation {
        info!(current = current_path, reference = reference_path, "evaluating");

        let (Some(current), Some(reference)) = (
            self.loader.load(current_path),
            self.loader.load(reference_path),
        ) else {
            warn!(
                current = current_path,
                reference = reference_path,
                "could not load both images"
            );
            return Evaluation::Failed(InputFailure::new(
                self.pipeline.messages().image_load_failed(),
            ));
        };

        let input = GateInput {
            current: self.keypoints(&current),
            reference: self.keypoints(&reference),
            current_shape: current.shape,
            reference_shape: reference.shape,
            legacy: self
                .legacy
                .compare(current_path, reference_path, ComparisonMode::Detailed),
            device: device.to_string(),
        };

        Evaluation::Completed(Box::new(self.pipeline.run(&input, policy)))
    }

    fn keypoints(&self, image: &ImageInfo) -> KeypointSet {
        match self.extractor.extract(image) {
            Ok(keypoints) => {
                tracing::debug!(
                    path = %image.path,
                    persons = keypoints.num_persons,
                    body = keypoints.body_keypoints.len(),
                    face = keypoints.face_landmarks.len(),
                    "keypoints extracted"
                );
                keypoints
            }
            Err(e) => {
                warn!(
                    path = %image.path,
                    error = %e,
                    "keypoint extraction failed, treating as no subject"
                );
                KeypointSet::empty()
            }
        }
    }
}
