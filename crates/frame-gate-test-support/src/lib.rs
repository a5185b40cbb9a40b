//! Test support utilities for frame-gate.
//!
//! Provides keypoint and collaborator builders plus mock implementations of
//! every port, so pipeline behavior can be tested without real images or
//! pose models.
//!
//! # Example
//!
//! ```
//! use frame_gate_test_support::{CollaboratorFixtures, KeypointSetBuilder, MockFramingAnalyzer};
//!
//! let subject = KeypointSetBuilder::new().nose(540.0, 960.0).build();
//! assert!(subject.has_subject());
//!
//! let framing = MockFramingAnalyzer::new(CollaboratorFixtures::framing_matched(90.0));
//! assert_eq!(framing.call_count(), 0);
//! ```

mod builders;
mod mocks;

pub use builders::{CollaboratorFixtures, KeypointSetBuilder, SyntheticImageBuilder};
pub use mocks::{
    MockFramingAnalyzer, MockImageLoader, MockKeypointExtractor, MockLegacyComparator,
    MockMarginAnalyzer, MockReportOutput,
};
