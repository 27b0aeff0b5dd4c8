//! Remote emotion-recognition capability.
//!
//! The recognition service is an external collaborator. The pipeline
//! only depends on this trait, so classifier and compositor tests
//! never need network access.

use crate::score::EmotionScores;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecognitionError {
    #[error("emotion service call failed: {0}")]
    ServiceFailed(String),
}

/// Black box returning one score vector per detected face.
///
/// An empty result means the service responded but found no face;
/// callers must short-circuit before invoking the classifier.
pub trait EmotionRecognizer: Send {
    fn recognize(&self, image: &[u8]) -> Result<Vec<EmotionScores>, RecognitionError>;
}
