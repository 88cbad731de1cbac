use crate::coin_classifier::error::PredictionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("camera error: {0}")]
    Camera(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error(transparent)]
    Prediction(#[from] PredictionError),
    #[error("display error: {0}")]
    Display(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("record store error: {0}")]
    Record(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ScanError {
    /// Whether the next frame may succeed where this one failed.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            ScanError::Prediction(
                PredictionError::InferenceFailed { .. } | PredictionError::PredictionUnavailable { .. }
            )
        )
    }
}
