use std::path::PathBuf;
use thiserror::Error;

/// Why the classifier could not be brought up.
#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("model file not found: {}", .0.display())]
    MissingArtifact(PathBuf),
    #[error("invalid model input shape {height}x{width}")]
    InvalidInputShape { height: u32, width: u32 },
    #[error("failed to load model: {0}")]
    LoadFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

#[derive(Debug, Error)]
pub enum PredictionError {
    /// The model never loaded; the engine is not consulted.
    #[error("model unavailable: {reason}")]
    ModelUnavailable { reason: String },
    #[error("inference failed: {source}")]
    InferenceFailed {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// The engine succeeded but reported nothing that can be decoded.
    #[error("prediction unavailable: {reason}")]
    PredictionUnavailable { reason: String },
}
