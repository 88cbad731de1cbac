use crate::coin_classifier::prediction_result::PredictionResult;
use std::error::Error;

/// Where prediction results and classifier status end up for the user.
pub trait DeviceDisplay: Send + Sync {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;

    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Replaces the current content with the result lines.
    fn show_prediction(&mut self, result: &PredictionResult)
        -> Result<(), Box<dyn Error + Send + Sync>>;

    /// One-line status, e.g. why capture is disabled.
    fn show_status(&mut self, message: &str) -> Result<(), Box<dyn Error + Send + Sync>>;
}
