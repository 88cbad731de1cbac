use crate::coin_classifier::decoder::{decode, DecodeOptions};
use crate::coin_classifier::error::{ModelLoadError, PredictionError};
use crate::coin_classifier::prediction_result::PredictionResult;
use crate::coin_classifier::raw_output::RawOutput;
use crate::inference_engine::interface::{InferenceEngine, InferenceOutput};
use crate::label_catalog::LabelCatalog;
use crate::library::logger::interface::Logger;
use image::DynamicImage;
use std::sync::Arc;

enum EngineState {
    Ready(Arc<dyn InferenceEngine + Send + Sync>),
    Unavailable(String),
}

/// Runs the inference engine on a frame and decodes its output into a
/// [`PredictionResult`]. The label catalog is fixed for the lifetime of the
/// classifier.
pub struct CoinClassifier {
    labels: LabelCatalog,
    engine: EngineState,
    options: DecodeOptions,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl CoinClassifier {
    pub fn new(
        labels: LabelCatalog,
        engine: Result<Arc<dyn InferenceEngine + Send + Sync>, ModelLoadError>,
        options: DecodeOptions,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        let logger = logger.with_namespace("coin_classifier");

        let engine = match engine {
            Ok(engine) => EngineState::Ready(engine),
            Err(e) => {
                let _ = logger.error(&format!("classifier disabled: {}", e));
                EngineState::Unavailable(e.to_string())
            }
        };

        Self {
            labels,
            engine,
            options,
            logger,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.engine, EngineState::Ready(_))
    }

    /// Human-readable reason the model could not be loaded.
    pub fn load_error(&self) -> Option<&str> {
        match &self.engine {
            EngineState::Ready(_) => None,
            EngineState::Unavailable(reason) => Some(reason.as_str()),
        }
    }

    pub fn labels(&self) -> &LabelCatalog {
        &self.labels
    }

    pub fn predict(&self, frame: &DynamicImage) -> Result<PredictionResult, PredictionError> {
        let engine = match &self.engine {
            EngineState::Ready(engine) => engine,
            EngineState::Unavailable(reason) => {
                return Err(PredictionError::ModelUnavailable {
                    reason: reason.clone(),
                })
            }
        };

        let output = engine
            .infer(frame)
            .map_err(|source| PredictionError::InferenceFailed { source })?;

        self.decode_output(output)
    }

    pub fn decode_output(&self, output: InferenceOutput) -> Result<PredictionResult, PredictionError> {
        let raw = RawOutput::select(output)?;
        let result = decode(&raw, &self.labels, self.options);

        let _ = self.logger.info(&format!(
            "{} (total {})",
            result.lines().join(" / "),
            result.total()
        ));

        Ok(result)
    }
}
