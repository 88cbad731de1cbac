use crate::coin_classifier::classifier::CoinClassifier;
use crate::coin_classifier::decoder::DecodeOptions;
use crate::coin_classifier::error::ModelLoadError;
use crate::inference_engine::impl_fake::InferenceEngineFake;
use crate::inference_engine::interface::{InferenceEngine, InferenceOutput};
use crate::label_catalog::LabelCatalog;
use crate::library::logger::{impl_console::LoggerConsole, interface::Logger};
use std::path::PathBuf;
use std::sync::Arc;

#[allow(dead_code)]
pub struct Fixture {
    pub logger: Arc<dyn Logger + Send + Sync>,
    pub engine: Arc<InferenceEngineFake>,
    pub classifier: CoinClassifier,
}

impl Fixture {
    pub fn new(labels: &str, results: Vec<Result<InferenceOutput, String>>) -> Self {
        Self::with_options(labels, results, DecodeOptions::default())
    }

    pub fn with_options(
        labels: &str,
        results: Vec<Result<InferenceOutput, String>>,
        options: DecodeOptions,
    ) -> Self {
        let logger = logger();
        let engine = Arc::new(InferenceEngineFake::scripted(logger.clone(), results));
        let classifier = CoinClassifier::new(
            LabelCatalog::load(Some(labels)),
            Ok(engine.clone() as Arc<dyn InferenceEngine + Send + Sync>),
            options,
            logger.clone(),
        );

        Self {
            logger,
            engine,
            classifier,
        }
    }

    /// Classifier whose model failed to load; the fake engine is kept only to count calls.
    pub fn unavailable(labels: &str) -> Self {
        let logger = logger();
        let engine = Arc::new(InferenceEngineFake::new(logger.clone()));
        let classifier = CoinClassifier::new(
            LabelCatalog::load(Some(labels)),
            Err(ModelLoadError::MissingArtifact(PathBuf::from(
                "./models/coin_counter.onnx",
            ))),
            DecodeOptions::default(),
            logger.clone(),
        );

        Self {
            logger,
            engine,
            classifier,
        }
    }
}

pub fn logger() -> Arc<dyn Logger + Send + Sync> {
    Arc::new(LoggerConsole::new(
        chrono::FixedOffset::east_opt(9 * 3600).unwrap(),
    ))
}

pub fn catalog(labels: &[&str]) -> LabelCatalog {
    LabelCatalog::load(Some(&labels.join("\n")))
}
