use crate::inference_engine::models::model_config::{ModelConfig, ModelHead};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    /// Plain-text labels file, one label per line. `None` uses the built-in catalog.
    pub labels_path: Option<PathBuf>,
    pub model: ModelConfig,
    /// Added to the argmax index of a count distribution. Use 1 when count classes enumerate 1..N.
    pub count_start_offset: u32,
    pub scan_interval: Duration,
    pub max_scans: Option<usize>,
    /// Replay photos from this directory instead of the built-in fake camera.
    pub photos_dir: Option<PathBuf>,
    pub use_gui: bool,
    /// Random counts instead of the ONNX model, for trying out the pipeline.
    pub use_fake_engine: bool,
    pub timezone: chrono::FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            labels_path: Some(PathBuf::from("./models/labels.txt")),
            model: ModelConfig::default(),
            count_start_offset: 0,
            scan_interval: Duration::from_secs(1),
            max_scans: None,
            photos_dir: None,
            use_gui: false,
            use_fake_engine: false,
            timezone: japan_standard_time(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup("COIN_COUNTER_LABELS") {
            config.labels_path = if path.trim().is_empty() {
                None
            } else {
                Some(PathBuf::from(path))
            };
        }

        if let Some(path) = lookup("COIN_COUNTER_MODEL") {
            config.model.onnx_model_path = PathBuf::from(path);
        }

        if let Some(offset) = lookup("COIN_COUNTER_COUNT_OFFSET").and_then(|v| v.parse().ok()) {
            config.count_start_offset = offset;
        }

        if let Some(millis) = lookup("COIN_COUNTER_SCAN_INTERVAL_MS").and_then(|v| v.parse().ok())
        {
            config.scan_interval = Duration::from_millis(millis);
        }

        if let Some(max_scans) = lookup("COIN_COUNTER_MAX_SCANS").and_then(|v| v.parse().ok()) {
            config.max_scans = Some(max_scans);
        }

        if let Some(classifier) = lookup("COIN_COUNTER_CLASSIFIER_HEAD").and_then(|v| parse_flag(&v)) {
            config.model.head = if classifier {
                ModelHead::Classifier
            } else {
                ModelHead::Counts
            };
        }

        if let Some(dir) = lookup("COIN_COUNTER_PHOTOS") {
            config.photos_dir = Some(PathBuf::from(dir));
        }

        if let Some(use_gui) = lookup("COIN_COUNTER_GUI").and_then(|v| parse_flag(&v)) {
            config.use_gui = use_gui;
        }

        if let Some(fake) = lookup("COIN_COUNTER_FAKE_ENGINE").and_then(|v| parse_flag(&v)) {
            config.use_fake_engine = fake;
        }

        config
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn japan_standard_time() -> chrono::FixedOffset {
    chrono::FixedOffset::east_opt(9 * 3600).expect("UTC+9 is a valid offset")
}
