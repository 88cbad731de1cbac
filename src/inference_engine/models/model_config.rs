use std::path::PathBuf;

/// What the model's output head reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelHead {
    /// Raw count tensors, flat `[N]`/`[1, N]` or distribution `[1, D, C]`.
    #[default]
    Counts,
    /// A single best class, reported as the argmax channel index and its score.
    Classifier,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    pub onnx_model_path: PathBuf,
    /// (height, width)
    pub input_shape: (u32, u32),
    pub head: ModelHead,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            onnx_model_path: PathBuf::from("./models/coin_counter.onnx"),
            input_shape: (224, 224),
            head: ModelHead::Counts,
        }
    }
}
