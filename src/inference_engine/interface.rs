use image::DynamicImage;

/// A numeric output array with its shape as reported by the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputTensor {
    pub name: String,
    pub shape: Vec<usize>,
    pub data: Vec<f32>,
}

impl OutputTensor {
    pub fn new(name: impl Into<String>, shape: Vec<usize>, data: Vec<f32>) -> Self {
        Self {
            name: name.into(),
            shape,
            data,
        }
    }

    pub fn rank(&self) -> usize {
        self.shape.len()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum OutputFeature {
    Classification { identifier: String, confidence: f32 },
    Tensor(OutputTensor),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct InferenceOutput {
    pub features: Vec<OutputFeature>,
}

impl InferenceOutput {
    pub fn classification(identifier: impl Into<String>, confidence: f32) -> Self {
        Self {
            features: vec![OutputFeature::Classification {
                identifier: identifier.into(),
                confidence,
            }],
        }
    }

    pub fn tensor(tensor: OutputTensor) -> Self {
        Self {
            features: vec![OutputFeature::Tensor(tensor)],
        }
    }
}

pub trait InferenceEngine {
    fn infer(
        &self,
        frame: &DynamicImage,
    ) -> Result<InferenceOutput, Box<dyn std::error::Error + Send + Sync>>;
}
