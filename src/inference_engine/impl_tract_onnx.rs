use crate::coin_classifier::decoder::argmax;
use crate::coin_classifier::error::ModelLoadError;
use crate::inference_engine::interface::{
    InferenceEngine, InferenceOutput, OutputFeature, OutputTensor,
};
use crate::inference_engine::models::model_config::{ModelConfig, ModelHead};
use crate::inference_engine::tract::image::frame_to_tensor;
use crate::library::logger::interface::Logger;
use image::DynamicImage;
use std::sync::Arc;
use tract_onnx::prelude::*;

pub struct InferenceEngineTractOnnx {
    model: SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>,
    config: ModelConfig,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl InferenceEngineTractOnnx {
    pub fn new(
        config: ModelConfig,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, ModelLoadError> {
        let (height, width) = config.input_shape;
        if height == 0 || width == 0 {
            return Err(ModelLoadError::InvalidInputShape { height, width });
        }

        if !config.onnx_model_path.is_file() {
            return Err(ModelLoadError::MissingArtifact(
                config.onnx_model_path.clone(),
            ));
        }

        let model = tract_onnx::onnx()
            .model_for_path(&config.onnx_model_path)
            .and_then(|model| {
                model.with_input_fact(
                    0,
                    f32::fact([1, 3, height as usize, width as usize]).into(),
                )
            })
            .and_then(|model| model.into_optimized())
            .and_then(|model| model.into_runnable())
            .map_err(|e| ModelLoadError::LoadFailed(e.into()))?;

        let logger = logger.with_namespace("tract_onnx");
        let _ = logger.info(&format!(
            "loaded {} ({}x{}, {:?} head)",
            config.onnx_model_path.display(),
            width,
            height,
            config.head
        ));

        Ok(Self {
            model,
            config,
            logger,
        })
    }

    fn to_feature(&self, index: usize, output: &TValue) -> Option<OutputFeature> {
        let output = output.cast_to::<f32>().ok()?;
        let view = output.to_array_view::<f32>().ok()?;

        let tensor = OutputTensor::new(
            format!("output_{}", index),
            view.shape().to_vec(),
            view.iter().copied().collect(),
        );

        match self.config.head {
            ModelHead::Classifier if tensor.rank() <= 2 => {
                argmax(&tensor.data).map(|(best, score)| OutputFeature::Classification {
                    identifier: best.to_string(),
                    confidence: score,
                })
            }
            _ => Some(OutputFeature::Tensor(tensor)),
        }
    }
}

impl InferenceEngine for InferenceEngineTractOnnx {
    fn infer(
        &self,
        frame: &DynamicImage,
    ) -> Result<InferenceOutput, Box<dyn std::error::Error + Send + Sync>> {
        let (height, width) = self.config.input_shape;
        let input = frame_to_tensor(frame, width, height);

        let outputs = self.model.run(tvec!(input.into_tvalue()))?;

        let features: Vec<OutputFeature> = outputs
            .iter()
            .enumerate()
            .filter_map(|(index, output)| self.to_feature(index, output))
            .collect();

        let _ = self.logger.info(&format!(
            "{} of {} outputs usable",
            features.len(),
            outputs.len()
        ));

        Ok(InferenceOutput { features })
    }
}
