use crate::coin_classifier::error::PredictionError;
use crate::inference_engine::interface::{InferenceOutput, OutputFeature, OutputTensor};

/// Engine output reduced to one of the shapes the decoder understands.
///
/// The variant is picked once from the reported kind and shape, never from
/// the values themselves.
#[derive(Debug, Clone, PartialEq)]
pub enum RawOutput {
    /// One label with a confidence in `[0, 1]`.
    Classification { identifier: String, confidence: f32 },
    /// `counts[i]` is the estimated number of coins for label `i`.
    FlatCounts(Vec<f32>),
    /// A `(1, D, C)` tensor, row `d` is a distribution over counts for label `d`.
    CountDistribution {
        denominations: usize,
        count_classes: usize,
        probabilities: Vec<f32>,
    },
}

impl RawOutput {
    pub fn from_tensor(tensor: OutputTensor) -> Option<Self> {
        let expected = tensor
            .shape
            .iter()
            .try_fold(1usize, |acc, &dim| acc.checked_mul(dim))?;
        if expected != tensor.data.len() {
            return None;
        }

        match tensor.shape[..] {
            [_] | [1, _] => Some(RawOutput::FlatCounts(tensor.data)),
            [1, denominations, count_classes] if count_classes > 0 => {
                Some(RawOutput::CountDistribution {
                    denominations,
                    count_classes,
                    probabilities: tensor.data,
                })
            }
            _ => None,
        }
    }

    pub fn from_feature(feature: OutputFeature) -> Option<Self> {
        match feature {
            OutputFeature::Classification {
                identifier,
                confidence,
            } => Some(RawOutput::Classification {
                identifier,
                confidence,
            }),
            OutputFeature::Tensor(tensor) => Self::from_tensor(tensor),
        }
    }

    /// First feature with a supported kind and shape.
    pub fn select(output: InferenceOutput) -> Result<Self, PredictionError> {
        if output.features.is_empty() {
            return Err(PredictionError::PredictionUnavailable {
                reason: "engine returned no output features".to_string(),
            });
        }

        let described: Vec<String> = output.features.iter().map(describe).collect();

        output
            .features
            .into_iter()
            .find_map(Self::from_feature)
            .ok_or_else(|| PredictionError::PredictionUnavailable {
                reason: format!("no recognizable output among [{}]", described.join(", ")),
            })
    }

    /// Probability row for denomination `d` of a count distribution.
    pub fn distribution_row(&self, d: usize) -> Option<&[f32]> {
        match self {
            RawOutput::CountDistribution {
                denominations,
                count_classes,
                probabilities,
            } if d < *denominations => {
                probabilities.get(d * count_classes..(d + 1) * count_classes)
            }
            _ => None,
        }
    }
}

fn describe(feature: &OutputFeature) -> String {
    match feature {
        OutputFeature::Classification { identifier, .. } => {
            format!("classification {:?}", identifier)
        }
        OutputFeature::Tensor(tensor) => format!(
            "tensor {} {:?} with {} values",
            tensor.name,
            tensor.shape,
            tensor.data.len()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tensor(shape: Vec<usize>, data: Vec<f32>) -> OutputTensor {
        OutputTensor::new("out", shape, data)
    }

    #[test]
    fn test_rank_one_and_two_are_flat_counts() {
        assert_eq!(
            RawOutput::from_tensor(tensor(vec![3], vec![1.0, 2.0, 3.0])),
            Some(RawOutput::FlatCounts(vec![1.0, 2.0, 3.0]))
        );
        assert_eq!(
            RawOutput::from_tensor(tensor(vec![1, 2], vec![1.0, 2.0])),
            Some(RawOutput::FlatCounts(vec![1.0, 2.0]))
        );
    }

    #[test]
    fn test_rank_three_is_count_distribution() {
        let raw = RawOutput::from_tensor(tensor(vec![1, 2, 3], vec![0.0; 6])).unwrap();
        assert!(matches!(
            raw,
            RawOutput::CountDistribution {
                denominations: 2,
                count_classes: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_unsupported_shapes_are_rejected() {
        assert_eq!(RawOutput::from_tensor(tensor(vec![2, 2], vec![0.0; 4])), None);
        assert_eq!(RawOutput::from_tensor(tensor(vec![2, 2, 2], vec![0.0; 8])), None);
        assert_eq!(RawOutput::from_tensor(tensor(vec![1, 1, 2, 2], vec![0.0; 4])), None);
        assert_eq!(RawOutput::from_tensor(tensor(vec![1, 3, 0], vec![])), None);
        assert_eq!(RawOutput::from_tensor(tensor(vec![], vec![1.0])), None);
    }

    #[test]
    fn test_data_length_must_match_shape() {
        assert_eq!(RawOutput::from_tensor(tensor(vec![1, 3], vec![1.0, 2.0])), None);
        assert_eq!(RawOutput::from_tensor(tensor(vec![1, 2, 2], vec![0.0; 5])), None);
    }

    #[test]
    fn test_overflowing_shape_is_rejected() {
        assert_eq!(RawOutput::from_tensor(tensor(vec![usize::MAX, 2], vec![])), None);
        assert_eq!(
            RawOutput::from_tensor(tensor(vec![1, usize::MAX, usize::MAX], vec![])),
            None
        );
    }

    #[test]
    fn test_select_overflowing_shape_is_unavailable() {
        let output = InferenceOutput::tensor(tensor(vec![usize::MAX, 2], vec![]));
        assert!(matches!(
            RawOutput::select(output),
            Err(PredictionError::PredictionUnavailable { .. })
        ));
    }

    #[test]
    fn test_select_empty_output_is_unavailable() {
        let result = RawOutput::select(InferenceOutput::default());
        assert!(matches!(
            result,
            Err(PredictionError::PredictionUnavailable { .. })
        ));
    }

    #[test]
    fn test_select_skips_unrecognized_features() {
        let output = InferenceOutput {
            features: vec![
                OutputFeature::Tensor(tensor(vec![4, 4], vec![0.0; 16])),
                OutputFeature::Tensor(tensor(vec![1, 2], vec![1.0, 0.0])),
            ],
        };
        assert_eq!(
            RawOutput::select(output).unwrap(),
            RawOutput::FlatCounts(vec![1.0, 0.0])
        );
    }

    #[test]
    fn test_select_without_recognizable_feature_names_what_was_seen() {
        let output = InferenceOutput::tensor(tensor(vec![4, 4], vec![0.0; 16]));
        match RawOutput::select(output) {
            Err(PredictionError::PredictionUnavailable { reason }) => {
                assert!(reason.contains("[4, 4]"));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_distribution_row() {
        let raw = RawOutput::from_tensor(tensor(
            vec![1, 2, 3],
            vec![0.1, 0.2, 0.7, 0.5, 0.4, 0.1],
        ))
        .unwrap();
        assert_eq!(raw.distribution_row(0), Some(&[0.1, 0.2, 0.7][..]));
        assert_eq!(raw.distribution_row(1), Some(&[0.5, 0.4, 0.1][..]));
        assert_eq!(raw.distribution_row(2), None);
    }
}
