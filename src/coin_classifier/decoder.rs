use crate::coin_classifier::prediction_result::{
    total_line, DenominationCount, PredictionResult,
};
use crate::coin_classifier::raw_output::RawOutput;
use crate::denomination::{is_other, value_of};
use crate::label_catalog::LabelCatalog;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Count represented by class index 0 of a count distribution.
    pub count_start_offset: u32,
}

/// Index and value of the largest element. Ties go to the lowest index, NaN never wins.
pub fn argmax(values: &[f32]) -> Option<(usize, f32)> {
    values
        .iter()
        .copied()
        .enumerate()
        .fold(None, |best, (index, value)| match best {
            _ if value.is_nan() => best,
            Some((_, best_value)) if value <= best_value => best,
            _ => Some((index, value)),
        })
}

/// Nearest whole number of coins, rounding halves away from zero.
/// Negative and NaN estimates count as zero.
pub fn round_count(estimate: f32) -> u64 {
    let rounded = estimate.round();
    if rounded >= 1.0 {
        rounded as u64
    } else {
        0
    }
}

pub fn confidence_percent(confidence: f32) -> u32 {
    (confidence * 100.0).round().clamp(0.0, 100.0) as u32
}

pub fn decode(raw: &RawOutput, labels: &LabelCatalog, options: DecodeOptions) -> PredictionResult {
    match raw {
        RawOutput::Classification {
            identifier,
            confidence,
        } => decode_classification(identifier, *confidence, labels),
        RawOutput::FlatCounts(estimates) => decode_counts(
            labels
                .labels()
                .iter()
                .zip(estimates.iter())
                .map(|(label, &estimate)| (label.as_str(), round_count(estimate))),
        ),
        RawOutput::CountDistribution { denominations, .. } => decode_counts(
            labels
                .labels()
                .iter()
                .take(*denominations)
                .enumerate()
                .map(|(d, label)| {
                    let count = raw
                        .distribution_row(d)
                        .and_then(argmax)
                        .map(|(best, _)| best as u64 + u64::from(options.count_start_offset))
                        .unwrap_or(0);
                    (label.as_str(), count)
                }),
        ),
    }
}

fn decode_classification(
    identifier: &str,
    confidence: f32,
    labels: &LabelCatalog,
) -> PredictionResult {
    let label = labels.resolve(identifier);
    let unit_value = value_of(&label);

    let line = format!("予測: {} ({}%)", label, confidence_percent(confidence));

    let counts = if is_other(&label) {
        Vec::new()
    } else {
        vec![DenominationCount {
            label,
            count: 1,
            unit_value,
        }]
    };

    PredictionResult::new(vec![line], counts, unit_value)
}

fn decode_counts<'a, I>(per_label: I) -> PredictionResult
where
    I: Iterator<Item = (&'a str, u64)>,
{
    let counts: Vec<DenominationCount> = per_label
        .filter(|(label, count)| *count > 0 && !is_other(label))
        .map(|(label, count)| DenominationCount {
            label: label.to_string(),
            count,
            unit_value: value_of(label),
        })
        .collect();

    if counts.is_empty() {
        return PredictionResult::no_prediction();
    }

    let total = counts
        .iter()
        .fold(0u64, |total, count| total.saturating_add(count.subtotal()));

    let mut lines: Vec<String> = counts
        .iter()
        .map(|count| format!("{} {}", count.label, count.count))
        .collect();
    lines.push(total_line(total));

    PredictionResult::new(lines, counts, total)
}
