pub const NO_PREDICTION_LINE: &str = "予測なし";

pub fn total_line(total: u64) -> String {
    format!("合計: {}円", total)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenominationCount {
    pub label: String,
    pub count: u64,
    /// Value of a single coin.
    pub unit_value: u64,
}

impl DenominationCount {
    pub fn subtotal(&self) -> u64 {
        self.unit_value.saturating_mul(self.count)
    }
}

/// Decoded prediction, ready for display and persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionResult {
    lines: Vec<String>,
    counts: Vec<DenominationCount>,
    total: u64,
}

impl PredictionResult {
    pub(crate) fn new(lines: Vec<String>, counts: Vec<DenominationCount>, total: u64) -> Self {
        Self {
            lines,
            counts,
            total,
        }
    }

    pub fn no_prediction() -> Self {
        Self::new(vec![NO_PREDICTION_LINE.to_string()], Vec::new(), 0)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn counts(&self) -> &[DenominationCount] {
        &self.counts
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn has_prediction(&self) -> bool {
        !self.counts.is_empty()
    }

    /// At least one counted coin is worth something.
    pub fn has_valued_coins(&self) -> bool {
        self.counts
            .iter()
            .any(|count| count.count > 0 && count.unit_value > 0)
    }

    /// Lines joined with newlines, as stored alongside a capture.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}
