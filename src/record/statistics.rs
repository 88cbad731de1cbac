use crate::record::interface::Record;
use chrono::NaiveDate;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub record_count: usize,
    pub grand_total: u64,
    pub average_total: f64,
    pub max_total: u64,
    /// Sum of totals per local capture date, oldest first.
    pub daily_totals: Vec<(NaiveDate, u64)>,
}

impl Statistics {
    pub fn from_records(records: &[Record]) -> Self {
        let grand_total = records
            .iter()
            .fold(0u64, |sum, record| sum.saturating_add(record.total));

        let average_total = if records.is_empty() {
            0.0
        } else {
            grand_total as f64 / records.len() as f64
        };

        let mut daily: BTreeMap<NaiveDate, u64> = BTreeMap::new();
        for record in records {
            let day = daily.entry(record.captured_at.date_naive()).or_insert(0);
            *day = day.saturating_add(record.total);
        }

        Self {
            record_count: records.len(),
            grand_total,
            average_total,
            max_total: records.iter().map(|r| r.total).max().unwrap_or(0),
            daily_totals: daily.into_iter().collect(),
        }
    }
}
