use crate::coin_classifier::prediction_result::PredictionResult;
use chrono::{DateTime, FixedOffset};
use image::{DynamicImage, ImageFormat};
use std::io::Cursor;

/// A stored capture: when it was taken, the photo, and what was counted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: u64,
    pub captured_at: DateTime<FixedOffset>,
    pub photo_png: Vec<u8>,
    pub result_text: String,
    pub total: u64,
}

/// A record before the store has assigned it an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecord {
    pub captured_at: DateTime<FixedOffset>,
    pub photo_png: Vec<u8>,
    pub result_text: String,
    pub total: u64,
}

impl NewRecord {
    pub fn from_prediction(
        captured_at: DateTime<FixedOffset>,
        photo_png: Vec<u8>,
        result: &PredictionResult,
    ) -> Self {
        Self {
            captured_at,
            photo_png,
            result_text: result.text(),
            total: result.total(),
        }
    }

    pub fn from_frame(
        captured_at: DateTime<FixedOffset>,
        frame: &DynamicImage,
        result: &PredictionResult,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        Ok(Self::from_prediction(captured_at, encode_png(frame)?, result))
    }
}

pub fn encode_png(frame: &DynamicImage) -> Result<Vec<u8>, Box<dyn std::error::Error + Send + Sync>> {
    let mut bytes = Vec::new();
    frame.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

pub trait RecordStore {
    fn save(&self, record: NewRecord) -> Result<Record, Box<dyn std::error::Error + Send + Sync>>;
    /// All records, oldest capture first.
    fn list(&self) -> Result<Vec<Record>, Box<dyn std::error::Error + Send + Sync>>;
    /// Returns whether a record with `id` existed.
    fn delete(&self, id: u64) -> Result<bool, Box<dyn std::error::Error + Send + Sync>>;
}
