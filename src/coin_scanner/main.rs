use crate::coin_classifier::classifier::CoinClassifier;
use crate::coin_classifier::prediction_result::PredictionResult;
use crate::coin_scanner::error::ScanError;
use crate::config::Config;
use crate::device_camera::interface::DeviceCamera;
use crate::device_display::interface::DeviceDisplay;
use crate::library::logger::interface::Logger;
use crate::record::interface::{NewRecord, Record, RecordStore};
use crate::record::statistics::Statistics;
use chrono::Utc;
use std::error::Error;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq)]
pub struct ScanReport {
    pub result: PredictionResult,
    /// Saved only when something worth money was counted.
    pub record: Option<Record>,
}

#[derive(Clone)]
pub struct CoinScanner {
    pub config: Config,
    pub logger: Arc<dyn Logger + Send + Sync>,
    pub device_camera: Arc<dyn DeviceCamera + Send + Sync>,
    pub device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
    pub classifier: Arc<CoinClassifier>,
    pub record_store: Arc<dyn RecordStore + Send + Sync>,
}

impl CoinScanner {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        device_camera: Arc<dyn DeviceCamera + Send + Sync>,
        device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
        classifier: Arc<CoinClassifier>,
        record_store: Arc<dyn RecordStore + Send + Sync>,
    ) -> Self {
        Self {
            config,
            logger: logger.with_namespace("coin_scanner"),
            device_camera,
            device_display,
            classifier,
            record_store,
        }
    }

    /// Counts the coins in the next frame and shows the result without storing it.
    pub fn preview(&self) -> Result<PredictionResult, ScanError> {
        let frame = self.device_camera.capture_frame().map_err(ScanError::Camera)?;
        let result = self.classifier.predict(&frame)?;
        self.with_display(|display| display.show_prediction(&result))?;
        Ok(result)
    }

    /// Like [`CoinScanner::preview`], and stores the photo with its result when
    /// the prediction counted at least one coin with a value.
    pub fn capture(&self) -> Result<ScanReport, ScanError> {
        let frame = self.device_camera.capture_frame().map_err(ScanError::Camera)?;
        let captured_at = Utc::now().with_timezone(&self.config.timezone);

        let result = self.classifier.predict(&frame)?;
        self.with_display(|display| display.show_prediction(&result))?;

        if !result.has_valued_coins() {
            return Ok(ScanReport {
                result,
                record: None,
            });
        }

        let new_record =
            NewRecord::from_frame(captured_at, &frame, &result).map_err(ScanError::Record)?;
        let record = self
            .record_store
            .save(new_record)
            .map_err(ScanError::Record)?;

        Ok(ScanReport {
            result,
            record: Some(record),
        })
    }

    pub fn statistics(&self) -> Result<Statistics, ScanError> {
        let records = self.record_store.list().map_err(ScanError::Record)?;
        Ok(Statistics::from_records(&records))
    }

    pub fn show_status(&self, message: &str) -> Result<(), ScanError> {
        self.with_display(|display| display.show_status(message))
    }

    fn with_display<F>(&self, f: F) -> Result<(), ScanError>
    where
        F: FnOnce(
            &mut (dyn DeviceDisplay + Send + Sync + 'static),
        ) -> Result<(), Box<dyn Error + Send + Sync>>,
    {
        let mut display = self
            .device_display
            .lock()
            .map_err(|e| ScanError::Display(e.to_string().into()))?;
        f(&mut *display).map_err(ScanError::Display)
    }
}
