use crate::coin_classifier::prediction_result::PredictionResult;
use crate::device_display::interface::DeviceDisplay;
use crate::library::logger::interface::Logger;
use std::error::Error;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shown {
    Prediction(Vec<String>),
    Status(String),
    Cleared,
}

/// Records everything it is asked to show.
pub struct DeviceDisplayFake {
    shown: Arc<Mutex<Vec<Shown>>>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DeviceDisplayFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            shown: Arc::new(Mutex::new(Vec::new())),
            logger: logger.with_namespace("display").with_namespace("fake"),
        }
    }

    /// Handle to the history that stays valid after the display is moved behind a mutex.
    pub fn history(&self) -> Arc<Mutex<Vec<Shown>>> {
        self.shown.clone()
    }

    fn push(&self, shown: Shown) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.shown.lock().map_err(|e| e.to_string())?.push(shown);
        Ok(())
    }
}

impl DeviceDisplay for DeviceDisplayFake {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.logger.info("DeviceDisplayFake::init()")?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.logger.info("DeviceDisplayFake::clear()")?;
        self.push(Shown::Cleared)
    }

    fn show_prediction(
        &mut self,
        result: &PredictionResult,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.logger.info(&format!(
            "DeviceDisplayFake::show_prediction({:?})",
            result.lines()
        ))?;
        self.push(Shown::Prediction(result.lines().to_vec()))
    }

    fn show_status(&mut self, message: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.logger
            .info(&format!("DeviceDisplayFake::show_status({})", message))?;
        self.push(Shown::Status(message.to_string()))
    }
}
