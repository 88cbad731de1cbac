use super::main::CoinScanner;
use crate::coin_classifier::error::PredictionError;
use crate::coin_scanner::error::ScanError;
use crate::coin_scanner::throttle::Throttle;
use std::time::Instant;

impl CoinScanner {
    /// Scans the live camera until `max_scans` is reached, at most once per
    /// `scan_interval`. Returns the number of scans attempted.
    pub fn run(&self) -> Result<usize, ScanError> {
        if let Some(reason) = self.classifier.load_error() {
            let _ = self.logger.error(&format!("not scanning: {}", reason));
            self.show_status(&format!("Model unavailable: {}", reason))?;
            return Err(ScanError::Prediction(PredictionError::ModelUnavailable {
                reason: reason.to_string(),
            }));
        }

        self.device_camera.start().map_err(ScanError::Camera)?;

        let result = self.scan_loop();

        if let Err(e) = self.device_camera.stop() {
            let _ = self.logger.warn(&format!("camera did not stop cleanly: {}", e));
        }

        result
    }

    fn scan_loop(&self) -> Result<usize, ScanError> {
        let mut throttle = Throttle::new(self.config.scan_interval);
        let mut scans = 0;

        while self.config.max_scans.map_or(true, |max| scans < max) {
            let now = Instant::now();
            if !throttle.try_acquire(now) {
                std::thread::sleep(throttle.remaining(now));
                continue;
            }

            scans += 1;

            match self.capture() {
                Ok(report) => {
                    if let Some(record) = report.record {
                        let _ = self.logger.info(&format!(
                            "scan {}: record {} saved, {}円",
                            scans, record.id, record.total
                        ));
                    }
                }
                Err(e) if e.is_transient() => {
                    let _ = self.logger.warn(&format!("scan {}: {}", scans, e));
                    self.show_status(&e.to_string())?;
                }
                Err(e) => return Err(e),
            }
        }

        Ok(scans)
    }
}
