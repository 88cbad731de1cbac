use crate::device_camera::interface::DeviceCamera;
use crate::library::logger::interface::Logger;
use image::{DynamicImage, Rgb, RgbImage};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

pub struct DeviceCameraFake {
    started: AtomicBool,
    captured: AtomicUsize,
    width: u32,
    height: u32,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DeviceCameraFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            started: AtomicBool::new(false),
            captured: AtomicUsize::new(0),
            width: 320,
            height: 240,
            logger: logger.with_namespace("camera").with_namespace("fake"),
        }
    }

    pub fn captured(&self) -> usize {
        self.captured.load(Ordering::SeqCst)
    }
}

impl DeviceCamera for DeviceCameraFake {
    fn start(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Starting camera...")?;
        self.started.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn stop(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Stopping camera...")?;
        self.started.store(false, Ordering::SeqCst);
        Ok(())
    }

    fn capture_frame(&self) -> Result<DynamicImage, Box<dyn std::error::Error + Send + Sync>> {
        if !self.started.load(Ordering::SeqCst) {
            return Err("camera not started".into());
        }

        let n = self.captured.fetch_add(1, Ordering::SeqCst);
        let shade = (n % 256) as u8;
        let frame = RgbImage::from_pixel(self.width, self.height, Rgb([shade, shade, shade]));

        self.logger.info(&format!("Frame {} captured", n))?;
        Ok(DynamicImage::ImageRgb8(frame))
    }
}
