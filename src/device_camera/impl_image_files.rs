use crate::device_camera::interface::DeviceCamera;
use crate::library::logger::interface::Logger;
use image::DynamicImage;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "bmp", "webp"];

/// Replays still photos from disk as camera frames, cycling through them in order.
pub struct DeviceCameraImageFiles {
    paths: Vec<PathBuf>,
    next: AtomicUsize,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DeviceCameraImageFiles {
    pub fn new(paths: Vec<PathBuf>, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            paths,
            next: AtomicUsize::new(0),
            logger: logger.with_namespace("camera").with_namespace("image_files"),
        }
    }

    /// Every image in `dir`, sorted by file name.
    pub fn from_dir(
        dir: &Path,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let mut paths = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_file() && is_image(&path) {
                paths.push(path);
            }
        }
        paths.sort();

        Ok(Self::new(paths, logger))
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

impl DeviceCamera for DeviceCameraImageFiles {
    fn start(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if self.paths.is_empty() {
            return Err("no image files to replay".into());
        }
        self.logger
            .info(&format!("Replaying {} image files", self.paths.len()))?;
        Ok(())
    }

    fn stop(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.next.store(0, Ordering::SeqCst);
        Ok(())
    }

    fn capture_frame(&self) -> Result<DynamicImage, Box<dyn std::error::Error + Send + Sync>> {
        if self.paths.is_empty() {
            return Err("no image files to replay".into());
        }

        let index = self.next.fetch_add(1, Ordering::SeqCst) % self.paths.len();
        let path = &self.paths[index];
        let frame = image::open(path)?;

        self.logger.info(&format!("Frame read from {}", path.display()))?;
        Ok(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::logger::impl_console::LoggerConsole;
    use image::{Rgb, RgbImage};

    fn logger() -> Arc<dyn Logger + Send + Sync> {
        Arc::new(LoggerConsole::new(
            chrono::FixedOffset::east_opt(9 * 3600).unwrap(),
        ))
    }

    #[test]
    fn test_from_dir_cycles_through_images() {
        let dir = tempfile::tempdir().unwrap();
        RgbImage::from_pixel(4, 2, Rgb([255, 0, 0]))
            .save(dir.path().join("a.png"))
            .unwrap();
        RgbImage::from_pixel(2, 4, Rgb([0, 255, 0]))
            .save(dir.path().join("b.png"))
            .unwrap();
        std::fs::write(dir.path().join("notes.txt"), "not a photo").unwrap();

        let camera = DeviceCameraImageFiles::from_dir(dir.path(), logger()).unwrap();
        assert_eq!(camera.len(), 2);
        camera.start().unwrap();

        let sizes: Vec<(u32, u32)> = (0..3)
            .map(|_| camera.capture_frame().unwrap())
            .map(|frame| (frame.width(), frame.height()))
            .collect();
        assert_eq!(sizes, vec![(4, 2), (2, 4), (4, 2)]);
    }

    #[test]
    fn test_empty_directory_cannot_start() {
        let dir = tempfile::tempdir().unwrap();
        let camera = DeviceCameraImageFiles::from_dir(dir.path(), logger()).unwrap();

        assert!(camera.is_empty());
        assert!(camera.start().is_err());
        assert!(camera.capture_frame().is_err());
    }
}
