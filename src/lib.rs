pub mod coin_classifier;
pub mod coin_scanner;
pub mod config;
pub mod denomination;
pub mod device_camera;
pub mod device_display;
pub mod inference_engine;
pub mod label_catalog;
pub mod library;
pub mod record;
