use coin_counter::coin_classifier::classifier::CoinClassifier;
use coin_counter::coin_classifier::decoder::DecodeOptions;
use coin_counter::coin_scanner::main::CoinScanner;
use coin_counter::config::Config;
use coin_counter::device_camera::impl_fake::DeviceCameraFake;
use coin_counter::device_camera::impl_image_files::DeviceCameraImageFiles;
use coin_counter::device_camera::interface::DeviceCamera;
use coin_counter::device_display::impl_console::DeviceDisplayConsole;
use coin_counter::device_display::impl_gui::DeviceDisplayGui;
use coin_counter::device_display::interface::DeviceDisplay;
use coin_counter::inference_engine::impl_fake::InferenceEngineFake;
use coin_counter::inference_engine::impl_tract_onnx::InferenceEngineTractOnnx;
use coin_counter::inference_engine::interface::InferenceEngine;
use coin_counter::label_catalog::LabelCatalog;
use coin_counter::library::logger::{impl_console::LoggerConsole, interface::Logger};
use coin_counter::record::impl_memory::RecordStoreMemory;
use std::sync::{Arc, Mutex};

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::from_env();

    let logger: Arc<dyn Logger + Send + Sync> = Arc::new(LoggerConsole::new(config.timezone));

    let labels = LabelCatalog::load_path(config.labels_path.as_deref(), logger.as_ref());

    let engine = if config.use_fake_engine {
        Ok(Arc::new(InferenceEngineFake::random(logger.clone(), labels.len(), 3))
            as Arc<dyn InferenceEngine + Send + Sync>)
    } else {
        InferenceEngineTractOnnx::new(config.model.clone(), logger.clone())
            .map(|engine| Arc::new(engine) as Arc<dyn InferenceEngine + Send + Sync>)
    };

    let classifier = Arc::new(CoinClassifier::new(
        labels,
        engine,
        DecodeOptions {
            count_start_offset: config.count_start_offset,
        },
        logger.clone(),
    ));

    let device_camera: Arc<dyn DeviceCamera + Send + Sync> = match &config.photos_dir {
        Some(dir) => Arc::new(DeviceCameraImageFiles::from_dir(dir, logger.clone())?),
        None => Arc::new(DeviceCameraFake::new(logger.clone())),
    };

    let device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>> = if config.use_gui {
        Arc::new(Mutex::new(DeviceDisplayGui::new()))
    } else {
        Arc::new(Mutex::new(DeviceDisplayConsole::new()))
    };
    device_display
        .lock()
        .map_err(|e| e.to_string())?
        .init()?;

    let record_store = Arc::new(RecordStoreMemory::new(logger.clone()));

    let coin_scanner = CoinScanner::new(
        config,
        logger.clone(),
        device_camera,
        device_display,
        classifier,
        record_store,
    );

    let scans = coin_scanner.run()?;

    let stats = coin_scanner.statistics()?;
    logger.info(&format!(
        "{} scans, {} records, {}円 in total, {:.1}円 on average",
        scans, stats.record_count, stats.grand_total, stats.average_total
    ))?;
    for (day, total) in &stats.daily_totals {
        logger.info(&format!("{}: {}円", day, total))?;
    }

    Ok(())
}
