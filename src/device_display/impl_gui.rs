use crate::coin_classifier::prediction_result::PredictionResult;
use crate::device_display::interface::DeviceDisplay;
use eframe::egui;
use std::error::Error;
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Default)]
struct Screen {
    lines: Vec<String>,
    status: Option<String>,
}

#[derive(Clone)]
struct ResultWindow {
    screen: Arc<Mutex<Screen>>,
}

impl eframe::App for ResultWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let Ok(screen) = self.screen.lock() else {
            return;
        };

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(12.0);

                for line in &screen.lines {
                    ui.label(egui::RichText::new(line).monospace().size(20.0));
                }

                if let Some(status) = &screen.status {
                    ui.separator();
                    ui.label(
                        egui::RichText::new(status)
                            .color(egui::Color32::from_rgb(200, 60, 60))
                            .size(16.0),
                    );
                }
            });
        });

        ctx.request_repaint_after(std::time::Duration::from_millis(200));
    }
}

pub struct DeviceDisplayGui {
    screen: Arc<Mutex<Screen>>,
}

impl DeviceDisplayGui {
    pub fn new() -> Self {
        Self {
            screen: Arc::new(Mutex::new(Screen::default())),
        }
    }

    fn update_screen<F>(&self, update: F) -> Result<(), Box<dyn Error + Send + Sync>>
    where
        F: FnOnce(&mut Screen),
    {
        let mut screen = self.screen.lock().map_err(|e| e.to_string())?;
        update(&mut screen);
        Ok(())
    }
}

impl Default for DeviceDisplayGui {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceDisplay for DeviceDisplayGui {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let screen = self.screen.clone();

        thread::spawn(move || {
            let options = eframe::NativeOptions {
                viewport: egui::ViewportBuilder::default()
                    .with_inner_size([360.0, 280.0])
                    .with_resizable(true),
                ..Default::default()
            };

            let window = ResultWindow { screen };

            let _ = eframe::run_native(
                "Coin Counter",
                options,
                Box::new(|_cc| Box::new(window)),
            );
        });

        Ok(())
    }

    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.update_screen(|screen| *screen = Screen::default())
    }

    fn show_prediction(
        &mut self,
        result: &PredictionResult,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        let lines = result.lines().to_vec();
        self.update_screen(move |screen| {
            screen.lines = lines;
            screen.status = None;
        })
    }

    fn show_status(&mut self, message: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        let status = message.to_string();
        self.update_screen(move |screen| screen.status = Some(status))
    }
}
