use crate::coin_classifier::prediction_result::PredictionResult;
use crate::device_display::interface::DeviceDisplay;
use std::error::Error;

#[derive(Default)]
pub struct DeviceDisplayConsole {
    lines: Vec<String>,
    status: Option<String>,
}

impl DeviceDisplayConsole {
    pub fn new() -> Self {
        Self::default()
    }

    fn render_display(&self) {
        let width = self
            .lines
            .iter()
            .chain(self.status.iter())
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0)
            .max(16);

        println!("┌{}┐", "─".repeat(width));
        for line in &self.lines {
            println!("│{}│", pad(line, width));
        }
        if let Some(status) = &self.status {
            if !self.lines.is_empty() {
                println!("├{}┤", "─".repeat(width));
            }
            println!("│{}│", pad(status, width));
        }
        println!("└{}┘", "─".repeat(width));
    }
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
}

impl DeviceDisplay for DeviceDisplayConsole {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.render_display();
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.lines.clear();
        self.status = None;
        self.render_display();
        Ok(())
    }

    fn show_prediction(
        &mut self,
        result: &PredictionResult,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.lines = result.lines().to_vec();
        self.status = None;
        self.render_display();
        Ok(())
    }

    fn show_status(&mut self, message: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.status = Some(message.to_string());
        self.render_display();
        Ok(())
    }
}
