use crate::library::logger::interface::Logger;
use chrono::Utc;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Info,
    Warn,
    Error,
}

impl Level {
    fn as_str(&self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoggerConsole {
    namespace: Option<String>,
    timezone: chrono::FixedOffset,
}

impl LoggerConsole {
    pub fn new(timezone: chrono::FixedOffset) -> Self {
        Self {
            namespace: None,
            timezone,
        }
    }

    fn format_line(&self, level: Level, message: &str) -> String {
        let local_time = Utc::now().with_timezone(&self.timezone);
        let formatted = local_time.format("%Y-%m-%d %H:%M:%S%.3f");
        match &self.namespace {
            Some(namespace) => format!(
                "[{}] {} {}: {}",
                formatted,
                level.as_str(),
                namespace,
                message
            ),
            None => format!("[{}] {} {}", formatted, level.as_str(), message),
        }
    }

    fn write(&self, level: Level, message: &str) {
        let line = self.format_line(level, message);
        match level {
            Level::Info => println!("{}", line),
            Level::Warn | Level::Error => eprintln!("{}", line),
        }
    }
}

impl Logger for LoggerConsole {
    fn info(&self, message: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.write(Level::Info, message);
        Ok(())
    }

    fn warn(&self, message: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.write(Level::Warn, message);
        Ok(())
    }

    fn error(&self, message: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.write(Level::Error, message);
        Ok(())
    }

    fn with_namespace(&self, namespace: &str) -> Arc<dyn Logger + Send + Sync> {
        let new_namespace = match &self.namespace {
            Some(current) => format!("{}:{}", current, namespace),
            None => namespace.to_string(),
        };

        Arc::new(LoggerConsole {
            namespace: Some(new_namespace),
            timezone: self.timezone,
        })
    }
}
