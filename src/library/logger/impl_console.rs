use crate::library::logger::interface::{join_namespace, LogResult, Logger};
use chrono::Utc;
use std::sync::Arc;

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

    fn format_line(&self, level: Option<&str>, message: &str) -> String {
        let utc_now = Utc::now();
        let local_time = utc_now.with_timezone(&self.timezone);
        let formatted = local_time.format("%Y-%m-%d %I:%M:%S%.3f %p");
        let prefix = match level {
            Some(level) => format!("[{}] {}", formatted, level),
            None => format!("[{}]", formatted),
        };
        match &self.namespace {
            Some(namespace) => format!("{} {}: {}", prefix, namespace, message),
            None => format!("{} {}", prefix, message),
        }
    }
}

impl Logger for LoggerConsole {
    fn info(&self, message: &str) -> LogResult {
        println!("{}", self.format_line(None, message));
        Ok(())
    }

    fn warn(&self, message: &str) -> LogResult {
        eprintln!("{}", self.format_line(Some("WARN"), message));
        Ok(())
    }

    fn error(&self, message: &str) -> LogResult {
        eprintln!("{}", self.format_line(Some("ERROR"), message));
        Ok(())
    }

    fn with_namespace(&self, namespace: &str) -> Arc<dyn Logger + Send + Sync> {
        Arc::new(LoggerConsole {
            namespace: Some(join_namespace(&self.namespace, namespace)),
            timezone: self.timezone,
        })
    }
}
