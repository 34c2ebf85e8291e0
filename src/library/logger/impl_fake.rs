use crate::library::logger::interface::{join_namespace, LogResult, Logger};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq)]
pub struct LogLine {
    pub level: &'static str,
    pub namespace: Option<String>,
    pub message: String,
}

/// Keeps every line in memory, shared between all loggers derived through
/// `with_namespace`.
#[derive(Debug, Clone, Default)]
pub struct LoggerFake {
    namespace: Option<String>,
    lines: Arc<Mutex<Vec<LogLine>>>,
}

impl LoggerFake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<LogLine> {
        self.lines.lock().unwrap().clone()
    }

    pub fn messages(&self, level: &str) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|line| line.level == level)
            .map(|line| line.message)
            .collect()
    }

    fn record(&self, level: &'static str, message: &str) -> LogResult {
        self.lines
            .lock()
            .map_err(|e| e.to_string())?
            .push(LogLine {
                level,
                namespace: self.namespace.clone(),
                message: message.to_string(),
            });
        Ok(())
    }
}

impl Logger for LoggerFake {
    fn info(&self, message: &str) -> LogResult {
        self.record("info", message)
    }

    fn warn(&self, message: &str) -> LogResult {
        self.record("warn", message)
    }

    fn error(&self, message: &str) -> LogResult {
        self.record("error", message)
    }

    fn with_namespace(&self, namespace: &str) -> Arc<dyn Logger + Send + Sync> {
        Arc::new(LoggerFake {
            namespace: Some(join_namespace(&self.namespace, namespace)),
            lines: self.lines.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespaced_loggers_share_lines() {
        let logger = LoggerFake::new();
        let nested = logger.with_namespace("a").with_namespace("b");

        nested.warn("careful").unwrap();
        logger.info("plain").unwrap();

        let lines = logger.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].namespace.as_deref(), Some("a:b"));
        assert_eq!(lines[0].level, "warn");
        assert_eq!(logger.messages("info"), vec!["plain".to_string()]);
    }
}
