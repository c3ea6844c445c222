//! User feedback.
//!
//! Commands report outcomes through a [`NotificationSink`] instead of
//! printing directly, keeping stdout reserved for the link itself.

use std::sync::Mutex;

use tracing::{info, warn};

/// Kind of notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// Receives user-facing notices.
pub trait NotificationSink {
    fn notify(&self, severity: Severity, message: &str);

    fn success(&self, message: &str) {
        self.notify(Severity::Success, message);
    }

    fn error(&self, message: &str) {
        self.notify(Severity::Error, message);
    }
}

/// Writes notices to stderr.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl NotificationSink for ConsoleSink {
    fn notify(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Success => {
                info!(message, "notice");
                eprintln!("✓ {}", message);
            }
            Severity::Error => {
                warn!(message, "notice");
                eprintln!("✗ {}", message);
            }
        }
    }
}

/// Keeps notices in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    notices: Mutex<Vec<(Severity, String)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notices received so far, oldest first.
    pub fn notices(&self) -> Vec<(Severity, String)> {
        self.notices
            .lock()
            .map(|notices| notices.clone())
            .unwrap_or_default()
    }
}

impl NotificationSink for MemorySink {
    fn notify(&self, severity: Severity, message: &str) {
        if let Ok(mut notices) = self.notices.lock() {
            notices.push((severity, message.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_records_in_order() {
        let sink = MemorySink::new();
        sink.success("Digital Link generated");
        sink.error("GTIN is required");

        assert_eq!(
            sink.notices(),
            vec![
                (Severity::Success, "Digital Link generated".to_string()),
                (Severity::Error, "GTIN is required".to_string()),
            ]
        );
    }
}
