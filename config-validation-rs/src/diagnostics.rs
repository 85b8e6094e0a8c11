//! Diagnostic channel for validation warnings
//!
//! Validators never print. Warnings go through a [`Diagnostics`] sink so the
//! caller decides where they end up: the `log` facade by default, or a buffer
//! that can be inspected afterwards.

use std::sync::Mutex;

/// Log target used for everything this crate emits
pub const LOG_TARGET: &str = "config_validation";

/// Receiver for human-readable warnings raised during validation
pub trait Diagnostics: Send + Sync {
    /// Report a warning
    fn warn(&self, message: &str);
}

/// Forwards warnings to `log::warn!`
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn warn(&self, message: &str) {
        log::warn!(target: LOG_TARGET, "{}", message);
    }
}

/// Keeps every warning in memory, in the order received
#[derive(Debug, Default)]
pub struct RecordedDiagnostics {
    warnings: Mutex<Vec<String>>,
}

impl RecordedDiagnostics {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the warnings recorded so far
    pub fn warnings(&self) -> Vec<String> {
        self.warnings
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Number of warnings recorded so far
    pub fn len(&self) -> usize {
        self.warnings
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    /// Returns true if nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all recorded warnings
    pub fn clear(&self) {
        self.warnings
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clear();
    }
}

impl Diagnostics for RecordedDiagnostics {
    fn warn(&self, message: &str) {
        self.warnings
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TestingConfig;
    use crate::validators::{valid_issuer, HTTPS_DISABLED_WARNING};

    #[test]
    fn test_recorder_keeps_order() {
        let recorder = RecordedDiagnostics::new();
        assert!(recorder.is_empty());

        recorder.warn("first");
        recorder.warn("second");

        assert_eq!(recorder.warnings(), vec!["first", "second"]);
        assert_eq!(recorder.len(), 2);

        recorder.clear();
        assert!(recorder.is_empty());
    }

    struct CapturingLogger {
        records: Mutex<Vec<(log::Level, String, String)>>,
    }

    impl log::Log for CapturingLogger {
        fn enabled(&self, _metadata: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            self.records
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner())
                .push((
                    record.level(),
                    record.target().to_string(),
                    record.args().to_string(),
                ));
        }

        fn flush(&self) {}
    }

    static LOGGER: CapturingLogger = CapturingLogger {
        records: Mutex::new(Vec::new()),
    };

    fn captured() -> Vec<(log::Level, String, String)> {
        LOGGER
            .records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    #[test]
    fn test_issuer_warning_reaches_log_facade() {
        // other tests may have installed it already
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(log::LevelFilter::Trace);

        let testing = TestingConfig {
            disable_https_check: true,
        };
        assert!(valid_issuer("http://localhost:3000", &testing).is_ok());

        let expected = (
            log::Level::Warn,
            LOG_TARGET.to_string(),
            HTTPS_DISABLED_WARNING.to_string(),
        );
        assert!(captured().contains(&expected));
        assert_eq!(LOG_TARGET, "config_validation");
    }
}
