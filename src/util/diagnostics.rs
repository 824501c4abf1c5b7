//! Diagnostic sink for failures the UI swallows.
//!
//! SYSTEM CONTEXT
//! ==============
//! The listing page has no error UI; fetch failures only go here. The
//! default sink forwards to the `log` facade, which the browser build routes
//! to the devtools console via `console_log`.

#[cfg(test)]
#[path = "diagnostics_test.rs"]
mod diagnostics_test;

/// Receiver for errors that are logged instead of shown.
pub trait DiagnosticSink {
    fn report(&self, context: &str, error: &dyn std::error::Error);
}

/// Sink writing to `log::error!`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&self, context: &str, error: &dyn std::error::Error) {
        log::error!("{context}: {error}");
    }
}

/// Sink that keeps formatted reports in memory.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingSink {
    reports: std::cell::RefCell<Vec<String>>,
}

#[cfg(test)]
impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> Vec<String> {
        self.reports.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.borrow().is_empty()
    }
}

#[cfg(test)]
impl DiagnosticSink for RecordingSink {
    fn report(&self, context: &str, error: &dyn std::error::Error) {
        self.reports.borrow_mut().push(format!("{context}: {error}"));
    }
}
