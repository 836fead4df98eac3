//! Diagnostic sink for fetch failures
//!
//! The listing controller never propagates a failed fetch. It reports one
//! record here and keeps showing the last good list.

use crate::api::FetchError;

/// Receives failures the UI swallowed
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, context: &str, error: &FetchError);
}

/// Default sink: an error-level tracing record
///
/// In TUI mode the record lands in the log buffer and shows up in the
/// footer logs panel; in headless mode it goes to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, context: &str, error: &FetchError) {
        tracing::error!(target: "adota::diagnostics", error = %error, "{}", context);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Sink that keeps every record for assertions
    #[derive(Debug, Default, Clone)]
    pub struct RecordingSink {
        records: Arc<Mutex<Vec<(String, FetchError)>>>,
    }

    impl RecordingSink {
        pub fn records(&self) -> Vec<(String, FetchError)> {
            self.records.lock().unwrap().clone()
        }
    }

    impl DiagnosticSink for RecordingSink {
        fn report(&self, context: &str, error: &FetchError) {
            self.records
                .lock()
                .unwrap()
                .push((context.to_string(), error.clone()));
        }
    }
}
