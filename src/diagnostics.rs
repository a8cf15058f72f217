//! Non-fatal diagnostics emitted while building a command.
//!
//! The flag formatter never fails. When it sees an input it cannot
//! interpret (a boolean option set to `"yes"`, for example) it reports a
//! warning through a [`Diagnostics`] sink handed in by the caller and
//! carries on as if the option were unset.

use std::sync::{Mutex, PoisonError};

/// Sink for non-fatal warnings raised during command construction.
///
/// Implementations must be `Send + Sync` so one sink can be shared by
/// callers building commands on different threads.
pub trait Diagnostics: Send + Sync {
    /// Reports a warning.
    fn warning(&self, message: &str);
}

/// Forwards every warning to `tracing::warn!`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn warning(&self, message: &str) {
        tracing::warn!("{}", message);
    }
}

/// Keeps every warning in memory, in the order it was reported.
///
/// Used by `validate` to turn warnings into a failure, and by tests.
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    messages: Mutex<Vec<String>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the recorded warnings.
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_empty(&self) -> bool {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn warning(&self, message: &str) {
        tracing::debug!("recorded warning: {}", message);
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}
