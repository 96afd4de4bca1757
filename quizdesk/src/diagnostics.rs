//! Diagnostic channel: where request outcomes go that the UI never shows.
//!
//! Failures of every kind land here, and so do bodies returned by
//! `question/create`. The production sink writes them to the log file via
//! `tracing`; tests swap in a [`RecordingSink`].

use std::sync::Mutex;

use crate::error::FetchError;
use crate::state::Trigger;

pub const DIAGNOSTICS_TARGET: &str = "quizdesk::diagnostics";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Info,
    Error,
}

/// One entry written to the diagnostic channel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: Level,
    pub trigger: Trigger,
    pub message: String,
}

impl Diagnostic {
    /// A response body forwarded for inspection.
    pub fn response(trigger: Trigger, body: impl Into<String>) -> Self {
        Self {
            level: Level::Info,
            trigger,
            message: body.into(),
        }
    }

    pub fn failure(trigger: Trigger, err: &FetchError) -> Self {
        Self {
            level: Level::Error,
            trigger,
            message: err.to_string(),
        }
    }
}

pub trait DiagnosticSink: Send + Sync {
    fn report(&self, diagnostic: &Diagnostic);
}

/// Writes diagnostics as `tracing` events under [`DIAGNOSTICS_TARGET`].
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        match diagnostic.level {
            Level::Info => tracing::info!(
                target: DIAGNOSTICS_TARGET,
                trigger = %diagnostic.trigger,
                "{}",
                diagnostic.message
            ),
            Level::Error => tracing::error!(
                target: DIAGNOSTICS_TARGET,
                trigger = %diagnostic.trigger,
                "{}",
                diagnostic.message
            ),
        }
    }
}

/// Keeps every diagnostic in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    entries: Mutex<Vec<Diagnostic>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<Diagnostic> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    pub fn errors(&self) -> Vec<Diagnostic> {
        self.entries()
            .into_iter()
            .filter(|d| d.level == Level::Error)
            .collect()
    }
}

impl DiagnosticSink for RecordingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(diagnostic.clone());
        }
    }
}
