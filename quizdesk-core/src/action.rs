//! Action trait for type-safe state mutations

use std::fmt::Debug;

/// Marker trait for actions that can be dispatched to the store
///
/// Actions represent intents to change state, or the outcome of async work
/// that an intent started. They should be:
/// - Clone: Actions may be logged or sent to multiple handlers
/// - Debug: For debugging and logging
/// - Send + 'static: For async dispatch across tasks
///
/// Use `#[derive(Action)]` to auto-implement this trait.
pub trait Action: Clone + Debug + Send + 'static {
    /// Get the action name for logging and filtering
    fn name(&self) -> &'static str;

    /// Category used to group related actions in logs
    fn category(&self) -> Option<&'static str> {
        None
    }
}

/// Concise, log-friendly description of an action
///
/// Defaults to the `Debug` output; override for actions carrying bulky
/// payloads.
pub trait ActionSummary: Action {
    fn summary(&self) -> String {
        format!("{:?}", self)
    }
}
