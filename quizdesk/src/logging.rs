use std::fs::{self, File};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing::Subscriber;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing to a log file.
///
/// The terminal belongs to the UI, so the file is the only place log events
/// and the diagnostic channel end up. `RUST_LOG` overrides the `info` default.
pub fn init_tracing(log_file: &Path) {
    let file = match open_log_file(log_file) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Warning: Failed to open log file {}: {}", log_file.display(), e);
            return;
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if let Err(e) = file_subscriber(filter, file).try_init() {
        eprintln!("Warning: Failed to install log subscriber: {}", e);
    }
}

/// Open `path` for appending, creating it and its parent directories.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::OpenOptions::new().create(true).append(true).open(path)
}

/// Plain-text subscriber writing every event that passes `filter` to `file`.
pub fn file_subscriber(filter: EnvFilter, file: File) -> impl Subscriber + Send + Sync + 'static {
    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry().with(filter).with(file_layer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use crate::diagnostics::{Diagnostic, DiagnosticSink, TracingSink, DIAGNOSTICS_TARGET};
    use crate::error::FetchError;
    use crate::state::Trigger;
    use quizdesk_core::{LoggingMiddleware, Middleware};

    fn log_with<F: FnOnce()>(filter: &str, f: F) -> String {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quizdesk.log");
        let file = open_log_file(&path).unwrap();

        tracing::subscriber::with_default(file_subscriber(EnvFilter::new(filter), file), f);

        fs::read_to_string(&path).unwrap()
    }

    #[test]
    fn test_open_log_file_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("logs").join("quizdesk.log");

        open_log_file(&path).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_diagnostic_lands_in_log_file() {
        let output = log_with("info", || {
            TracingSink.report(&Diagnostic::failure(
                Trigger::RandomNumber,
                &FetchError::ResponseStatus { status: 500 },
            ));
        });

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 1, "{}", output);
        assert!(lines[0].contains("ERROR"));
        assert!(lines[0].contains(DIAGNOSTICS_TARGET));
        assert!(lines[0].contains("random_number"));
        assert!(lines[0].contains("server responded with status 500"));
    }

    #[test]
    fn test_filter_silences_diagnostics() {
        let output = log_with("off", || {
            TracingSink.report(&Diagnostic::response(Trigger::Ping, "Hello"));
        });
        assert!(output.is_empty());
    }

    #[test]
    fn test_verbose_middleware_logs_summary() {
        let output = log_with("debug", || {
            let mut middleware = LoggingMiddleware::verbose();
            let action = Action::RandomDidFail(FetchError::ResponseStatus { status: 503 });
            middleware.before(&action);
            middleware.after(&action, true);
        });

        assert!(output.contains("RandomDidFail(server responded with status 503)"));
        assert!(output.contains("category=random") || output.contains("category=\"random\""));
        assert!(output.contains("Action processed"));
    }
}
