//! Terminal events and the poller that feeds them to the runtime

use std::time::Duration;

use crossterm::event::{self, KeyEvent, KeyEventKind};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Raw event from crossterm before processing
#[derive(Debug)]
pub enum RawEvent {
    Key(KeyEvent),
    Resize(u16, u16),
}

/// Event payload delivered to components
#[derive(Debug, Clone)]
pub enum EventKind {
    /// Keyboard event (key presses only; releases are dropped)
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
}

/// Spawn the event polling task
///
/// Polls crossterm for input in batches and forwards it as [`RawEvent`]s
/// until `cancel_token` fires or the receiver is dropped.
pub fn spawn_event_poller(
    tx: mpsc::UnboundedSender<RawEvent>,
    poll_timeout: Duration,
    loop_sleep: Duration,
    cancel_token: CancellationToken,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        const MAX_EVENTS_PER_BATCH: usize = 20;

        loop {
            tokio::select! {
                _ = cancel_token.cancelled() => {
                    info!("Event poller cancelled, draining buffer");
                    while event::poll(Duration::ZERO).unwrap_or(false) {
                        let _ = event::read();
                    }
                    break;
                }
                _ = tokio::time::sleep(loop_sleep) => {
                    let mut events_processed = 0;
                    while events_processed < MAX_EVENTS_PER_BATCH
                        && event::poll(poll_timeout).unwrap_or(false)
                    {
                        events_processed += 1;
                        let Ok(evt) = event::read() else {
                            continue;
                        };
                        let raw = match evt {
                            event::Event::Key(key) => RawEvent::Key(key),
                            event::Event::Resize(w, h) => RawEvent::Resize(w, h),
                            _ => continue,
                        };
                        if tx.send(raw).is_err() {
                            debug!("Event channel closed, stopping poller");
                            return;
                        }
                    }
                }
            }
        }
    })
}

/// Process a raw event into an [`EventKind`]
///
/// Returns `None` for key releases and repeats, which some terminals report
/// and which would otherwise fire a trigger twice per press.
pub fn process_raw_event(raw: RawEvent) -> Option<EventKind> {
    match raw {
        RawEvent::Key(key) if key.kind != KeyEventKind::Press => None,
        RawEvent::Key(key) => Some(EventKind::Key(key)),
        RawEvent::Resize(w, h) => Some(EventKind::Resize(w, h)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    fn key_with_kind(kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char('r'),
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::empty(),
        }
    }

    #[test]
    fn test_process_raw_event_key_press() {
        let kind = process_raw_event(RawEvent::Key(key_with_kind(KeyEventKind::Press)));
        assert!(matches!(kind, Some(EventKind::Key(_))));
    }

    #[test]
    fn test_process_raw_event_drops_release() {
        let kind = process_raw_event(RawEvent::Key(key_with_kind(KeyEventKind::Release)));
        assert!(kind.is_none());
    }

    #[test]
    fn test_process_raw_event_resize() {
        let kind = process_raw_event(RawEvent::Resize(80, 24));
        assert!(matches!(kind, Some(EventKind::Resize(80, 24))));
    }
}
