//! Interval subscriptions: long-lived sources of actions
//!
//! ```ignore
//! let mut subs = Subscriptions::new(action_tx);
//! subs.interval("tick", Duration::from_millis(100), || Action::Tick);
//! ```

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::Action;

/// Manages named interval timers that emit actions.
pub struct Subscriptions<A> {
    handles: HashMap<&'static str, JoinHandle<()>>,
    action_tx: mpsc::UnboundedSender<A>,
}

impl<A> Subscriptions<A>
where
    A: Action,
{
    pub fn new(action_tx: mpsc::UnboundedSender<A>) -> Self {
        Self {
            handles: HashMap::new(),
            action_tx,
        }
    }

    /// Emit `action_fn()` every `period`, starting one period from now.
    ///
    /// Replaces any subscription already registered under `key`.
    pub fn interval<F>(&mut self, key: &'static str, period: Duration, action_fn: F) -> &mut Self
    where
        F: Fn() -> A + Send + 'static,
    {
        self.cancel(key);

        let tx = self.action_tx.clone();
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // Skip the first immediate tick
            interval.tick().await;

            loop {
                interval.tick().await;
                if tx.send(action_fn()).is_err() {
                    break;
                }
            }
        });

        self.handles.insert(key, handle);
        self
    }

    pub fn cancel(&mut self, key: &str) {
        if let Some(handle) = self.handles.remove(key) {
            handle.abort();
        }
    }

    pub fn cancel_all(&mut self) {
        for (_, handle) in self.handles.drain() {
            handle.abort();
        }
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.handles.contains_key(key)
    }
}

impl<A> Drop for Subscriptions<A> {
    fn drop(&mut self) {
        for (_, handle) in self.handles.drain() {
            handle.abort();
        }
    }
}
