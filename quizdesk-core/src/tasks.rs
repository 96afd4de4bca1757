//! Spawner for independent async tasks
//!
//! Every call to [`TaskSpawner::spawn`] starts a new task, even when one with
//! the same label is still running. Completions are sent back as actions in
//! the order they finish, not the order they were started.
//!
//! ```ignore
//! let (action_tx, mut action_rx) = tokio::sync::mpsc::unbounded_channel();
//! let mut tasks = TaskSpawner::new(action_tx);
//!
//! // Two presses, two requests; whichever finishes last is dispatched last
//! tasks.spawn("random", async { fetch().await.into() });
//! tasks.spawn("random", async { fetch().await.into() });
//! ```

use std::collections::HashMap;
use std::fmt;
use std::future::Future;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::Action;

/// Identifies one spawned task.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

impl TaskId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

struct Running {
    label: &'static str,
    handle: JoinHandle<()>,
}

/// Spawns tasks that each produce one action.
///
/// There is no keyed replacement and no per-task cancellation: a task runs
/// until it yields its action. Outstanding tasks are aborted only when the
/// spawner is shut down or dropped.
pub struct TaskSpawner<A> {
    next_id: u64,
    tasks: HashMap<TaskId, Running>,
    action_tx: mpsc::UnboundedSender<A>,
}

impl<A> TaskSpawner<A>
where
    A: Action,
{
    /// Create a new spawner sending completions into `action_tx`.
    pub fn new(action_tx: mpsc::UnboundedSender<A>) -> Self {
        Self {
            next_id: 0,
            tasks: HashMap::new(),
            action_tx,
        }
    }

    /// Spawn a task; its output action is sent when the future resolves.
    pub fn spawn<F>(&mut self, label: &'static str, future: F) -> TaskId
    where
        F: Future<Output = A> + Send + 'static,
    {
        self.prune();

        let id = TaskId(self.next_id);
        self.next_id += 1;

        let tx = self.action_tx.clone();
        let handle = tokio::spawn(async move {
            let action = future.await;
            // Receiver gone means the runtime shut down; nothing to deliver to
            let _ = tx.send(action);
        });

        self.tasks.insert(id, Running { label, handle });
        tracing::debug!(
            task = %id,
            label,
            in_flight = self.in_flight_for(label),
            "Task spawned"
        );
        id
    }

    /// Number of tasks that have not finished yet.
    pub fn in_flight(&self) -> usize {
        self.tasks
            .values()
            .filter(|t| !t.handle.is_finished())
            .count()
    }

    /// Number of unfinished tasks with the given label.
    pub fn in_flight_for(&self, label: &str) -> usize {
        self.tasks
            .values()
            .filter(|t| t.label == label && !t.handle.is_finished())
            .count()
    }

    /// Abort every outstanding task.
    pub fn shutdown(&mut self) {
        tracing::debug!(in_flight = self.in_flight(), "Shutting down tasks");
        for (id, task) in self.tasks.drain() {
            if !task.handle.is_finished() {
                tracing::debug!(task = %id, label = task.label, "Abandoning task");
                task.handle.abort();
            }
        }
    }

    fn prune(&mut self) {
        self.tasks.retain(|_, t| !t.handle.is_finished());
    }
}

impl<A> Drop for TaskSpawner<A> {
    fn drop(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }
}
