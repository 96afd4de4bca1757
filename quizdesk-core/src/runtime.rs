//! The event/action/render loop.
//!
//! One loop owns the store. Terminal events are mapped to actions, actions
//! go through the reducer one at a time, and the effects each dispatch
//! returns are handed to an effect handler that may spawn tasks. Task
//! completions re-enter the same queue as actions, so every state mutation
//! happens on this loop.

use std::io;
use std::time::Duration;

use ratatui::backend::Backend;
use ratatui::layout::Rect;
use ratatui::{Frame, Terminal};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::effect::EffectStore;
use crate::event::{process_raw_event, spawn_event_poller, EventKind, RawEvent};
use crate::middleware::Middleware;
use crate::subscriptions::Subscriptions;
use crate::tasks::TaskSpawner;
use crate::Action;

/// Timeout passed to each `crossterm::event::poll` call
const POLL_TIMEOUT: Duration = Duration::from_millis(10);
/// Sleep between poll cycles
const LOOP_SLEEP: Duration = Duration::from_millis(16);

/// Result of mapping an event into actions plus an optional render hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventOutcome<A> {
    /// Actions to enqueue.
    pub actions: Vec<A>,
    /// Whether to force a re-render.
    pub needs_render: bool,
}

impl<A> EventOutcome<A> {
    /// No actions and no render.
    pub fn ignored() -> Self {
        Self {
            actions: Vec::new(),
            needs_render: false,
        }
    }

    /// Wrap a single action.
    pub fn action(action: A) -> Self {
        Self {
            actions: vec![action],
            needs_render: false,
        }
    }

    /// Collect actions from a component's `handle_event` result.
    pub fn from_actions(iter: impl IntoIterator<Item = A>) -> Self {
        Self {
            actions: iter.into_iter().collect(),
            needs_render: false,
        }
    }

    /// Mark that a render is needed.
    pub fn with_render(mut self) -> Self {
        self.needs_render = true;
        self
    }
}

impl<A> Default for EventOutcome<A> {
    fn default() -> Self {
        Self::ignored()
    }
}

impl<A> From<Vec<A>> for EventOutcome<A> {
    fn from(actions: Vec<A>) -> Self {
        Self::from_actions(actions)
    }
}

impl<A> From<Option<A>> for EventOutcome<A> {
    fn from(action: Option<A>) -> Self {
        match action {
            Some(action) => Self::action(action),
            None => Self::ignored(),
        }
    }
}

/// Context passed to effect handlers.
///
/// Effects reach the action queue only through spawned tasks.
pub struct EffectContext<'a, A: Action> {
    tasks: &'a mut TaskSpawner<A>,
}

impl<'a, A: Action> EffectContext<'a, A> {
    pub fn new(tasks: &'a mut TaskSpawner<A>) -> Self {
        Self { tasks }
    }

    /// Access the task spawner.
    pub fn tasks(&mut self) -> &mut TaskSpawner<A> {
        self.tasks
    }
}

/// Runtime for effect-based stores.
pub struct EffectRuntime<S, A, E, M>
where
    A: Action,
    M: Middleware<A>,
{
    store: EffectStore<S, A, E, M>,
    action_tx: mpsc::UnboundedSender<A>,
    action_rx: mpsc::UnboundedReceiver<A>,
    should_render: bool,
    tasks: TaskSpawner<A>,
    subscriptions: Subscriptions<A>,
}

impl<S, A, E, M> EffectRuntime<S, A, E, M>
where
    A: Action,
    M: Middleware<A>,
{
    /// Create a runtime from an effect store.
    pub fn from_store(store: EffectStore<S, A, E, M>) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let tasks = TaskSpawner::new(action_tx.clone());
        let subscriptions = Subscriptions::new(action_tx.clone());

        Self {
            store,
            action_tx,
            action_rx,
            should_render: true,
            tasks,
            subscriptions,
        }
    }

    /// Send an action into the runtime queue.
    pub fn enqueue(&self, action: A) {
        let _ = self.action_tx.send(action);
    }

    /// Access the current state.
    pub fn state(&self) -> &S {
        self.store.state()
    }

    /// Access the task spawner.
    pub fn tasks(&mut self) -> &mut TaskSpawner<A> {
        &mut self.tasks
    }

    /// Access subscriptions.
    pub fn subscriptions(&mut self) -> &mut Subscriptions<A> {
        &mut self.subscriptions
    }

    /// Wait for the next queued action.
    ///
    /// The runtime keeps its own sender alive, so this only returns `None`
    /// if the queue is closed from outside.
    pub async fn next_action(&mut self) -> Option<A> {
        self.action_rx.recv().await
    }

    /// Run one action through the reducer and route its effects.
    ///
    /// Returns whether state changed.
    pub fn dispatch<FEffect>(&mut self, action: A, handle_effect: &mut FEffect) -> bool
    where
        FEffect: FnMut(E, &mut EffectContext<A>),
    {
        let result = self.store.dispatch(action);
        if result.has_effects() {
            let mut ctx = EffectContext::new(&mut self.tasks);
            for effect in result.effects {
                handle_effect(effect, &mut ctx);
            }
        }
        result.changed
    }

    /// Run the event/action loop until `should_quit` accepts an action.
    pub async fn run<B, FRender, FEvent, FQuit, FEffect, R>(
        &mut self,
        terminal: &mut Terminal<B>,
        mut render: FRender,
        mut map_event: FEvent,
        mut should_quit: FQuit,
        mut handle_effect: FEffect,
    ) -> io::Result<()>
    where
        B: Backend,
        FRender: FnMut(&mut Frame, Rect, &S),
        FEvent: FnMut(&EventKind, &S) -> R,
        R: Into<EventOutcome<A>>,
        FQuit: FnMut(&A) -> bool,
        FEffect: FnMut(E, &mut EffectContext<A>),
    {
        let (event_tx, mut event_rx) = mpsc::unbounded_channel::<RawEvent>();
        let cancel_token = CancellationToken::new();
        let _handle = spawn_event_poller(
            event_tx,
            POLL_TIMEOUT,
            LOOP_SLEEP,
            cancel_token.clone(),
        );

        loop {
            if self.should_render {
                let state = self.store.state();
                terminal.draw(|frame| {
                    let area = frame.area();
                    render(frame, area, state);
                })?;
                self.should_render = false;
            }

            tokio::select! {
                Some(raw_event) = event_rx.recv() => {
                    let Some(event) = process_raw_event(raw_event) else {
                        continue;
                    };

                    let outcome: EventOutcome<A> = map_event(&event, self.store.state()).into();
                    if outcome.needs_render {
                        self.should_render = true;
                    }
                    for action in outcome.actions {
                        let _ = self.action_tx.send(action);
                    }
                }

                Some(action) = self.action_rx.recv() => {
                    if should_quit(&action) {
                        break;
                    }

                    if self.dispatch(action, &mut handle_effect) {
                        self.should_render = true;
                    }
                }

                else => {
                    break;
                }
            }
        }

        cancel_token.cancel();
        self.subscriptions.cancel_all();
        self.tasks.shutdown();

        Ok(())
    }
}
