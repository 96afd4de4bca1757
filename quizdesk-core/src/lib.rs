//! Core runtime for the quizdesk terminal client
//!
//! A small unidirectional-data-flow runtime:
//!
//! - **Action**: describes an intent (`RandomFetch`) or the outcome of async
//!   work (`RandomDidLoad`)
//! - **EffectStore**: owns state; a reducer mutates it and returns effects
//! - **TaskSpawner**: runs effects that need I/O as independent tasks whose
//!   results come back as actions
//! - **Component**: pure UI elements that render props and emit actions
//! - **EffectRuntime**: the loop tying terminal events, actions and rendering
//!
//! # Async handler pattern
//!
//! 1. An intent action flips state synchronously (e.g. marks a trigger busy)
//!    and returns an effect.
//! 2. The effect handler spawns a task performing one request.
//! 3. The task resolves to a `Did*` result action, which the reducer applies.
//!
//! ```ignore
//! fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
//!     match action {
//!         Action::RandomFetch => {
//!             state.random.busy = true;
//!             DispatchResult::changed_with(Effect::FetchRandom)
//!         }
//!         Action::RandomDidLoad(text) => {
//!             state.random.busy = false;
//!             state.random_display = Some(text);
//!             DispatchResult::changed()
//!         }
//!     }
//! }
//! ```

pub mod action;
pub mod component;
pub mod effect;
pub mod event;
pub mod middleware;
pub mod runtime;
pub mod subscriptions;
pub mod tasks;
pub mod testing;

pub use action::{Action, ActionSummary};
pub use component::Component;
pub use effect::{DispatchResult, EffectReducer, EffectStore};
pub use event::{process_raw_event, spawn_event_poller, EventKind, RawEvent};
pub use middleware::{LoggingMiddleware, Middleware, NoopMiddleware};
pub use runtime::{EffectContext, EffectRuntime, EventOutcome};
pub use subscriptions::Subscriptions;
pub use tasks::{TaskId, TaskSpawner};

/// Derive macro for [`Action`]
pub use quizdesk_macros::Action;

// Re-export ratatui types for convenience
pub use ratatui::{layout::Rect, Frame};
