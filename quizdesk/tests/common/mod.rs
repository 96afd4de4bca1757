//! Shared test utilities.

#![allow(dead_code, unused_imports)]

pub mod mock_server;

use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

use quizdesk::action::Action;
use quizdesk::api::ApiClient;
use quizdesk::diagnostics::RecordingSink;
use quizdesk::effect::{Effect, EffectHandler};
use quizdesk::reducer::reducer;
use quizdesk::state::AppState;
use quizdesk_core::{EffectRuntime, EffectStore, NoopMiddleware};

pub use mock_server::{CapturedRequest, MockResponse, MockServer};

pub type TestRuntime = EffectRuntime<AppState, Action, Effect, NoopMiddleware>;

/// A base URL nothing listens on.
pub fn refused_url() -> reqwest::Url {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    reqwest::Url::parse(&format!("http://127.0.0.1:{}/", port)).unwrap()
}

/// The application loop without a terminal: runtime, real HTTP handler and
/// a sink that records diagnostics.
pub struct Harness {
    pub runtime: TestRuntime,
    pub handler: EffectHandler,
    pub sink: Arc<RecordingSink>,
}

impl Harness {
    pub fn new(base_url: reqwest::Url) -> Self {
        let sink = Arc::new(RecordingSink::new());
        let handler = EffectHandler::new(ApiClient::new(base_url.clone()), sink.clone());
        let store = EffectStore::new(AppState::new(base_url.as_str()), reducer, NoopMiddleware);
        Self {
            runtime: EffectRuntime::from_store(store),
            handler,
            sink,
        }
    }

    pub fn state(&self) -> &AppState {
        self.runtime.state()
    }

    /// Dispatch an action, routing effects through the handler.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let handler = &self.handler;
        self.runtime
            .dispatch(action, &mut |effect, ctx| handler.handle(effect, ctx))
    }

    /// Wait for the next result action and apply it.
    pub async fn settle_one(&mut self) -> Action {
        let action = tokio::time::timeout(Duration::from_secs(5), self.runtime.next_action())
            .await
            .expect("timed out waiting for a result action")
            .expect("action channel closed");
        self.dispatch(action.clone());
        action
    }
}
