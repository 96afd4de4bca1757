//! Effects - side effects declared by the reducer
//!
//! The reducer stays pure; the [`EffectHandler`] turns these into requests
//! and diagnostic writes.

use std::sync::Arc;

use chrono::Utc;
use quizdesk_core::EffectContext;

use crate::action::Action;
use crate::api::ApiClient;
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::question::QuestionPayload;

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// POST the sample question, stamped at the moment the effect runs
    CreateQuestion,
    /// GET a random number
    FetchRandom,
    /// GET the greeting
    Ping,
    /// Write one entry to the diagnostic channel
    Report(Diagnostic),
}

/// Executes effects: requests become spawned tasks, reports go to the sink.
///
/// The API client and sink are injected once at startup.
#[derive(Clone)]
pub struct EffectHandler {
    api: Arc<ApiClient>,
    sink: Arc<dyn DiagnosticSink>,
}

impl EffectHandler {
    pub fn new(api: ApiClient, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            api: Arc::new(api),
            sink,
        }
    }

    pub fn handle(&self, effect: Effect, ctx: &mut EffectContext<Action>) {
        match effect {
            Effect::CreateQuestion => {
                let api = Arc::clone(&self.api);
                let payload = QuestionPayload::sample(Utc::now());
                ctx.tasks().spawn("question", async move {
                    match api.create_question(&payload).await {
                        Ok(body) => Action::QuestionDidCreate(body),
                        Err(e) => Action::QuestionDidFail(e),
                    }
                });
            }
            Effect::FetchRandom => {
                let api = Arc::clone(&self.api);
                ctx.tasks().spawn("random", async move {
                    match api.random_number().await {
                        Ok(text) => Action::RandomDidLoad(text),
                        Err(e) => Action::RandomDidFail(e),
                    }
                });
            }
            Effect::Ping => {
                let api = Arc::clone(&self.api);
                ctx.tasks().spawn("ping", async move {
                    match api.hello().await {
                        Ok(text) => Action::PingDidLoad(text),
                        Err(e) => Action::PingDidFail(e),
                    }
                });
            }
            Effect::Report(diagnostic) => self.sink.report(&diagnostic),
        }
    }
}
