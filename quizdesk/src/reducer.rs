//! Reducer - (state, action) -> (changed, effects)
//!
//! Every trigger follows the same lifecycle: the intent marks it busy and
//! asks for a request; the result clears busy first, then either updates a
//! display or asks for a diagnostic report. There is no guard against a
//! second intent while one is in flight.

use quizdesk_core::DispatchResult;

use crate::action::Action;
use crate::diagnostics::Diagnostic;
use crate::effect::Effect;
use crate::state::{AppState, Trigger};

pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Question =====
        Action::QuestionCreate => start(state, Trigger::CreateQuestion, Effect::CreateQuestion),

        Action::QuestionDidCreate(body) => {
            state.create_question.busy = false;
            DispatchResult::changed_with(Effect::Report(Diagnostic::response(
                Trigger::CreateQuestion,
                body.to_string(),
            )))
        }

        Action::QuestionDidFail(err) => fail(state, Trigger::CreateQuestion, &err),

        // ===== Random number =====
        Action::RandomFetch => start(state, Trigger::RandomNumber, Effect::FetchRandom),

        Action::RandomDidLoad(text) => {
            state.random_number.busy = false;
            state.random_display = Some(text);
            DispatchResult::changed()
        }

        Action::RandomDidFail(err) => fail(state, Trigger::RandomNumber, &err),

        // ===== Ping =====
        Action::PingSend => start(state, Trigger::Ping, Effect::Ping),

        Action::PingDidLoad(text) => {
            state.ping.busy = false;
            state.ping_display = Some(text);
            DispatchResult::changed()
        }

        Action::PingDidFail(err) => fail(state, Trigger::Ping, &err),

        // ===== Global =====
        Action::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            // only re-render while a spinner is visible
            DispatchResult {
                changed: state.any_busy(),
                effects: vec![],
            }
        }

        // Quit is handled in the main loop
        Action::Quit => DispatchResult::unchanged(),
    }
}

fn start(state: &mut AppState, trigger: Trigger, effect: Effect) -> DispatchResult<Effect> {
    state.trigger_mut(trigger).busy = true;
    DispatchResult::changed_with(effect)
}

fn fail(
    state: &mut AppState,
    trigger: Trigger,
    err: &crate::error::FetchError,
) -> DispatchResult<Effect> {
    state.trigger_mut(trigger).busy = false;
    DispatchResult::changed_with(Effect::Report(Diagnostic::failure(trigger, err)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Level;
    use crate::error::FetchError;
    use serde_json::json;

    #[test]
    fn test_random_fetch_sets_busy_and_requests() {
        let mut state = AppState::default();

        let result = reducer(&mut state, Action::RandomFetch);

        assert!(result.changed);
        assert!(state.random_number.busy);
        assert_eq!(result.effects, vec![Effect::FetchRandom]);
    }

    #[test]
    fn test_random_did_load_renders_and_clears_busy() {
        let mut state = AppState::default();
        state.random_number.busy = true;

        let result = reducer(&mut state, Action::RandomDidLoad("42".into()));

        assert!(result.changed);
        assert!(!state.random_number.busy);
        assert_eq!(state.random_display.as_deref(), Some("42"));
        assert!(result.effects.is_empty());
    }

    #[test]
    fn test_random_failure_keeps_display_and_reports() {
        let mut state = AppState::default();
        state.random_display = Some("7".into());
        state.random_number.busy = true;

        let err = FetchError::ResponseStatus { status: 500 };
        let result = reducer(&mut state, Action::RandomDidFail(err));

        assert!(!state.random_number.busy);
        assert_eq!(state.random_display.as_deref(), Some("7"));
        match result.effects.as_slice() {
            [Effect::Report(d)] => {
                assert_eq!(d.level, Level::Error);
                assert_eq!(d.trigger, Trigger::RandomNumber);
                assert!(d.message.contains("500"));
            }
            other => panic!("expected one report, got {:?}", other),
        }
    }

    #[test]
    fn test_question_success_forwards_body_without_rendering() {
        let mut state = AppState::default();
        reducer(&mut state, Action::QuestionCreate);
        assert!(state.create_question.busy);

        let body = json!({"success": true});
        let result = reducer(&mut state, Action::QuestionDidCreate(body));

        assert!(!state.create_question.busy);
        assert_eq!(state.random_display, None);
        assert_eq!(
            result.effects,
            vec![Effect::Report(Diagnostic::response(
                Trigger::CreateQuestion,
                r#"{"success":true}"#
            ))]
        );
    }

    #[test]
    fn test_results_arrive_last_wins() {
        let mut state = AppState::default();
        reducer(&mut state, Action::RandomFetch);
        reducer(&mut state, Action::RandomFetch);

        reducer(&mut state, Action::RandomDidLoad("2".into()));
        assert_eq!(state.random_display.as_deref(), Some("2"));

        reducer(&mut state, Action::RandomDidLoad("1".into()));
        assert_eq!(state.random_display.as_deref(), Some("1"));
        assert!(!state.random_number.busy);
    }

    #[test]
    fn test_triggers_are_independent() {
        let mut state = AppState::default();
        reducer(&mut state, Action::PingSend);
        reducer(&mut state, Action::RandomFetch);

        reducer(
            &mut state,
            Action::PingDidFail(FetchError::Transport("refused".into())),
        );

        assert!(!state.ping.busy);
        assert!(state.random_number.busy);
    }

    #[test]
    fn test_tick_only_rerenders_when_busy() {
        let mut state = AppState::default();
        assert!(!reducer(&mut state, Action::Tick).changed);

        state.ping.busy = true;
        assert!(reducer(&mut state, Action::Tick).changed);
        assert_eq!(state.tick_count, 2);
    }
}
