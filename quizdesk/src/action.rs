//! Actions
//!
//! Naming convention: the prefix names the trigger (`Question`, `Random`,
//! `Ping`), an intent ends in a verb (`RandomFetch`), and a result carries a
//! `Did` (`RandomDidLoad`, `RandomDidFail`). Every intent is answered by
//! exactly one result.

use quizdesk_core::ActionSummary;
use serde_json::Value;

use crate::error::FetchError;

#[derive(quizdesk_core::Action, Clone, Debug, PartialEq)]
#[action(infer_categories)]
pub enum Action {
    // ===== Question trigger =====
    /// Intent: POST the sample question
    QuestionCreate,

    /// Result: server accepted; body is forwarded to diagnostics
    QuestionDidCreate(Value),

    /// Result: request failed
    QuestionDidFail(FetchError),

    // ===== Random-number trigger =====
    /// Intent: GET a random number
    RandomFetch,

    /// Result: number to display, already rendered as text
    RandomDidLoad(String),

    /// Result: request failed
    RandomDidFail(FetchError),

    // ===== Ping trigger =====
    /// Intent: GET the greeting
    PingSend,

    /// Result: greeting text
    PingDidLoad(String),

    /// Result: request failed
    PingDidFail(FetchError),

    // ===== Uncategorized =====
    /// Periodic tick for busy spinners
    Tick,

    /// Exit the application
    Quit,
}

impl ActionSummary for Action {
    fn summary(&self) -> String {
        match self {
            Action::QuestionDidCreate(body) => {
                let text = body.to_string();
                if text.chars().count() > 40 {
                    format!(
                        "QuestionDidCreate({}...)",
                        text.chars().take(37).collect::<String>()
                    )
                } else {
                    format!("QuestionDidCreate({})", text)
                }
            }
            Action::QuestionDidFail(e) | Action::RandomDidFail(e) | Action::PingDidFail(e) => {
                format!("{}({})", quizdesk_core::Action::name(self), e)
            }
            _ => format!("{:?}", self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizdesk_core::Action as _;
    use serde_json::json;

    #[test]
    fn test_names_and_categories() {
        assert_eq!(Action::RandomFetch.name(), "RandomFetch");
        assert_eq!(Action::RandomFetch.category(), Some("random"));
        assert_eq!(Action::RandomDidLoad("1".into()).category(), Some("random"));
        assert_eq!(Action::QuestionCreate.category(), Some("question"));
        assert_eq!(
            Action::QuestionDidFail(FetchError::ResponseStatus { status: 500 }).category(),
            Some("question")
        );
        assert_eq!(Action::PingSend.category(), Some("ping"));
        assert_eq!(Action::Tick.category(), None);
        assert_eq!(Action::Quit.category(), None);
    }

    #[test]
    fn test_summary_truncates_bodies() {
        let body = json!({"message": "x".repeat(100)});
        let summary = Action::QuestionDidCreate(body).summary();
        assert!(summary.ends_with("...)"));
        assert!(summary.len() < 60);
    }

    #[test]
    fn test_summary_shows_error() {
        let summary = Action::RandomDidFail(FetchError::ResponseStatus { status: 500 }).summary();
        assert_eq!(summary, "RandomDidFail(server responded with status 500)");
    }
}
