//! Body of the `question/create` request

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseOption {
    pub id: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionMetadata {
    pub author: String,
    pub difficulty: String,
}

/// A question as the API expects it on creation.
///
/// Sent as-is: nothing is validated client-side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionPayload {
    pub question: String,
    pub subject: String,
    #[serde(rename = "use")]
    pub usage: String,
    pub correct: Vec<String>,
    pub responses: Vec<ResponseOption>,
    pub remark: String,
    pub metadata: QuestionMetadata,
    #[serde(serialize_with = "iso8601_millis")]
    pub date_creation: DateTime<Utc>,
    pub date_modification: Option<DateTime<Utc>>,
}

impl QuestionPayload {
    /// The fixed sample question, stamped with `now`.
    pub fn sample(now: DateTime<Utc>) -> Self {
        let responses = ["Paris", "Londres", "Berlin", "Madrid"]
            .iter()
            .enumerate()
            .map(|(i, text)| ResponseOption {
                id: (i + 1).to_string(),
                text: (*text).to_string(),
            })
            .collect();

        Self {
            question: "Quelle est la capitale de la France ?".into(),
            subject: "Géographie".into(),
            usage: "quiz".into(),
            correct: vec!["Paris".into()],
            responses,
            remark: "Question basique de culture générale".into(),
            metadata: QuestionMetadata {
                author: "Admin".into(),
                difficulty: "facile".into(),
            },
            date_creation: now,
            date_modification: None,
        }
    }
}

// `2024-05-01T09:30:00.123Z`, millisecond precision with a `Z` suffix
fn iso8601_millis<S: Serializer>(dt: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true))
}
