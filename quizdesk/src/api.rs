//! Client for the local quiz API
//!
//! Each method performs exactly one request and classifies the outcome into
//! a [`FetchError`]. No retries, and no timeout beyond reqwest's defaults.

use reqwest::{Client, Response, Url};
use serde_json::Value;

use crate::error::FetchError;
use crate::question::QuestionPayload;

pub const CREATE_QUESTION_PATH: &str = "question/create";
pub const RANDOM_PATH: &str = "random";
pub const HELLO_PATH: &str = "hello";

/// Field of the `random` response holding the number
pub const RANDOM_FIELD: &str = "random_number";

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    /// `base_url` must end with `/` so paths join beneath it.
    pub fn new(base_url: Url) -> Self {
        Self {
            http: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, FetchError> {
        self.base_url
            .join(path)
            .map_err(|e| FetchError::Transport(format!("invalid endpoint '{}': {}", path, e)))
    }

    /// `POST {base}question/create` with the payload as JSON.
    ///
    /// Returns the response body: parsed JSON when it is JSON, otherwise the
    /// raw text as a JSON string. The body is not validated.
    pub async fn create_question(&self, payload: &QuestionPayload) -> Result<Value, FetchError> {
        let url = self.endpoint(CREATE_QUESTION_PATH)?;
        tracing::debug!(%url, "POST question");

        let response = self.http.post(url).json(payload).send().await?;
        let body = success_body(response).await?;

        Ok(serde_json::from_str(&body).unwrap_or(Value::String(body)))
    }

    /// `GET {base}random`, returning the number as display text.
    pub async fn random_number(&self) -> Result<String, FetchError> {
        let url = self.endpoint(RANDOM_PATH)?;
        tracing::debug!(%url, "GET random");

        let response = self.http.get(url).send().await?;
        let body = success_body(response).await?;
        let value: Value = serde_json::from_str(&body)?;

        value
            .get(RANDOM_FIELD)
            .map(display_text)
            .ok_or_else(|| {
                FetchError::MalformedResponse(format!("missing field '{}'", RANDOM_FIELD))
            })
    }

    /// `GET {base}hello`, returning the plain-text greeting.
    pub async fn hello(&self) -> Result<String, FetchError> {
        let url = self.endpoint(HELLO_PATH)?;
        tracing::debug!(%url, "GET hello");

        let response = self.http.get(url).send().await?;
        success_body(response).await
    }
}

/// Read the body of a 2xx response; anything else is `ResponseStatus`.
async fn success_body(response: Response) -> Result<String, FetchError> {
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::ResponseStatus {
            status: status.as_u16(),
        });
    }
    Ok(response.text().await?)
}

/// Text for a JSON value: strings verbatim, everything else as JSON text.
pub fn display_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
