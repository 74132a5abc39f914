//! The remote evaluation service.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Failures of a single evaluation request
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    /// The service answered with a structured error
    #[error("{0}")]
    Evaluation(String),

    /// No usable response could be obtained
    #[error("Connection error: {0}")]
    Connection(String),
}

/// Anything that can evaluate an expression to a textual result.
#[async_trait]
pub trait Evaluator: Send + Sync {
    async fn evaluate(&self, expression: &str) -> Result<String, SessionError>;
}

#[derive(Debug, Serialize)]
struct EvaluationRequest<'a> {
    expression: &'a str,
}

#[derive(Debug, Deserialize)]
struct EvaluationReply {
    result: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct EvaluationFailure {
    error: String,
}

/// HTTP client for the evaluation service.
///
/// Sends `POST {service_url}/calculate` with `{"expression": ...}`. A success
/// status carries `{"result": ...}`, an error status carries
/// `{"error": ...}`. Transport failures and unreadable success bodies are
/// connection errors.
#[derive(Debug, Clone)]
pub struct HttpEvaluator {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpEvaluator {
    /// Create a client for the service at `service_url`.
    ///
    /// Requests taking longer than `timeout` fail as connection errors.
    pub fn new(service_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(service_url, client))
    }

    /// Create a client with a custom reqwest client.
    pub fn with_client(service_url: &str, client: reqwest::Client) -> Self {
        Self {
            endpoint: format!("{}/calculate", service_url.trim_end_matches('/')),
            client,
        }
    }

    /// The full URL requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn connection_error(e: impl std::fmt::Display) -> SessionError {
    SessionError::Connection(e.to_string())
}

#[async_trait]
impl Evaluator for HttpEvaluator {
    async fn evaluate(&self, expression: &str) -> Result<String, SessionError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&EvaluationRequest { expression })
            .send()
            .await
            .map_err(connection_error)?;

        let status = response.status();
        let body = response.text().await.map_err(connection_error)?;

        if !status.is_success() {
            let message = serde_json::from_str::<EvaluationFailure>(&body)
                .map(|failure| failure.error)
                .unwrap_or_else(|_| format!("Service returned {status}"));
            return Err(SessionError::Evaluation(message));
        }

        let reply: EvaluationReply = serde_json::from_str(&body).map_err(connection_error)?;
        match reply.result {
            Some(serde_json::Value::String(text)) => Ok(text),
            Some(serde_json::Value::Null) | None => {
                Err(connection_error("response carried no result"))
            }
            Some(value) => Ok(value.to_string()),
        }
    }
}
