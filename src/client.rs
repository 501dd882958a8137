//! Error taxonomy shared by every layer of the service clients.
//!
//! Each variant carries the context it was raised in and, where one exists,
//! the original error as its source so the full cause chain stays available
//! for rendering.

use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;

/// Longest server message shown to the user when summarizing an error body
const MAX_BODY_SUMMARY_LENGTH: usize = 200;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid {field} {input:?}")]
    InvalidIdentifier {
        field: String,
        input: String,
        #[source]
        source: uuid::Error,
    },
    #[error("{value:?} is not a valid {field}, expected one of: {}", .allowed.join(", "))]
    InvalidEnumValue {
        field: String,
        value: String,
        allowed: Vec<&'static str>,
    },
    #[error("malformed URL {url:?}")]
    MalformedUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("request to {url} timed out after {}s", .timeout.as_secs_f64())]
    Timeout {
        url: String,
        timeout: Duration,
        #[source]
        source: reqwest::Error,
    },
    #[error("{context}")]
    Transport {
        context: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("server responded with {status}: {}", summarize_body(.body))]
    Remote { status: StatusCode, body: String },
    #[error("{context}")]
    Serialization {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    /// Name of the error kind as shown to the user
    pub fn kind(&self) -> &'static str {
        match self {
            ClientError::InvalidIdentifier { .. } => "InvalidIdentifier",
            ClientError::InvalidEnumValue { .. } => "InvalidEnumValue",
            ClientError::MalformedUrl { .. } => "MalformedURL",
            ClientError::Timeout { .. } => "Timeout",
            ClientError::Transport { .. } => "TransportError",
            ClientError::Remote { .. } => "RemoteError",
            ClientError::Serialization { .. } => "SerializationError",
        }
    }

    /// HTTP status of a remote error
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Classify a reqwest failure for the given URL
    pub(crate) fn from_reqwest(error: reqwest::Error, url: &str, timeout: Duration) -> Self {
        if error.is_timeout() {
            ClientError::Timeout {
                url: url.to_string(),
                timeout,
                source: error,
            }
        } else {
            ClientError::Transport {
                context: format!("request to {} failed", url),
                source: error,
            }
        }
    }
}

/// Reduce a raw error body to a short single-line message.
///
/// JSON bodies are searched for a `message`, `error` or `detail` string;
/// anything else is cut down to its first non-empty line.
pub fn summarize_body(body: &str) -> String {
    let from_json = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            ["message", "error", "detail"]
                .iter()
                .filter_map(|key| value.get(key).and_then(|v| v.as_str()))
                .find(|message| !message.trim().is_empty())
                .map(str::to_string)
        });

    let summary = match from_json {
        Some(message) => message,
        None => body
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or("no response body")
            .to_string(),
    };

    let summary = summary.split_whitespace().collect::<Vec<_>>().join(" ");
    if summary.chars().count() > MAX_BODY_SUMMARY_LENGTH {
        let truncated: String = summary.chars().take(MAX_BODY_SUMMARY_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        summary
    }
}
