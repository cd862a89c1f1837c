use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;

/// Shared result type for API calls and screen actions.
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error, Clone)]
pub enum ApiError {
    #[error("unauthorized")]
    Unauthorized { message: Option<String> },
    #[error("resource not found")]
    NotFound { message: Option<String> },
    #[error("bad request: {0}")]
    InvalidInput(String),
    #[error("request rejected with status {status}")]
    Rejected {
        status: u16,
        message: Option<String>,
    },
    #[error("internal error")]
    Internal(Arc<anyhow::Error>),
}

/// Longest plain-text error body that is still shown to the user verbatim.
const MAX_PLAIN_MESSAGE: usize = 200;

#[derive(Deserialize)]
struct MessageBody {
    message: Option<String>,
}

impl ApiError {
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Unauthorized { .. } => "UNAUTHORIZED",
            ApiError::NotFound { .. } => "NOT_FOUND",
            ApiError::InvalidInput(_) => "INVALID_INPUT",
            ApiError::Rejected { .. } => "REJECTED",
            ApiError::Internal(_) => "INTERNAL",
        }
    }

    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(Arc::new(err.into()))
    }

    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Build the error for a non-success response. The body may be a JSON
    /// object with a `message` field or a short plain-text sentence; it is
    /// kept whatever the status.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = extract_message(body);
        match status {
            404 => Self::NotFound { message },
            401 | 403 => Self::Unauthorized { message },
            _ => Self::Rejected { status, message },
        }
    }

    /// Text the server attached to the failure, when there is one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { message, .. }
            | ApiError::NotFound { message }
            | ApiError::Unauthorized { message } => message.as_deref(),
            ApiError::InvalidInput(msg) => Some(msg),
            _ => None,
        }
    }

    /// The single string a screen shows for this failure: the server's
    /// message when present, otherwise the screen's fallback text.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message()
            .map(str::to_string)
            .unwrap_or_else(|| fallback.to_string())
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(value: anyhow::Error) -> Self {
        Self::Internal(Arc::new(value))
    }
}

fn extract_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.starts_with('{') {
        return serde_json::from_str::<MessageBody>(trimmed)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty());
    }
    if trimmed.starts_with('<') || trimmed.len() > MAX_PLAIN_MESSAGE {
        tracing::debug!(len = trimmed.len(), "discarding non-message error body");
        return None;
    }
    Some(trimmed.to_string())
}
