use serde_json::Value as JsonValue;
use thiserror::Error;
use tracing::{error, warn};

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid input: {message}")]
    InvalidInput {
        message: String,
        details: Option<JsonValue>,
    },

    #[error("collaborator unavailable: {message}")]
    Unavailable { message: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl AppError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        let message = message.into();
        warn!(target: "app::validation", %message, "invalid input");
        AppError::InvalidInput {
            message,
            details: None,
        }
    }

    pub fn invalid_input_with_details(message: impl Into<String>, details: JsonValue) -> Self {
        let message = message.into();
        warn!(target: "app::validation", %message, details = %details, "invalid input");
        AppError::InvalidInput {
            message,
            details: Some(details),
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        let message = message.into();
        warn!(target: "app::repo", %message, "collaborator unavailable");
        AppError::Unavailable { message }
    }

    pub fn other(message: impl Into<String>) -> Self {
        let message = message.into();
        error!(target: "app::other", %message, "unexpected error");
        AppError::Other(message)
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, AppError::Unavailable { .. })
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, AppError::InvalidInput { .. })
    }
}
