// src/errors.rs

use thiserror::Error;

/// Errors raised outside the chat path: startup, terminal setup and the
/// reference backend. Reply resolution never returns one of these to the widget.
#[derive(Debug, Error)]
pub enum ShopchatError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("server error: {0}")]
    Server(String),

    #[error("terminal error: {0}")]
    Terminal(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

pub type ShopchatResult<T> = Result<T, ShopchatError>;

impl ShopchatError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn api_error(msg: impl Into<String>) -> Self {
        Self::Api(msg.into())
    }

    pub fn server_error(msg: impl Into<String>) -> Self {
        Self::Server(msg.into())
    }

    pub fn terminal_error(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }
}
