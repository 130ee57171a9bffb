//! Application error types.

use crate::router::IgnoredMessage;
use thiserror::Error;

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] anyhow::Error),

    #[error("Discord error: {0}")]
    Discord(#[from] serenity::Error),

    #[error("GitHub error: {0}")]
    Github(#[from] github_client::GithubError),

    #[error("Message ignored: {0}")]
    Ignored(#[from] IgnoredMessage),
}

/// Result type alias for application errors.
pub type AppResult<T> = Result<T, AppError>;
