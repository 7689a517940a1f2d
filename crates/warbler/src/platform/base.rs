use thiserror::Error;

/// Failures originating from the hosted platform or its transport layer.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum PlatformError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Authentication rejected: {0}")]
    Auth(String),

    #[error("Platform returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Task {task_id} failed: {message}")]
    TaskFailed { task_id: String, message: String },

    #[error("Unexpected response: {0}")]
    Response(String),
}

pub type PlatformResult<T> = Result<T, PlatformError>;
