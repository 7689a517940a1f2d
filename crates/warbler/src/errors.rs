use thiserror::Error;

use crate::platform::base::PlatformError;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("Tool execution failed: {0}")]
    ExecutionError(String),

    /// Failures from the platform or its transport pass through unmodified
    #[error(transparent)]
    Platform(#[from] PlatformError),
}

pub type ToolResult<T> = Result<T, ToolError>;
