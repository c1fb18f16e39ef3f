use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShellError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Unknown target command: {0}")]
    UnknownTarget(String),

    #[error("Unparsable time '{0}' (examples: log 13, log 8-21, log 08:00-21:00)")]
    UnparsableTime(String),

    #[error("Dispatch depth limit of {limit} exceeded while expanding '{command}'")]
    DispatchRecursionExceeded { command: String, limit: usize },

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Open error: {}: {reason}", path.display())]
    OpenFailed { path: PathBuf, reason: String },

    #[error("{source}")]
    HandlerExecution {
        command: String,
        #[source]
        source: Box<ShellError>,
    },

    #[error("Directory access denied: {}: {source}", path.display())]
    DirectoryAccessDenied {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Log write failed: {}: {source}", path.display())]
    LogWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl ShellError {
    pub fn to_error_code(&self) -> &'static str {
        match self {
            ShellError::UnknownCommand(_) => "UNKNOWN_COMMAND",
            ShellError::UnknownTarget(_) => "UNKNOWN_TARGET",
            ShellError::UnparsableTime(_) => "UNPARSABLE_TIME",
            ShellError::DispatchRecursionExceeded { .. } => "DISPATCH_RECURSION_EXCEEDED",
            ShellError::FileNotFound(_) => "FILE_NOT_FOUND",
            ShellError::OpenFailed { .. } => "OPEN_FAILED",
            ShellError::HandlerExecution { .. } => "HANDLER_EXECUTION_ERROR",
            ShellError::DirectoryAccessDenied { .. } => "DIRECTORY_ACCESS_DENIED",
            ShellError::LogWriteFailed { .. } => "LOG_WRITE_FAILED",
            ShellError::InvalidInput(_) => "INVALID_INPUT",
            ShellError::IoError(_) => "INTERNAL_ERROR",
        }
    }

    pub fn to_error_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.to_string(),
            code: self.to_error_code().to_string(),
        }
    }

    /// Render the failure of `input` as the single line shown to the user.
    pub fn render(&self, input: &str) -> String {
        match self {
            ShellError::HandlerExecution { source, .. } => {
                format!("Execution error in `{}`: {}", input, source)
            },
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ShellError>;
