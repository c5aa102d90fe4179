//! CLI-specific error types and exit code mapping

use logtally_core::error::LogtallyError;
use logtally_log_pipeline::LogPipelineError;

/// CLI-specific error type.
///
/// Each variant carries enough context for a user-friendly message.
/// The `exit_code()` method maps errors to standard Unix exit codes.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration loading or validation failure.
    #[error("configuration error: {0}")]
    Config(String),

    /// A subcommand-specific operation failed.
    #[error("{0}")]
    Command(String),

    /// An input log file does not exist or is not a regular file.
    #[error("{0}")]
    Source(String),

    /// JSON serialisation failed during output rendering.
    #[error("json output error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    /// IO error (file read, stdout write, etc.).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map the error to a process exit code.
    ///
    /// | Code | Meaning                         |
    /// |------|---------------------------------|
    /// | 0    | Success                         |
    /// | 1    | General / command error         |
    /// | 2    | Configuration error             |
    /// | 3    | Input file missing or unusable  |
    /// | 10   | IO error                        |
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => 2,
            Self::Source(_) => 3,
            Self::Io(_) => 10,
            Self::JsonSerialize(_) | Self::Command(_) => 1,
        }
    }
}

impl From<LogtallyError> for CliError {
    fn from(e: LogtallyError) -> Self {
        match e {
            LogtallyError::Config(inner) => Self::Config(inner.to_string()),
            LogtallyError::Source(inner) => Self::Source(inner.to_string()),
            LogtallyError::Io(inner) => Self::Io(inner),
            other @ (LogtallyError::Report(_) | LogtallyError::Pipeline(_)) => {
                Self::Command(other.to_string())
            }
        }
    }
}

impl From<LogPipelineError> for CliError {
    fn from(e: LogPipelineError) -> Self {
        LogtallyError::from(e).into()
    }
}
