use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for processing-errors operations
pub type Result<T> = std::result::Result<T, ProcessingErrorsError>;

/// Errors raised while loading records or report configuration.
///
/// Grouping itself never fails; these only come from the I/O boundary.
#[derive(Debug, Error)]
pub enum ProcessingErrorsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("JSON parse error on line {line}: {source}")]
    JsonLine {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("{0}: {1}")]
    WithContext(String, Box<ProcessingErrorsError>),
}

impl ProcessingErrorsError {
    /// Create a new invalid configuration error
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        Self::WithContext(context.into(), Box::new(self))
    }

    /// Get a user-friendly message for command line display
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Io(e) => format!("File operation failed: {e}"),
            Self::Json(e) => format!("Input is not valid processing error JSON: {e}"),
            Self::JsonLine { line, source } => {
                format!("Input line {line} is not a valid processing error: {source}")
            }
            Self::ConfigParse(e) => format!("Failed to parse configuration: {e}"),
            Self::ConfigNotFound { path } => format!(
                "Configuration file not found: {} (run `monitor-errors init` to create one)",
                path.display()
            ),
            Self::InvalidConfig { message } => format!("Invalid configuration: {message}"),
            Self::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
        }
    }
}
