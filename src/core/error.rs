//! Error types for the logger factory

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Notes collected while applying a level string.
    ///
    /// The recognized settings have already been applied when this is returned.
    #[error("errors parsing config string: {}", .notes.join(", "))]
    LevelString { notes: Vec<String> },

    /// A level name that does not match any known abbreviation
    #[error("Invalid log level: '{0}'")]
    InvalidLevel(String),

    /// Encoder error with format type
    #[error("Encoder error ({format_type}): {message}")]
    EncoderError {
        format_type: String,
        message: String,
    },

    /// Writer error (generic)
    #[error("Writer error: {0}")]
    WriterError(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Wrap the notes produced by a level string
    pub fn level_string(notes: Vec<String>) -> Self {
        LoggerError::LevelString { notes }
    }

    /// Create an encoder error
    pub fn formatter(format_type: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::EncoderError {
            format_type: format_type.into(),
            message: message.into(),
        }
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::WriterError(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }

    /// Notes carried by a level-string error, empty for every other variant
    pub fn notes(&self) -> &[String] {
        match self {
            LoggerError::LevelString { notes } => notes,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::config("Config", "bad encoding");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = LoggerError::level_string(vec!["WRN is deprecated, use INF".into()]);
        assert!(matches!(err, LoggerError::LevelString { .. }));
        assert_eq!(err.notes().len(), 1);
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::level_string(vec![
            "WRN is deprecated, use INF".to_string(),
            "bogus not recognized level, defaulting to INF".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "errors parsing config string: WRN is deprecated, use INF, \
             bogus not recognized level, defaulting to INF"
        );

        let err = LoggerError::formatter("json", "Invalid field type");
        assert_eq!(err.to_string(), "Encoder error (json): Invalid field type");

        let err = LoggerError::InvalidLevel("loud".into());
        assert_eq!(err.to_string(), "Invalid log level: 'loud'");
    }

    #[test]
    fn test_io_operation_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = LoggerError::io_operation("opening log file", "cannot open", io_err);

        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("opening log file"));
        assert!(err.notes().is_empty());
    }
}
