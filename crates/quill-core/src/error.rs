//! Error types for Quill

use thiserror::Error;

/// Boxed error returned by a failing observer.
pub type ObserverError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Main error type for Quill logging operations
#[derive(Error, Debug)]
pub enum LogError {
    /// The requested logger configuration cannot be built
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A call received an argument it cannot accept
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The writer failed to emit a record
    #[error("Write failed: {0}")]
    Write(#[from] std::io::Error),

    /// A registered observer failed while being notified
    #[error("Observer failed: {0}")]
    Observer(ObserverError),
}

/// Result type alias using LogError
pub type LogResult<T> = Result<T, LogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LogError::InvalidConfiguration("unknown writer kind 'syslog'".to_string());
        assert_eq!(
            format!("{}", err),
            "Invalid configuration: unknown writer kind 'syslog'"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let log_err: LogError = io_err.into();
        assert!(matches!(log_err, LogError::Write(_)));
    }
}
