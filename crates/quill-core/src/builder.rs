//! Builder for configuring a logger from named options.

use std::fmt;
use std::path::PathBuf;

use crate::dispatch::{Dispatch, Dispatcher};
use crate::error::{LogError, LogResult};
use crate::logger::Logger;
use crate::observer::LogObserver;
use crate::severity::Severity;
use crate::storage::Retaining;
use crate::writer::{
    ConsoleWriter, DiscardWriter, FileWriter, LogWriter, WriterKind, DEFAULT_LOG_FILE,
};

/// Builder for creating a [`Logger`].
///
/// Defaults: console writer, level Trace, enabled, no storage, no observers.
pub struct LoggerBuilder {
    kind: WriterKind,
    path: Option<PathBuf>,
    base_dir: Option<PathBuf>,
    level: Severity,
    enabled: bool,
    storage: bool,
    observers: Vec<Box<dyn LogObserver>>,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self {
            kind: WriterKind::Console,
            path: None,
            base_dir: None,
            level: Severity::Trace,
            enabled: true,
            storage: false,
            observers: Vec::new(),
        }
    }
}

impl fmt::Debug for LoggerBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerBuilder")
            .field("kind", &self.kind)
            .field("path", &self.path)
            .field("base_dir", &self.base_dir)
            .field("level", &self.level)
            .field("enabled", &self.enabled)
            .field("storage", &self.storage)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the writer.
    pub fn of_type(mut self, kind: WriterKind) -> Self {
        self.kind = kind;
        self
    }

    /// Path for the file writer. An empty path fails at [`build`](Self::build).
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Use [`DEFAULT_LOG_FILE`] for the file writer.
    pub fn with_default_path(self) -> Self {
        self.with_path(DEFAULT_LOG_FILE)
    }

    /// Directory the file path is resolved against (default: working directory).
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    pub fn with_level(mut self, level: Severity) -> Self {
        self.level = level;
        self
    }

    pub fn enabled(mut self) -> Self {
        self.enabled = true;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn with_storage(mut self) -> Self {
        self.storage = true;
        self
    }

    pub fn without_storage(mut self) -> Self {
        self.storage = false;
        self
    }

    /// Register an observer before the logger exists, so it also sees the
    /// startup message.
    pub fn with_observer(mut self, observer: impl LogObserver + 'static) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    /// Build the writer and logger.
    ///
    /// Fails with `InvalidConfiguration` for a discard writer with storage
    /// and `InvalidArgument` for an empty file path.
    pub fn build(self) -> LogResult<Logger> {
        tracing::debug!(
            writer = %self.kind,
            min_level = %self.level,
            enabled = self.enabled,
            storage = self.storage,
            observers = self.observers.len(),
            "Building logger"
        );

        let writer: Box<dyn LogWriter> = match self.kind {
            WriterKind::Console => Box::new(ConsoleWriter::new()),
            WriterKind::File => {
                let name = self.path.unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));
                let writer = match self.base_dir {
                    Some(base) => FileWriter::in_dir(base, name)?,
                    None => FileWriter::new(name)?,
                };
                Box::new(writer)
            }
            WriterKind::Discard => {
                if self.storage {
                    return Err(LogError::InvalidConfiguration(
                        "discard writer cannot be combined with storage".to_string(),
                    ));
                }
                Box::new(DiscardWriter::new())
            }
        };

        let mut dispatcher = Dispatcher::from_boxed(writer);
        for observer in self.observers {
            dispatcher.observers().subscribe(observer);
        }

        if self.storage {
            Logger::from_dispatcher(Retaining::new(dispatcher), self.level, self.enabled)
        } else {
            Logger::from_dispatcher(dispatcher, self.level, self.enabled)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::InfallibleObserver;
    use crate::record::LogRecord;
    use std::fs;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let builder = LoggerBuilder::new();
        assert_eq!(builder.kind, WriterKind::Console);
        assert_eq!(builder.level, Severity::Trace);
        assert!(builder.enabled);
        assert!(!builder.storage);
    }

    #[test]
    fn test_build_file_logger_with_storage() {
        let temp = TempDir::new().unwrap();
        let mut logger = LoggerBuilder::new()
            .of_type(WriterKind::File)
            .with_path("app.log")
            .with_base_dir(temp.path())
            .with_level(Severity::Warning)
            .with_storage()
            .build()
            .unwrap();

        logger.log_info("dropped").unwrap();
        logger.log_error("kept").unwrap();

        assert_eq!(logger.level(), Severity::Warning);
        assert_eq!(logger.retained().unwrap().len(), 1);
        let content = fs::read_to_string(temp.path().join("app.log")).unwrap();
        assert!(content.contains("[Error]:\tkept"));
        assert!(!content.contains("dropped"));
    }

    #[test]
    fn test_file_logger_default_path() {
        let temp = TempDir::new().unwrap();
        let logger = LoggerBuilder::new()
            .of_type(WriterKind::File)
            .with_base_dir(temp.path())
            .build()
            .unwrap();

        assert_eq!(
            logger.describe_writer(),
            "LogWriter of type: FileWriter with path: logfile.log."
        );
        // Startup message lands in the default file
        assert!(temp.path().join(DEFAULT_LOG_FILE).exists());
    }

    #[test]
    fn test_empty_path_is_invalid_argument() {
        let result = LoggerBuilder::new()
            .of_type(WriterKind::File)
            .with_path("")
            .build();
        assert!(matches!(result, Err(LogError::InvalidArgument(_))));
    }

    #[test]
    fn test_discard_with_storage_is_rejected() {
        let result = LoggerBuilder::new()
            .of_type(WriterKind::Discard)
            .with_storage()
            .build();
        assert!(matches!(result, Err(LogError::InvalidConfiguration(_))));

        let logger = LoggerBuilder::new()
            .of_type(WriterKind::Discard)
            .disabled()
            .build()
            .unwrap();
        assert!(!logger.is_enabled());
        assert!(logger.retained().is_none());
    }

    #[test]
    fn test_with_default_path_uses_default_file() {
        let temp = TempDir::new().unwrap();
        let mut logger = LoggerBuilder::new()
            .of_type(WriterKind::File)
            .with_path("other.log")
            .with_default_path()
            .with_base_dir(temp.path())
            .with_level(Severity::Error)
            .build()
            .unwrap();
        logger.log_critical("to default").unwrap();

        let content = fs::read_to_string(temp.path().join(DEFAULT_LOG_FILE)).unwrap();
        assert!(content.contains("[Critical]:\tto default"));
        assert!(!temp.path().join("other.log").exists());
    }

    #[test]
    fn test_observer_sees_startup_message() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let mut logger = LoggerBuilder::new()
            .of_type(WriterKind::Console)
            .with_level(Severity::Info)
            .with_storage()
            .with_observer(InfallibleObserver(move |record: &LogRecord| {
                sink.lock().unwrap().push(record.message().to_string());
            }))
            .build()
            .unwrap();
        logger.log_warning("after start").unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert!(seen[0].starts_with("Logger initialized."));
        assert_eq!(seen[1], "after start");
        assert_eq!(logger.retained().unwrap().len(), seen.len());
    }
}
