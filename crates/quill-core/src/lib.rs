//! Quill Core Library
//!
//! Minimal, embeddable leveled logging with pluggable writers.
//!
//! ## Overview
//!
//! A [`Logger`] accepts a message when it is enabled and the message level
//! is at or above its minimum level. Accepted messages become immutable
//! [`LogRecord`]s carrying the call site and a local timestamp, and are
//! dispatched: written by exactly one [`LogWriter`], then handed to every
//! registered observer. A retaining logger also keeps each dispatched
//! record in memory.
//!
//! ## Quick Start
//!
//! ```ignore
//! use quill_core::{quill_warning, LoggerBuilder, Severity, WriterKind};
//!
//! let mut logger = LoggerBuilder::new()
//!     .of_type(WriterKind::File)
//!     .with_path("service.log")
//!     .with_level(Severity::Info)
//!     .with_storage()
//!     .build()?;
//!
//! logger.on_message_logged(|record| eprintln!("logged: {}", record.message()));
//!
//! logger.log_debug("not written")?;
//! quill_warning!(logger, "queue depth {}", 512)?;
//!
//! assert_eq!(logger.retained().map(|r| r.len()), Some(2)); // startup + warning
//! ```

pub mod builder;
pub mod dispatch;
pub mod error;
pub mod factory;
pub mod layer;
pub mod logger;
mod macros;
pub mod observer;
pub mod record;
pub mod severity;
pub mod shared;
pub mod storage;
pub mod writer;

// Re-exports
pub use builder::LoggerBuilder;
pub use dispatch::{Dispatch, Dispatcher};
pub use error::{LogError, LogResult, ObserverError};
pub use factory::{
    create_console_logger, create_console_logger_with_storage, create_default_logger,
    create_default_logger_with_storage, create_file_logger, create_file_logger_with_storage,
    create_logger_without_output, create_logger_without_output_with_storage,
};
pub use layer::QuillLayer;
pub use logger::Logger;
pub use observer::{ChannelObserver, LogObserver, ObserverId, ObserverRegistry};
pub use record::{CallSite, LogRecord};
pub use severity::Severity;
pub use shared::SharedLogger;
pub use storage::Retaining;
pub use writer::{
    ConsoleWriter, DiscardWriter, FileWriter, LogWriter, WriterKind, DEFAULT_LOG_FILE,
};
