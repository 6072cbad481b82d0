//! Shortcuts for the common logger configurations.
//!
//! Every logger made here starts enabled at level Trace.

use std::path::PathBuf;

use crate::builder::LoggerBuilder;
use crate::error::LogResult;
use crate::logger::Logger;
use crate::writer::WriterKind;

/// Logger of the given kind; a file logger uses the default file name.
pub fn create_default_logger(kind: WriterKind) -> LogResult<Logger> {
    LoggerBuilder::new().of_type(kind).build()
}

/// File logger appending to `path` (relative to the working directory).
pub fn create_file_logger(path: impl Into<PathBuf>) -> LogResult<Logger> {
    LoggerBuilder::new()
        .of_type(WriterKind::File)
        .with_path(path)
        .build()
}

pub fn create_console_logger() -> LogResult<Logger> {
    create_default_logger(WriterKind::Console)
}

/// Logger that filters and notifies but produces no output.
pub fn create_logger_without_output() -> LogResult<Logger> {
    create_default_logger(WriterKind::Discard)
}

/// Retaining logger of the given kind. Discard is rejected.
pub fn create_default_logger_with_storage(kind: WriterKind) -> LogResult<Logger> {
    LoggerBuilder::new().of_type(kind).with_storage().build()
}

pub fn create_file_logger_with_storage(path: impl Into<PathBuf>) -> LogResult<Logger> {
    LoggerBuilder::new()
        .of_type(WriterKind::File)
        .with_path(path)
        .with_storage()
        .build()
}

pub fn create_console_logger_with_storage() -> LogResult<Logger> {
    create_default_logger_with_storage(WriterKind::Console)
}

/// Always fails: storage cannot be combined with the discard writer.
pub fn create_logger_without_output_with_storage() -> LogResult<Logger> {
    create_default_logger_with_storage(WriterKind::Discard)
}
