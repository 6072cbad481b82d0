//! Output sinks for accepted log records.
//!
//! A writer performs the single output side effect of dispatch. Three
//! writers ship with the crate:
//!
//! - [`ConsoleWriter`] prints the rendered record to standard output
//! - [`FileWriter`] appends the rendered record to a file
//! - [`DiscardWriter`] does nothing
//!
//! Anything implementing [`LogWriter`] can be plugged into a logger.

use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{LogError, LogResult};
use crate::record::LogRecord;

/// File name used when a file writer is requested without a path.
pub const DEFAULT_LOG_FILE: &str = "logfile.log";

/// Output sink for one accepted record at a time.
pub trait LogWriter: Send {
    /// Emit the record. I/O failures are returned to the caller unchanged.
    fn write(&mut self, record: &LogRecord) -> io::Result<()>;

    /// Short description used by the logger's startup message.
    fn describe(&self) -> String;
}

impl<W: LogWriter + ?Sized> LogWriter for Box<W> {
    fn write(&mut self, record: &LogRecord) -> io::Result<()> {
        (**self).write(record)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Writes rendered records to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleWriter;

impl ConsoleWriter {
    pub fn new() -> Self {
        Self
    }
}

impl LogWriter for ConsoleWriter {
    fn write(&mut self, record: &LogRecord) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", record)?;
        out.flush()
    }

    fn describe(&self) -> String {
        "LogWriter of type: ConsoleWriter.".to_string()
    }
}

/// Appends rendered records to a text file.
///
/// The configured path is resolved against a base directory (the working
/// directory unless given explicitly). The file is opened in append mode
/// for every record, so nothing is buffered between calls. Missing parent
/// directories are not created.
#[derive(Debug, Clone)]
pub struct FileWriter {
    /// Path as configured, used in the description
    name: PathBuf,

    /// Fully resolved target path
    path: PathBuf,
}

impl FileWriter {
    /// Create a writer for `name`, relative to the current working directory.
    pub fn new(name: impl Into<PathBuf>) -> LogResult<Self> {
        let base = std::env::current_dir()?;
        Self::in_dir(base, name)
    }

    /// Create a writer for `name`, relative to `base`.
    ///
    /// An absolute `name` ignores `base`.
    pub fn in_dir(base: impl AsRef<Path>, name: impl Into<PathBuf>) -> LogResult<Self> {
        let name = name.into();
        if name.as_os_str().is_empty() {
            return Err(LogError::InvalidArgument(
                "file writer requires a non-empty path".to_string(),
            ));
        }
        let path = base.as_ref().join(&name);
        Ok(Self { name, path })
    }

    /// Writer for [`DEFAULT_LOG_FILE`] in the working directory.
    pub fn default_file() -> LogResult<Self> {
        Self::new(DEFAULT_LOG_FILE)
    }

    /// Path the records are appended to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogWriter for FileWriter {
    fn write(&mut self, record: &LogRecord) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", record)
    }

    fn describe(&self) -> String {
        format!(
            "LogWriter of type: FileWriter with path: {}.",
            self.name.display()
        )
    }
}

/// Accepts every record and produces no output.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiscardWriter;

impl DiscardWriter {
    pub fn new() -> Self {
        Self
    }
}

impl LogWriter for DiscardWriter {
    fn write(&mut self, _record: &LogRecord) -> io::Result<()> {
        Ok(())
    }

    fn describe(&self) -> String {
        "LogWriter of type: DiscardWriter.".to_string()
    }
}

/// Writer choice accepted by the construction helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriterKind {
    #[default]
    Console,
    File,
    Discard,
}

impl WriterKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WriterKind::Console => "console",
            WriterKind::File => "file",
            WriterKind::Discard => "discard",
        }
    }
}

impl fmt::Display for WriterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WriterKind {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "console" | "stdout" => Ok(WriterKind::Console),
            "file" | "textfile" => Ok(WriterKind::File),
            "discard" | "null" | "none" => Ok(WriterKind::Discard),
            _ => Err(LogError::InvalidConfiguration(format!(
                "unknown writer kind '{}'",
                s
            ))),
        }
    }
}
