//! Severity levels for log records.
//!
//! Levels are totally ordered by their numeric value:
//! `Trace < Debug < Info < Warning < Error < Critical`.

use std::fmt;
use std::str::FromStr;

use crate::error::LogError;

/// Ordered importance of a log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Severity {
    /// Very fine-grained diagnostic events
    #[default]
    Trace = 0,
    /// Diagnostic detail useful while debugging
    Debug = 1,
    /// Normal operational messages
    Info = 2,
    /// Something unexpected that does not stop the program
    Warning = 3,
    /// An operation failed
    Error = 4,
    /// The program cannot reasonably continue
    Critical = 5,
}

impl Severity {
    /// Every level, lowest first.
    pub const ALL: [Severity; 6] = [
        Severity::Trace,
        Severity::Debug,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Critical,
    ];

    /// Name as it appears in rendered lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "Trace",
            Severity::Debug => "Debug",
            Severity::Info => "Info",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
            Severity::Critical => "Critical",
        }
    }

    /// Numeric value used for ordering.
    pub fn as_i32(&self) -> i32 {
        *self as i32
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<i32> for Severity {
    type Error = LogError;

    fn try_from(value: i32) -> Result<Self, LogError> {
        match value {
            0 => Ok(Severity::Trace),
            1 => Ok(Severity::Debug),
            2 => Ok(Severity::Info),
            3 => Ok(Severity::Warning),
            4 => Ok(Severity::Error),
            5 => Ok(Severity::Critical),
            _ => Err(LogError::InvalidArgument(format!(
                "severity value {} is out of range",
                value
            ))),
        }
    }
}

impl FromStr for Severity {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(Severity::Trace),
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "warning" | "warn" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            "critical" => Ok(Severity::Critical),
            _ => Err(LogError::InvalidArgument(format!(
                "unknown severity '{}'",
                s
            ))),
        }
    }
}
