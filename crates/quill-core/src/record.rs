//! Log record types.
//!
//! A [`LogRecord`] is created once per accepted logging call and never
//! changes afterwards. Its timestamp is taken when the record is built.

use std::fmt;

use chrono::{DateTime, Local};

use crate::severity::Severity;

/// Where a logging call came from.
///
/// All fields may be empty; the line defaults to 0. Use the
/// [`call_site!`](crate::call_site) macro to fill it from the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallSite {
    /// Source file of the call
    pub file: String,

    /// Enclosing function or module path
    pub member: String,

    /// Source line of the call
    pub line: u32,
}

impl CallSite {
    /// Create a call site from its parts.
    pub fn new(file: impl Into<String>, member: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            member: member.into(),
            line,
        }
    }

    /// A call site with no caller information.
    pub fn unknown() -> Self {
        Self::default()
    }
}

/// One captured logging event.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    level: Severity,
    message: String,
    site: CallSite,
    timestamp: DateTime<Local>,
}

impl LogRecord {
    /// Create a record stamped with the current local time.
    pub fn new(level: Severity, message: impl Into<String>, site: CallSite) -> Self {
        Self {
            level,
            message: message.into(),
            site,
            timestamp: Local::now(),
        }
    }

    pub fn level(&self) -> Severity {
        self.level
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn call_site(&self) -> &CallSite {
        &self.site
    }

    pub fn caller_file(&self) -> &str {
        &self.site.file
    }

    pub fn caller_member(&self) -> &str {
        &self.site.member
    }

    pub fn caller_line(&self) -> u32 {
        self.site.line
    }

    /// Local time at which the record was built.
    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    /// Timestamp as `2024.01.02-03:04:05:0006` (ten-thousandths of a second).
    pub fn formatted_timestamp(&self) -> String {
        // Leap seconds report nanos >= 1e9; keep the field four digits wide.
        let fraction = (self.timestamp.timestamp_subsec_nanos() / 100_000).min(9_999);
        format!(
            "{}:{:04}",
            self.timestamp.format("%Y.%m.%d-%H:%M:%S"),
            fraction
        )
    }
}

/// Human-readable two-line rendering used by the console and file writers.
impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}]\t[{}]:\t{}\n\t[{} | {} | line: {}]",
            self.formatted_timestamp(),
            self.level,
            self.message,
            self.site.file,
            self.site.member,
            self.site.line
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_record() -> LogRecord {
        let timestamp = Local
            .with_ymd_and_hms(2024, 1, 2, 3, 4, 5)
            .unwrap()
            + chrono::Duration::microseconds(600);
        LogRecord {
            level: Severity::Warning,
            message: "Disk nearly full".to_string(),
            site: CallSite::new("path/to/file", "MethodName", 42),
            timestamp,
        }
    }

    #[test]
    fn test_rendered_line_format() {
        let record = fixed_record();
        assert_eq!(
            record.to_string(),
            "[2024.01.02-03:04:05:0006]\t[Warning]:\tDisk nearly full\n\t[path/to/file | MethodName | line: 42]"
        );
    }

    #[test]
    fn test_defaults_render_empty_site() {
        let record = LogRecord::new(Severity::Info, "hello", CallSite::unknown());
        let rendered = record.to_string();
        assert!(rendered.contains("[Info]:\thello"));
        assert!(rendered.ends_with("\t[ |  | line: 0]"));
    }

    #[test]
    fn test_timestamp_taken_at_construction() {
        let before = Local::now();
        let record = LogRecord::new(Severity::Debug, "x", CallSite::unknown());
        let after = Local::now();
        assert!(record.timestamp() >= before && record.timestamp() <= after);
    }
}
