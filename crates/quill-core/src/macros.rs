//! Call-site capturing macros.
//!
//! ```ignore
//! use quill_core::{quill_warning, LoggerBuilder};
//!
//! let mut logger = LoggerBuilder::new().build()?;
//! quill_warning!(logger, "disk {} is {}% full", "/var", 93)?;
//! ```

/// Build a [`CallSite`](crate::CallSite) for the place the macro is expanded.
///
/// The member is the enclosing module path.
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite::new(file!(), module_path!(), line!())
    };
}

/// Log a formatted message at `level`, recording the call site.
///
/// Works with anything that has a `log(level, message, site)` method.
#[macro_export]
macro_rules! log_at {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+), $crate::call_site!())
    };
}

#[macro_export]
macro_rules! quill_trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::Severity::Trace, $($arg)+)
    };
}

#[macro_export]
macro_rules! quill_debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::Severity::Debug, $($arg)+)
    };
}

#[macro_export]
macro_rules! quill_info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::Severity::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! quill_warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::Severity::Warning, $($arg)+)
    };
}

#[macro_export]
macro_rules! quill_error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::Severity::Error, $($arg)+)
    };
}

#[macro_export]
macro_rules! quill_critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::Severity::Critical, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Logger, Severity};
    use crate::writer::DiscardWriter;

    #[test]
    fn test_log_at_records_call_site() {
        let mut logger = Logger::with_storage(DiscardWriter, Severity::Warning, true).unwrap();
        let line = line!() + 1;
        quill_warning!(logger, "disk {} is {}% full", "/var", 93).unwrap();
        quill_info!(logger, "filtered").unwrap();

        let retained = logger.retained().unwrap();
        assert_eq!(retained.len(), 1);
        let record = &retained[0];
        assert_eq!(record.message(), "disk /var is 93% full");
        assert_eq!(record.level(), Severity::Warning);
        assert!(record.caller_file().ends_with("macros.rs"));
        assert_eq!(record.caller_member(), module_path!());
        assert_eq!(record.caller_line(), line);
    }
}
