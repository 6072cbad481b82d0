//! The core logger: filter, stamp, dispatch.
//!
//! ```text
//! caller ─▶ log_warning / log(level, ..)
//!             │
//!             ├─ enabled && level >= min level ?  no ─▶ return Ok(())
//!             │
//!             ├─ LogRecord::new (timestamp taken here)
//!             │
//!             └─ Dispatch::dispatch ─▶ [retain] ─▶ writer.write ─▶ observers
//! ```
//!
//! A logger is a plain single-owner value. Wrap it in
//! [`SharedLogger`](crate::shared::SharedLogger) to log from several threads.

use crate::dispatch::{Dispatch, Dispatcher};
use crate::error::LogResult;
use crate::observer::{InfallibleObserver, LogObserver, ObserverId};
use crate::record::{CallSite, LogRecord};
use crate::severity::Severity;
use crate::storage::Retaining;
use crate::writer::LogWriter;

/// Leveled logger writing through a single dispatcher.
pub struct Logger {
    enabled: bool,
    level: Severity,
    dispatcher: Box<dyn Dispatch>,
}

impl Logger {
    /// Enabled logger accepting every level.
    pub fn new(writer: impl LogWriter + 'static) -> LogResult<Self> {
        Self::with_settings(writer, Severity::Trace, true)
    }

    /// Logger with an explicit minimum level and enabled flag.
    pub fn with_settings(
        writer: impl LogWriter + 'static,
        level: Severity,
        enabled: bool,
    ) -> LogResult<Self> {
        Self::from_dispatcher(Dispatcher::new(writer), level, enabled)
    }

    /// Logger that also keeps every dispatched record in memory.
    pub fn with_storage(
        writer: impl LogWriter + 'static,
        level: Severity,
        enabled: bool,
    ) -> LogResult<Self> {
        Self::from_dispatcher(Retaining::new(Dispatcher::new(writer)), level, enabled)
    }

    /// Logger over any dispatcher.
    ///
    /// Emits an Info message naming the writer. It goes through the normal
    /// filter, so a disabled logger or one above Info stays silent.
    pub fn from_dispatcher(
        dispatcher: impl Dispatch + 'static,
        level: Severity,
        enabled: bool,
    ) -> LogResult<Self> {
        let mut logger = Self {
            enabled,
            level,
            dispatcher: Box::new(dispatcher),
        };
        let message = format!("Logger initialized. {}", logger.dispatcher.describe());
        logger.log(Severity::Info, message, crate::call_site!())?;
        Ok(logger)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Minimum accepted level.
    pub fn level(&self) -> Severity {
        self.level
    }

    /// Turn the logger on or off, logging the transition at Info.
    ///
    /// Enabling applies the flag before the transition message; disabling
    /// logs the message first, so it is still emitted. If that message fails
    /// to write when disabling, the logger stays enabled.
    pub fn set_enabled(&mut self, enabled: bool) -> LogResult<()> {
        let message = format!("Logger changing 'Enabled' to {}", enabled);
        if enabled {
            self.enabled = true;
            self.log(Severity::Info, message, crate::call_site!())
        } else {
            self.log(Severity::Info, message, crate::call_site!())?;
            self.enabled = false;
            Ok(())
        }
    }

    /// Change the minimum level, then log the transition under the new level.
    pub fn set_level(&mut self, level: Severity) -> LogResult<()> {
        self.level = level;
        let message = format!("Logger changing 'LogLevel' to {}", level);
        self.log(Severity::Info, message, crate::call_site!())
    }

    /// Whether a record at `level` would currently be accepted.
    pub fn would_log(&self, level: Severity) -> bool {
        self.enabled && level >= self.level
    }

    /// Log at `level` with explicit caller information.
    pub fn log(
        &mut self,
        level: Severity,
        message: impl Into<String>,
        site: CallSite,
    ) -> LogResult<()> {
        if !self.would_log(level) {
            return Ok(());
        }
        let record = LogRecord::new(level, message, site);
        self.dispatcher.dispatch(record)
    }

    /// Log at a raw severity value (0 = Trace .. 5 = Critical).
    pub fn log_value(
        &mut self,
        level: i32,
        message: impl Into<String>,
        site: CallSite,
    ) -> LogResult<()> {
        let level = Severity::try_from(level)?;
        self.log(level, message, site)
    }

    /// Log at Trace without caller information. Use
    /// [`quill_trace!`](crate::quill_trace) to record the call site, or
    /// [`log`](Self::log) with an explicit [`CallSite`].
    pub fn log_trace(&mut self, message: impl Into<String>) -> LogResult<()> {
        self.log(Severity::Trace, message, CallSite::unknown())
    }

    /// Log at Debug without caller information; see [`quill_debug!`](crate::quill_debug).
    pub fn log_debug(&mut self, message: impl Into<String>) -> LogResult<()> {
        self.log(Severity::Debug, message, CallSite::unknown())
    }

    /// Log at Info without caller information; see [`quill_info!`](crate::quill_info).
    pub fn log_info(&mut self, message: impl Into<String>) -> LogResult<()> {
        self.log(Severity::Info, message, CallSite::unknown())
    }

    /// Log at Warning without caller information; see [`quill_warning!`](crate::quill_warning).
    pub fn log_warning(&mut self, message: impl Into<String>) -> LogResult<()> {
        self.log(Severity::Warning, message, CallSite::unknown())
    }

    /// Log at Error without caller information; see [`quill_error!`](crate::quill_error).
    pub fn log_error(&mut self, message: impl Into<String>) -> LogResult<()> {
        self.log(Severity::Error, message, CallSite::unknown())
    }

    /// Log at Critical without caller information; see [`quill_critical!`](crate::quill_critical).
    pub fn log_critical(&mut self, message: impl Into<String>) -> LogResult<()> {
        self.log(Severity::Critical, message, CallSite::unknown())
    }

    /// Register an observer called after every successful write.
    pub fn subscribe(&mut self, observer: impl LogObserver + 'static) -> ObserverId {
        self.dispatcher.observers().subscribe(Box::new(observer))
    }

    /// Register a closure that cannot fail.
    pub fn on_message_logged<F>(&mut self, f: F) -> ObserverId
    where
        F: FnMut(&LogRecord) + Send + 'static,
    {
        self.subscribe(InfallibleObserver(f))
    }

    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.dispatcher.observers().unsubscribe(id)
    }

    /// Description of the writer this logger dispatches to.
    pub fn describe_writer(&self) -> String {
        self.dispatcher.describe()
    }

    /// Retained records, or `None` when the logger does not retain.
    pub fn retained(&self) -> Option<&[LogRecord]> {
        self.dispatcher.retained()
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("enabled", &self.enabled)
            .field("level", &self.level)
            .field("writer", &self.dispatcher.describe())
            .field("retaining", &self.dispatcher.retained().is_some())
            .finish()
    }
}
