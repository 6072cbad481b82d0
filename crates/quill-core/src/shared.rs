//! Thread-safe logger handle.
//!
//! A single mutex guards the whole filter-dispatch-retain sequence, so
//! records from concurrent callers are written, notified and retained in
//! one consistent order.

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::error::LogResult;
use crate::logger::Logger;
use crate::observer::{LogObserver, ObserverId};
use crate::record::{CallSite, LogRecord};
use crate::severity::Severity;

/// Cloneable handle to a logger shared between threads.
///
/// Observers run while the lock is held; they must not log through the
/// same handle. `parking_lot::Mutex` is not reentrant, so doing so deadlocks.
#[derive(Clone, Debug)]
pub struct SharedLogger {
    inner: Arc<Mutex<Logger>>,
}

impl SharedLogger {
    pub fn new(logger: Logger) -> Self {
        Self {
            inner: Arc::new(Mutex::new(logger)),
        }
    }

    /// Lock the logger for a sequence of calls.
    pub fn lock(&self) -> MutexGuard<'_, Logger> {
        self.inner.lock()
    }

    /// Run `f` with exclusive access to the logger.
    pub fn with<R>(&self, f: impl FnOnce(&mut Logger) -> R) -> R {
        let mut logger = self.inner.lock();
        f(&mut logger)
    }

    pub fn log(
        &self,
        level: Severity,
        message: impl Into<String>,
        site: CallSite,
    ) -> LogResult<()> {
        self.inner.lock().log(level, message, site)
    }

    pub fn log_trace(&self, message: impl Into<String>) -> LogResult<()> {
        self.inner.lock().log_trace(message)
    }

    pub fn log_debug(&self, message: impl Into<String>) -> LogResult<()> {
        self.inner.lock().log_debug(message)
    }

    pub fn log_info(&self, message: impl Into<String>) -> LogResult<()> {
        self.inner.lock().log_info(message)
    }

    pub fn log_warning(&self, message: impl Into<String>) -> LogResult<()> {
        self.inner.lock().log_warning(message)
    }

    pub fn log_error(&self, message: impl Into<String>) -> LogResult<()> {
        self.inner.lock().log_error(message)
    }

    pub fn log_critical(&self, message: impl Into<String>) -> LogResult<()> {
        self.inner.lock().log_critical(message)
    }

    pub fn is_enabled(&self) -> bool {
        self.inner.lock().is_enabled()
    }

    pub fn set_enabled(&self, enabled: bool) -> LogResult<()> {
        self.inner.lock().set_enabled(enabled)
    }

    pub fn level(&self) -> Severity {
        self.inner.lock().level()
    }

    pub fn set_level(&self, level: Severity) -> LogResult<()> {
        self.inner.lock().set_level(level)
    }

    pub fn subscribe(&self, observer: impl LogObserver + 'static) -> ObserverId {
        self.inner.lock().subscribe(observer)
    }

    pub fn unsubscribe(&self, id: ObserverId) -> bool {
        self.inner.lock().unsubscribe(id)
    }

    /// Copy of the retained records, or `None` when the logger does not retain.
    pub fn retained(&self) -> Option<Vec<LogRecord>> {
        self.inner.lock().retained().map(|records| records.to_vec())
    }
}

impl From<Logger> for SharedLogger {
    fn from(logger: Logger) -> Self {
        Self::new(logger)
    }
}
