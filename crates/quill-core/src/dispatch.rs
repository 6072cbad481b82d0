//! Dispatch of accepted records.
//!
//! Dispatch is the write-then-notify sequence that runs once a record has
//! passed the logger's filter. [`Dispatcher`] is the base implementation;
//! decorators such as [`Retaining`](crate::storage::Retaining) wrap any
//! [`Dispatch`] and add behavior around it.

use crate::error::LogResult;
use crate::observer::ObserverRegistry;
use crate::record::LogRecord;
use crate::writer::LogWriter;

/// The extension point between filtering and output.
pub trait Dispatch: Send {
    /// Emit one accepted record.
    fn dispatch(&mut self, record: LogRecord) -> LogResult<()>;

    /// Observers notified after each successful write.
    fn observers(&mut self) -> &mut ObserverRegistry;

    /// Description of the underlying writer.
    fn describe(&self) -> String;

    /// Records kept by a retaining dispatcher, oldest first.
    fn retained(&self) -> Option<&[LogRecord]> {
        None
    }
}

impl<D: Dispatch + ?Sized> Dispatch for Box<D> {
    fn dispatch(&mut self, record: LogRecord) -> LogResult<()> {
        (**self).dispatch(record)
    }

    fn observers(&mut self) -> &mut ObserverRegistry {
        (**self).observers()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }

    fn retained(&self) -> Option<&[LogRecord]> {
        (**self).retained()
    }
}

/// Writes a record, then notifies observers.
pub struct Dispatcher {
    writer: Box<dyn LogWriter>,
    observers: ObserverRegistry,
}

impl Dispatcher {
    pub fn new(writer: impl LogWriter + 'static) -> Self {
        Self::from_boxed(Box::new(writer))
    }

    pub fn from_boxed(writer: Box<dyn LogWriter>) -> Self {
        Self {
            writer,
            observers: ObserverRegistry::new(),
        }
    }
}

impl Dispatch for Dispatcher {
    fn dispatch(&mut self, record: LogRecord) -> LogResult<()> {
        // A failed write returns before any observer sees the record
        self.writer.write(&record)?;
        self.observers.notify(&record)
    }

    fn observers(&mut self) -> &mut ObserverRegistry {
        &mut self.observers
    }

    fn describe(&self) -> String {
        self.writer.describe()
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("writer", &self.writer.describe())
            .field("observers", &self.observers)
            .finish()
    }
}
