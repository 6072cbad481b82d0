//! In-memory retention of dispatched records.

use crate::dispatch::{Dispatch, Dispatcher};
use crate::error::{LogError, LogResult};
use crate::observer::ObserverRegistry;
use crate::record::LogRecord;

/// Wraps a dispatcher and keeps every record it dispatches.
///
/// The record is appended before the inner dispatch runs. If the inner
/// writer fails, the record is removed again, so the retained sequence
/// only ever holds records that were written. An observer failure does
/// not remove it: the write already happened.
#[derive(Debug)]
pub struct Retaining<D = Dispatcher> {
    inner: D,
    messages: Vec<LogRecord>,
}

impl<D: Dispatch> Retaining<D> {
    pub fn new(inner: D) -> Self {
        Self {
            inner,
            messages: Vec::new(),
        }
    }

    /// Retained records in dispatch order.
    pub fn messages(&self) -> &[LogRecord] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn inner(&self) -> &D {
        &self.inner
    }
}

impl<D: Dispatch> Dispatch for Retaining<D> {
    fn dispatch(&mut self, record: LogRecord) -> LogResult<()> {
        self.messages.push(record.clone());
        match self.inner.dispatch(record) {
            Err(LogError::Write(e)) => {
                self.messages.pop();
                Err(LogError::Write(e))
            }
            other => other,
        }
    }

    fn observers(&mut self) -> &mut ObserverRegistry {
        self.inner.observers()
    }

    fn describe(&self) -> String {
        self.inner.describe()
    }

    fn retained(&self) -> Option<&[LogRecord]> {
        Some(&self.messages)
    }
}
