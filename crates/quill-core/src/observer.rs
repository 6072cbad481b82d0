//! Message-logged notifications.
//!
//! Observers are called synchronously, in registration order, after the
//! writer has emitted a record. A failing observer stops the fan-out and
//! its error is returned to whoever made the logging call.

use std::fmt;
use std::sync::mpsc::Sender;

use crate::error::{LogError, LogResult, ObserverError};
use crate::record::LogRecord;

/// Receives every record a logger dispatches.
pub trait LogObserver: Send {
    fn on_message_logged(&mut self, record: &LogRecord) -> Result<(), ObserverError>;
}

impl<F> LogObserver for F
where
    F: FnMut(&LogRecord) -> Result<(), ObserverError> + Send,
{
    fn on_message_logged(&mut self, record: &LogRecord) -> Result<(), ObserverError> {
        self(record)
    }
}

/// Adapts a closure that cannot fail.
pub(crate) struct InfallibleObserver<F>(pub(crate) F);

impl<F> LogObserver for InfallibleObserver<F>
where
    F: FnMut(&LogRecord) + Send,
{
    fn on_message_logged(&mut self, record: &LogRecord) -> Result<(), ObserverError> {
        (self.0)(record);
        Ok(())
    }
}

/// Forwards a copy of each record into a channel.
///
/// Sending fails once the receiving side has been dropped.
pub struct ChannelObserver {
    sender: Sender<LogRecord>,
}

impl ChannelObserver {
    pub fn new(sender: Sender<LogRecord>) -> Self {
        Self { sender }
    }
}

impl LogObserver for ChannelObserver {
    fn on_message_logged(&mut self, record: &LogRecord) -> Result<(), ObserverError> {
        self.sender.send(record.clone())?;
        Ok(())
    }
}

/// Handle returned by a subscription, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

impl fmt::Display for ObserverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "observer_{}", self.0)
    }
}

/// Ordered list of registered observers.
#[derive(Default)]
pub struct ObserverRegistry {
    next_id: u64,
    observers: Vec<(ObserverId, Box<dyn LogObserver>)>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an observer; it runs after every observer already registered.
    pub fn subscribe(&mut self, observer: Box<dyn LogObserver>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        id
    }

    /// Remove an observer. Returns false if the id was not registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Call every observer in registration order, stopping at the first failure.
    pub fn notify(&mut self, record: &LogRecord) -> LogResult<()> {
        for (_, observer) in self.observers.iter_mut() {
            observer
                .on_message_logged(record)
                .map_err(LogError::Observer)?;
        }
        Ok(())
    }
}

impl fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observers", &self.observers.len())
            .finish()
    }
}
