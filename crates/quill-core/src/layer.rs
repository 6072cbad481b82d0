//! Custom tracing Layer that forwards events into a quill logger.
//!
//! Lets code instrumented with the `tracing` crate write through the same
//! filter, writer, observers and storage as direct logging calls.
//!
//! ```ignore
//! use quill_core::{LoggerBuilder, QuillLayer, SharedLogger};
//! use tracing_subscriber::prelude::*;
//!
//! let shared = SharedLogger::new(LoggerBuilder::new().build()?);
//! let subscriber = tracing_subscriber::registry().with(QuillLayer::new(shared.clone()));
//! tracing::subscriber::set_global_default(subscriber)?;
//! ```

use std::fmt::Write as FmtWrite;

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;

use crate::record::CallSite;
use crate::severity::Severity;
use crate::shared::SharedLogger;

/// Map a tracing level onto the matching severity.
pub fn severity_for(level: &Level) -> Severity {
    if *level == Level::ERROR {
        Severity::Error
    } else if *level == Level::WARN {
        Severity::Warning
    } else if *level == Level::INFO {
        Severity::Info
    } else if *level == Level::DEBUG {
        Severity::Debug
    } else {
        Severity::Trace
    }
}

/// A tracing Layer that logs each event through a [`SharedLogger`].
///
/// The logger's lock is held while its observers run. An observer that
/// emits a `tracing` event while this layer is installed deadlocks, since
/// the layer takes the same non-reentrant lock.
pub struct QuillLayer {
    logger: SharedLogger,
    include_fields: bool,
}

impl QuillLayer {
    pub fn new(logger: SharedLogger) -> Self {
        Self {
            logger,
            include_fields: true,
        }
    }

    /// Log only the event message, dropping its other fields.
    pub fn without_fields(mut self) -> Self {
        self.include_fields = false;
        self
    }

    pub fn logger(&self) -> &SharedLogger {
        &self.logger
    }
}

impl<S> Layer<S> for QuillLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let level = severity_for(metadata.level());

        // Skip formatting entirely for records the logger would drop
        if !self.logger.lock().would_log(level) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let mut message = visitor.message.unwrap_or_default();
        if self.include_fields && !visitor.fields.is_empty() {
            if !message.is_empty() {
                message.push(' ');
            }
            message.push_str(&visitor.fields.join(" "));
        }

        let site = CallSite::new(
            metadata.file().unwrap_or_default(),
            metadata.module_path().unwrap_or_else(|| metadata.target()),
            metadata.line().unwrap_or_default(),
        );

        // tracing gives the layer no way to return the failure
        if let Err(e) = self.logger.log(level, message, site) {
            eprintln!("Warning: quill layer failed to log event: {}", e);
        }
    }
}

/// Visitor that collects the message and `key=value` pairs of an event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
    fields: Vec<String>,
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let mut buf = String::new();
        let _ = write!(&mut buf, "{:?}", value);

        if field.name() == "message" {
            self.message = Some(buf);
        } else {
            self.fields.push(format!("{}={}", field.name(), buf));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.fields.push(format!("{}={}", field.name(), value));
        }
    }
}
