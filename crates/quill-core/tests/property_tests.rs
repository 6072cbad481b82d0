//! Property-based tests for the logging pipeline
//!
//! Uses proptest to verify the acceptance rule and ordering guarantees.

use std::sync::{Arc, Mutex};

use proptest::prelude::*;
use quill_core::{DiscardWriter, Logger, Severity};

// ============================================================================
// Strategy Generators
// ============================================================================

fn severity_strategy() -> impl Strategy<Value = Severity> {
    prop::sample::select(Severity::ALL.to_vec())
}

fn message_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 ]{0,40}").expect("valid regex")
}

/// Operations that can be performed on a logger
#[derive(Debug, Clone)]
enum LogOp {
    Log(Severity, String),
    SetLevel(Severity),
    SetEnabled(bool),
}

fn log_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<LogOp>> {
    prop::collection::vec(
        prop_oneof![
            6 => (severity_strategy(), message_strategy())
                .prop_map(|(level, message)| LogOp::Log(level, message)),
            1 => severity_strategy().prop_map(LogOp::SetLevel),
            1 => any::<bool>().prop_map(LogOp::SetEnabled),
        ],
        0..max_ops,
    )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Severity ordering matches the declaration order for every pair
    #[test]
    fn severity_order_is_numeric(a in severity_strategy(), b in severity_strategy()) {
        prop_assert_eq!(a < b, a.as_i32() < b.as_i32());
        prop_assert_eq!(a == b, a.as_i32() == b.as_i32());
    }

    /// A record is accepted iff the logger is enabled and level >= minimum
    #[test]
    fn acceptance_rule(
        min in severity_strategy(),
        level in severity_strategy(),
        enabled in any::<bool>(),
        message in message_strategy(),
    ) {
        // Start at Critical so the startup message is filtered out
        let mut logger = Logger::with_storage(DiscardWriter, Severity::Critical, false).unwrap();
        logger.set_level(min).unwrap();
        logger.set_enabled(enabled).unwrap();
        let before = logger.retained().unwrap().len();

        logger.log(level, message.clone(), quill_core::CallSite::unknown()).unwrap();

        let retained = logger.retained().unwrap();
        let accepted = enabled && level >= min;
        prop_assert_eq!(retained.len() - before, usize::from(accepted));
        if accepted {
            prop_assert_eq!(retained.last().unwrap().message(), message.as_str());
        }
    }

    /// Retained order equals call order, and retention, writing and
    /// notification always agree
    #[test]
    fn retention_matches_notifications(ops in log_ops_strategy(40)) {
        let notified = Arc::new(Mutex::new(Vec::new()));
        let mut logger = Logger::with_storage(DiscardWriter, Severity::Trace, true).unwrap();
        let sink = notified.clone();
        logger.on_message_logged(move |record| {
            sink.lock().unwrap().push(record.message().to_string());
        });

        // Model of what should be accepted, in order
        let mut expected = Vec::new();
        let mut enabled = true;
        let mut min = Severity::Trace;

        for op in ops {
            match op {
                LogOp::Log(level, message) => {
                    if enabled && level >= min {
                        expected.push(message.clone());
                    }
                    logger.log(level, message, quill_core::CallSite::unknown()).unwrap();
                }
                LogOp::SetLevel(level) => {
                    min = level;
                    if enabled && Severity::Info >= min {
                        expected.push(format!("Logger changing 'LogLevel' to {}", level));
                    }
                    logger.set_level(level).unwrap();
                }
                LogOp::SetEnabled(value) => {
                    // The message is evaluated while the logger is on in both directions
                    let emitting = if value { true } else { enabled };
                    if emitting && Severity::Info >= min {
                        expected.push(format!("Logger changing 'Enabled' to {}", value));
                    }
                    enabled = value;
                    logger.set_enabled(value).unwrap();
                }
            }
        }

        let retained: Vec<_> = logger.retained().unwrap()[1..]
            .iter()
            .map(|r| r.message().to_string())
            .collect();
        prop_assert_eq!(&retained, &expected);
        prop_assert_eq!(&*notified.lock().unwrap(), &expected);
    }
}
