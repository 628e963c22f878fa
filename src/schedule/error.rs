//! Schedule parsing errors.

use crate::core::Signal;
use thiserror::Error;

/// A single problem found in a per-signal schedule encoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignalError {
    #[error("Unknown signal '{name}'")]
    UnknownSignal { name: String },

    #[error("Signal '{signal}' is given more than once")]
    DuplicateSignal { signal: Signal },

    #[error("Signal '{signal}' has no pattern")]
    MissingSignal { signal: Signal },

    #[error("Signal '{signal}' has '{found}' at cycle {cycle}, expected '0' or '1'")]
    InvalidLevel {
        signal: Signal,
        cycle: usize,
        found: char,
    },

    #[error("Signal '{signal}' covers {found} cycle(s), expected {expected}")]
    LengthMismatch {
        signal: Signal,
        expected: usize,
        found: usize,
    },
}

/// Every problem found while parsing a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Malformed schedule: {}", join(.errors))]
pub struct ScheduleError {
    pub errors: Vec<SignalError>,
}

fn join(errors: &[SignalError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
