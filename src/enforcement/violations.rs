//! Violation errors and handling policies.

use crate::core::{DoorState, Signal};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ways an input frame can break the controller's input assumptions
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FrameViolation {
    #[error("Driver lines asserted together: {}", names(.asserted))]
    ConflictingDrivers { asserted: Vec<Signal> },

    #[error("Sensor asserted while {state}, only meaningful while Closing")]
    SensorOutsideClosing { state: DoorState },

    #[error("Custom check failed: {message}")]
    CustomCheckFailed { message: String },
}

fn names(signals: &[Signal]) -> String {
    signals
        .iter()
        .map(|signal| signal.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// What the simulator does with a frame that violates the input rules
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputPolicy {
    /// Skip the checks and run the arithmetic as-is
    #[default]
    Trust,

    /// Commit the cycle but log each violation
    Warn,

    /// Abort the run before the offending cycle is recorded
    Reject,
}
