//! Simulation errors.

use crate::enforcement::FrameViolation;
use thiserror::Error;

/// Errors that abort a simulation run
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// The frame for `cycle` broke the input rules under `InputPolicy::Reject`
    #[error("Input frame for cycle {cycle} rejected: {}", describe(.violations))]
    FrameRejected {
        cycle: usize,
        violations: Vec<FrameViolation>,
    },
}

fn describe(violations: &[FrameViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
