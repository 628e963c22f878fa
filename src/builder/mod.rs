//! Builder API for ergonomic simulator construction.
//!
//! This module provides a fluent builder, a serde-backed configuration and
//! the `state_enum!` macro for declaring register-encoded states.

pub mod config;
pub mod error;
pub mod macros;
pub mod simulator;

pub use config::SimulationConfig;
pub use error::BuildError;
pub use simulator::SimulatorBuilder;

use crate::schedule::Schedule;
use crate::simulation::{Simulator, TraceRecorder};

/// Simulate `schedule` from `Closed`, trusting every frame.
///
/// # Example
///
/// ```
/// use doorstep::builder::simulate;
/// use doorstep::core::DoorState;
/// use doorstep::schedule::Schedule;
///
/// let trace = simulate(Schedule::reference());
/// assert_eq!(trace.len(), 8);
/// assert_eq!(trace.sample(3).unwrap().state, DoorState::Closing);
/// ```
pub fn simulate(schedule: Schedule) -> TraceRecorder {
    Simulator::new(schedule)
        .run()
        .expect("Trusting simulator never rejects a frame")
}
