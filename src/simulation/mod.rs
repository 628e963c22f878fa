//! Simulation of the door controller against an input schedule.
//!
//! This is the imperative shell around [`crate::core`]: it owns the
//! controller, feeds it one frame per cycle, optionally checks frames
//! against the input rules, logs progress and records a trace.
//!
//! Outputs lag inputs by one cycle. The sample for cycle `t` shows the
//! state committed at the end of cycle `t - 1`, so cycle 0 always shows
//! the initial state whatever its inputs were.

mod error;
mod simulator;
mod trace;
pub mod waveform;

pub use error::SimulationError;
pub use simulator::Simulator;
pub use trace::{TraceRecorder, TraceSample};
pub use waveform::{WaveformOptions, Wire};
