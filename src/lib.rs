//! Doorstep: a cycle-accurate garage door controller
//!
//! Doorstep models a small synchronous controller for a garage door motor
//! driver and simulates it against a fixed input schedule, producing a
//! per-cycle trace and an ASCII waveform.
//!
//! The controller keeps its state in a 2-bit register. Instead of a
//! transition table, each cycle adds encoded inputs to the register under
//! wraparound arithmetic; the motor outputs are decoded from the register
//! alone, so they lag the inputs by one cycle.
//!
//! # Core Concepts
//!
//! - **Bits**: fixed-width wire values with wraparound arithmetic
//! - **DoorController**: the state register and its pure next-state and
//!   output functions
//! - **Simulator**: drives the controller one frame per cycle
//! - **TraceRecorder**: the ordered record of every simulated cycle
//!
//! # Example
//!
//! ```rust
//! use doorstep::core::DoorState;
//! use doorstep::schedule::Schedule;
//! use doorstep::simulation::{Simulator, WaveformOptions};
//!
//! let trace = Simulator::new(Schedule::reference()).run().unwrap();
//!
//! let states: Vec<DoorState> = trace.samples().iter().map(|s| s.state).collect();
//! assert_eq!(
//!     states,
//!     vec![
//!         DoorState::Closed,
//!         DoorState::Opening,
//!         DoorState::Opened,
//!         DoorState::Closing,
//!         DoorState::Opening,
//!         DoorState::Opened,
//!         DoorState::Closing,
//!         DoorState::Closed,
//!     ]
//! );
//!
//! let waveform = trace.render_waveform(&WaveformOptions::default());
//! assert!(waveform.contains("OUT-closing"));
//! ```

pub mod builder;
pub mod core;
pub mod enforcement;
pub mod schedule;
pub mod simulation;

// Re-export commonly used types
pub use builder::{SimulationConfig, SimulatorBuilder};
pub use crate::core::{Bits2, DoorController, DoorState, InputFrame, OutputFrame, Signal, State};
pub use schedule::Schedule;
pub use simulation::{Simulator, TraceRecorder, TraceSample};
