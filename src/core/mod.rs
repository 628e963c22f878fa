//! Core controller types and logic.
//!
//! This module contains the pure functional core of the door controller:
//! - Fixed-width wire values with wraparound arithmetic
//! - Register-encoded states via the `State` trait
//! - Per-cycle input and output frames
//! - The controller's next-state and output decode functions
//!
//! Nothing in this module logs, allocates a clock, or fails. The simulator
//! in [`crate::simulation`] is the imperative shell around it.

mod bits;
mod controller;
mod error;
mod signals;
mod state;

pub use bits::{Bits, Bits2};
pub use controller::{DoorController, Increments, Step};
pub use error::BitsError;
pub use signals::{InputFrame, Output, OutputFrame, Signal};
pub use state::{DoorState, State};
