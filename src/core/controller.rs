//! The garage door controller: one 2-bit state register plus the
//! combinational logic around it.
//!
//! There is no transition table. Each cycle the register is advanced by
//! adding two encoded increments under 2-bit wraparound:
//!
//! - `a = buttonPressed | closedSwitch | openedSwitch` moves the door one
//!   state forward.
//! - `b = 2 * (sensor & (state == Closing))` moves it two states forward,
//!   which from `Closing` lands on `Opening`.
//!
//! Outputs are decoded from the register alone, so they always describe
//! the state in effect for the cycle, never the inputs sampled in it.

use super::bits::Bits2;
use super::signals::{InputFrame, OutputFrame, Signal};
use super::state::DoorState;
use serde::{Deserialize, Serialize};

/// The two adder operands derived from a cycle's inputs.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct Increments {
    /// `W-input_A`: OR of the button and both limit switches.
    pub a: Bits2,
    /// `W-input_B`: `2` when the sensor trips while closing, else `0`.
    pub b: Bits2,
}

impl Increments {
    /// Total advance applied to the register.
    pub const fn total(self) -> Bits2 {
        self.a.add(self.b)
    }
}

/// Everything observed while the controller processes one cycle.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Step {
    /// State in effect during the cycle.
    pub state: DoorState,
    pub increments: Increments,
    /// Outputs decoded from `state`.
    pub outputs: OutputFrame,
    /// State committed for the following cycle.
    pub next_state: DoorState,
}

/// Garage door controller holding the state register.
///
/// # Example
///
/// ```rust
/// use doorstep::core::{DoorController, DoorState, InputFrame, Signal};
///
/// let mut controller = DoorController::new();
/// let step = controller.step(&InputFrame::only(Signal::ButtonPressed));
///
/// // Outputs describe the state before the button press takes effect
/// assert!(step.outputs.pausing);
/// assert_eq!(step.next_state, DoorState::Opening);
/// assert_eq!(controller.current_state(), DoorState::Opening);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct DoorController {
    state: DoorState,
}

impl DoorController {
    /// A controller whose register holds `Closed`.
    pub const fn new() -> Self {
        Self::with_state(DoorState::Closed)
    }

    pub const fn with_state(state: DoorState) -> Self {
        Self { state }
    }

    pub const fn current_state(&self) -> DoorState {
        self.state
    }

    /// Outputs for the state currently in the register.
    pub const fn outputs(&self) -> OutputFrame {
        Self::outputs_for(self.state)
    }

    /// Return the register to `Closed`.
    pub fn reset(&mut self) {
        self.state = DoorState::Closed;
    }

    /// Encode a cycle's inputs into the two adder operands.
    pub const fn combine_inputs(frame: &InputFrame, current: DoorState) -> Increments {
        let a = Bits2::or3(
            frame.wire(Signal::ButtonPressed),
            frame.wire(Signal::ClosedSwitch),
            frame.wire(Signal::OpenedSwitch),
        );
        let closing = Bits2::from_bool(current.bits().value() == DoorState::Closing.bits().value());
        let b = frame.wire(Signal::Sensor).and(closing).scale(2);
        Increments { a, b }
    }

    /// `(a + b + current) mod 4`, read back as a state.
    pub const fn next_state(current: DoorState, a: Bits2, b: Bits2) -> DoorState {
        DoorState::from_bits(a.add(b).add(current.bits()))
    }

    /// Decode the register into the three motor-driver outputs.
    pub const fn outputs_for(state: DoorState) -> OutputFrame {
        OutputFrame {
            pausing: state.is_resting(),
            opening: matches!(state, DoorState::Opening),
            closing: matches!(state, DoorState::Closing),
        }
    }

    /// Process one cycle and commit the next state.
    pub fn step(&mut self, frame: &InputFrame) -> Step {
        let state = self.state;
        let outputs = Self::outputs_for(state);
        let increments = Self::combine_inputs(frame, state);
        let next_state = Self::next_state(state, increments.a, increments.b);
        self.state = next_state;

        Step {
            state,
            increments,
            outputs,
            next_state,
        }
    }
}
