//! Per-cycle input and output frames.

use super::bits::Bits2;
use super::controller::DoorController;
use super::state::DoorState;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the controller's four input lines.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum Signal {
    ButtonPressed,
    ClosedSwitch,
    OpenedSwitch,
    Sensor,
}

impl Signal {
    pub const ALL: [Signal; 4] = [
        Signal::ButtonPressed,
        Signal::ClosedSwitch,
        Signal::OpenedSwitch,
        Signal::Sensor,
    ];

    /// The three lines that each advance the door by one state.
    pub const DRIVERS: [Signal; 3] = [
        Signal::ButtonPressed,
        Signal::ClosedSwitch,
        Signal::OpenedSwitch,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::ButtonPressed => "buttonPressed",
            Self::ClosedSwitch => "closedSwitch",
            Self::OpenedSwitch => "openedSwitch",
            Self::Sensor => "sensor",
        }
    }

    /// Name of the input wire in netlists and waveforms.
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::ButtonPressed => "IN-buttonPressed",
            Self::ClosedSwitch => "IN-closedSwitch",
            Self::OpenedSwitch => "IN-openedSwitch",
            Self::Sensor => "IN-sensor",
        }
    }

    /// Accepts either the bare name or the wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|signal| signal.name() == name || signal.wire_name() == name)
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Levels of the four input lines during one cycle.
///
/// Nothing here stops a caller from asserting several lines at once; see
/// [`InputRules`](crate::enforcement::InputRules) for opt-in checks.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct InputFrame {
    pub button_pressed: bool,
    pub closed_switch: bool,
    pub opened_switch: bool,
    pub sensor: bool,
}

impl InputFrame {
    /// A frame with every line low.
    pub const fn idle() -> Self {
        Self {
            button_pressed: false,
            closed_switch: false,
            opened_switch: false,
            sensor: false,
        }
    }

    /// A frame with exactly `signal` asserted.
    pub fn only(signal: Signal) -> Self {
        Self::idle().with(signal, true)
    }

    pub fn with(mut self, signal: Signal, level: bool) -> Self {
        match signal {
            Signal::ButtonPressed => self.button_pressed = level,
            Signal::ClosedSwitch => self.closed_switch = level,
            Signal::OpenedSwitch => self.opened_switch = level,
            Signal::Sensor => self.sensor = level,
        }
        self
    }

    pub const fn level(&self, signal: Signal) -> bool {
        match signal {
            Signal::ButtonPressed => self.button_pressed,
            Signal::ClosedSwitch => self.closed_switch,
            Signal::OpenedSwitch => self.opened_switch,
            Signal::Sensor => self.sensor,
        }
    }

    /// The line as the 2-bit wire the adder consumes: `00` or `01`.
    pub const fn wire(&self, signal: Signal) -> Bits2 {
        Bits2::from_bool(self.level(signal))
    }

    pub fn is_idle(&self) -> bool {
        Signal::ALL.into_iter().all(|signal| !self.level(signal))
    }

    /// Driver lines (button and limit switches) that are high this cycle.
    pub fn asserted_drivers(&self) -> Vec<Signal> {
        Signal::DRIVERS
            .into_iter()
            .filter(|signal| self.level(*signal))
            .collect()
    }
}

/// One of the three motor-driver outputs.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Output {
    Pausing,
    Opening,
    Closing,
}

impl Output {
    pub const ALL: [Output; 3] = [Output::Pausing, Output::Opening, Output::Closing];

    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::Pausing => "OUT-pausing",
            Self::Opening => "OUT-opening",
            Self::Closing => "OUT-closing",
        }
    }
}

/// Motor-driver outputs decoded from the state in effect for a cycle.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct OutputFrame {
    pub pausing: bool,
    pub opening: bool,
    pub closing: bool,
}

impl OutputFrame {
    pub const fn level(&self, output: Output) -> bool {
        match output {
            Output::Pausing => self.pausing,
            Output::Opening => self.opening,
            Output::Closing => self.closing,
        }
    }

    /// The single output that is high.
    pub fn active(&self) -> Option<Output> {
        let mut high = Output::ALL.into_iter().filter(|o| self.level(*o));
        match (high.next(), high.next()) {
            (Some(output), None) => Some(output),
            _ => None,
        }
    }
}

impl From<DoorState> for OutputFrame {
    fn from(state: DoorState) -> Self {
        DoorController::outputs_for(state)
    }
}
