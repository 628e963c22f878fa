//! Register-encoded controller states.
//!
//! States are small `Copy` values whose discriminant is the value held in
//! the state register. The door controller's four states are declared here.

use super::bits::Bits2;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for register-encoded states.
///
/// All methods are pure. Implement it with [`state_enum!`](crate::state_enum)
/// rather than by hand so the name and encoding stay in sync with the enum.
pub trait State:
    Copy + Eq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// The state's name for display and logging.
    fn name(&self) -> &str;

    /// The value the state register holds while in this state.
    fn code(&self) -> u8;
}

crate::state_enum! {
    /// Position of the door as held in the 2-bit state register.
    ///
    /// The encodings form the cycle `Closed -> Opening -> Opened -> Closing
    /// -> Closed`, so advancing a state is modular addition on its code.
    pub enum DoorState {
        Closed = 0b00,
        Opening = 0b01,
        Opened = 0b10,
        Closing = 0b11,
    }
}

impl DoorState {
    /// The register contents for this state.
    pub const fn bits(self) -> Bits2 {
        Bits2::new(self as u8)
    }

    /// Decode a register value. Total: every 2-bit code names a state.
    pub const fn from_bits(bits: Bits2) -> Self {
        match bits.value() {
            0b00 => Self::Closed,
            0b01 => Self::Opening,
            0b10 => Self::Opened,
            _ => Self::Closing,
        }
    }

    /// The motor is stopped in the two resting states.
    pub const fn is_resting(self) -> bool {
        matches!(self, Self::Closed | Self::Opened)
    }
}

impl Default for DoorState {
    fn default() -> Self {
        Self::Closed
    }
}
