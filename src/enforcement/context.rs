//! Context provided to input checks.

use crate::core::{DoorState, InputFrame};

/// What a check sees for one cycle: the frame and the state it will be
/// applied to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameContext {
    pub cycle: usize,
    pub state: DoorState,
    pub frame: InputFrame,
}
