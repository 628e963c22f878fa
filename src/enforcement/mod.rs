//! Validation-based checks on input frames.
//!
//! The controller assumes that at most one driver line (button, closed
//! switch, opened switch) is high in a cycle and that the sensor only fires
//! while the door is closing. The arithmetic does not depend on either
//! assumption holding, so checking them is opt-in through
//! [`InputPolicy`].
//!
//! Checks use Stillwater's `Validation` type to accumulate ALL violations
//! of a frame instead of stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use doorstep::core::{DoorState, InputFrame, Signal};
//! use doorstep::enforcement::{FrameContext, InputRules};
//!
//! let rules = InputRules::standard();
//! let context = FrameContext {
//!     cycle: 0,
//!     state: DoorState::Closed,
//!     frame: InputFrame::only(Signal::Sensor),
//! };
//!
//! assert!(rules.enforce(&context).is_failure());
//! ```

pub mod builder;
pub mod context;
pub mod rules;
pub mod violations;

pub use builder::InputRulesBuilder;
pub use context::FrameContext;
pub use rules::InputRules;
pub use violations::{FrameViolation, InputPolicy};
