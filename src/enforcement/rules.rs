//! Input rules for controller frames using Validation.

use crate::core::DoorState;
use crate::enforcement::builder::InputRulesBuilder;
use crate::enforcement::context::FrameContext;
use crate::enforcement::violations::FrameViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Type alias for validation check functions
pub type ValidationCheck =
    Box<dyn Fn(&FrameContext) -> Validation<(), NonEmptyVec<FrameViolation>> + Send + Sync>;

/// Assumptions a frame must satisfy before it is applied.
/// Uses Validation to accumulate ALL violations.
pub struct InputRules {
    pub(crate) single_driver: bool,
    pub(crate) sensor_gated: bool,
    pub(crate) required_checks: Vec<ValidationCheck>,
}

impl InputRules {
    /// The controller's own assumptions: one driver line at a time, and
    /// the sensor only while closing.
    pub fn standard() -> Self {
        InputRulesBuilder::new().single_driver().sensor_gated().build()
    }

    /// Enforce all rules, accumulating ALL violations.
    /// Returns Validation::Success(()) if all checks pass.
    /// Returns Validation::Failure with ALL violations if any fail.
    pub fn enforce(&self, context: &FrameContext) -> Validation<(), NonEmptyVec<FrameViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<FrameViolation>>> = Vec::new();

        if self.single_driver {
            let asserted = context.frame.asserted_drivers();
            let check = if asserted.len() > 1 {
                Validation::fail(FrameViolation::ConflictingDrivers { asserted })
            } else {
                Validation::success(())
            };
            checks.push(check);
        }

        if self.sensor_gated {
            let check = if context.frame.sensor && context.state != DoorState::Closing {
                Validation::fail(FrameViolation::SensorOutsideClosing {
                    state: context.state,
                })
            } else {
                Validation::success(())
            };
            checks.push(check);
        }

        for check_fn in &self.required_checks {
            checks.push(check_fn(context));
        }

        Validation::all_vec(checks).map(|_| ())
    }
}

impl Default for InputRules {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{InputFrame, Signal};

    fn context(state: DoorState, frame: InputFrame) -> FrameContext {
        FrameContext {
            cycle: 0,
            state,
            frame,
        }
    }

    #[test]
    fn enforcement_accumulates_all_violations() {
        let rules = InputRulesBuilder::new()
            .single_driver()
            .sensor_gated()
            .require_pred(|_ctx| false, "Custom check always fails".to_string())
            .build();

        let frame = InputFrame::only(Signal::ButtonPressed)
            .with(Signal::OpenedSwitch, true)
            .with(Signal::Sensor, true);

        match rules.enforce(&context(DoorState::Opened, frame)) {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 3);

                assert!(errors.iter().any(|e| *e
                    == FrameViolation::ConflictingDrivers {
                        asserted: vec![Signal::ButtonPressed, Signal::OpenedSwitch],
                    }));
                assert!(errors.iter().any(|e| *e
                    == FrameViolation::SensorOutsideClosing {
                        state: DoorState::Opened,
                    }));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, FrameViolation::CustomCheckFailed { .. })));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn standard_rules_accept_realistic_frames() {
        let rules = InputRules::standard();

        assert!(rules
            .enforce(&context(DoorState::Closed, InputFrame::idle()))
            .is_success());
        assert!(rules
            .enforce(&context(DoorState::Opening, InputFrame::only(Signal::OpenedSwitch)))
            .is_success());
        assert!(rules
            .enforce(&context(DoorState::Closing, InputFrame::only(Signal::Sensor)))
            .is_success());
    }

    #[test]
    fn sensor_outside_closing_is_flagged() {
        let rules = InputRules::standard();

        for state in [DoorState::Closed, DoorState::Opening, DoorState::Opened] {
            let result = rules.enforce(&context(state, InputFrame::only(Signal::Sensor)));
            assert!(result.is_failure(), "{state}");
        }
    }

    #[test]
    fn empty_rules_accept_anything() {
        let rules = InputRulesBuilder::new().build();
        let frame = InputFrame::only(Signal::ButtonPressed)
            .with(Signal::ClosedSwitch, true)
            .with(Signal::Sensor, true);

        assert!(rules.enforce(&context(DoorState::Closed, frame)).is_success());
    }

    #[test]
    fn custom_validation_check_works() {
        let rules = InputRulesBuilder::new()
            .require(|ctx: &FrameContext| {
                if ctx.cycle < 4 {
                    Validation::success(())
                } else {
                    Validation::fail(FrameViolation::CustomCheckFailed {
                        message: "Schedule runs past cycle 3".to_string(),
                    })
                }
            })
            .build();

        let early = FrameContext {
            cycle: 3,
            state: DoorState::Closed,
            frame: InputFrame::idle(),
        };
        let late = FrameContext { cycle: 4, ..early };

        assert!(rules.enforce(&early).is_success());
        assert!(rules.enforce(&late).is_failure());
    }

    #[test]
    fn violations_render_readable_messages() {
        let conflict = FrameViolation::ConflictingDrivers {
            asserted: vec![Signal::ButtonPressed, Signal::ClosedSwitch],
        };
        assert_eq!(
            conflict.to_string(),
            "Driver lines asserted together: buttonPressed, closedSwitch"
        );

        let sensor = FrameViolation::SensorOutsideClosing {
            state: DoorState::Opening,
        };
        assert_eq!(
            sensor.to_string(),
            "Sensor asserted while Opening, only meaningful while Closing"
        );
    }
}
