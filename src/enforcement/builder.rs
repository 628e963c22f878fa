//! Builder API for creating input rules.

use crate::enforcement::context::FrameContext;
use crate::enforcement::rules::{InputRules, ValidationCheck};
use crate::enforcement::violations::FrameViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for creating input rules
pub struct InputRulesBuilder {
    single_driver: bool,
    sensor_gated: bool,
    required_checks: Vec<ValidationCheck>,
}

impl InputRulesBuilder {
    pub fn new() -> Self {
        Self {
            single_driver: false,
            sensor_gated: false,
            required_checks: Vec::new(),
        }
    }

    /// At most one of button, closed switch and opened switch per cycle
    pub fn single_driver(mut self) -> Self {
        self.single_driver = true;
        self
    }

    /// Sensor may only be asserted while the door is closing
    pub fn sensor_gated(mut self) -> Self {
        self.sensor_gated = true;
        self
    }

    /// Add a custom validation check
    pub fn require<F>(mut self, check: F) -> Self
    where
        F: Fn(&FrameContext) -> Validation<(), NonEmptyVec<FrameViolation>> + Send + Sync + 'static,
    {
        self.required_checks.push(Box::new(check));
        self
    }

    /// Add a simple predicate check with error message
    pub fn require_pred<F>(mut self, predicate: F, error_msg: String) -> Self
    where
        F: Fn(&FrameContext) -> bool + Send + Sync + 'static,
    {
        let check = move |ctx: &FrameContext| {
            if predicate(ctx) {
                Validation::success(())
            } else {
                Validation::fail(FrameViolation::CustomCheckFailed {
                    message: error_msg.clone(),
                })
            }
        };
        self.required_checks.push(Box::new(check));
        self
    }

    /// Build the input rules
    pub fn build(self) -> InputRules {
        InputRules {
            single_driver: self.single_driver,
            sensor_gated: self.sensor_gated,
            required_checks: self.required_checks,
        }
    }
}

impl Default for InputRulesBuilder {
    fn default() -> Self {
        Self::new()
    }
}
