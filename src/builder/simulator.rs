//! Builder for constructing simulators.

use crate::builder::error::BuildError;
use crate::core::{DoorController, DoorState};
use crate::enforcement::{InputPolicy, InputRules};
use crate::schedule::Schedule;
use crate::simulation::Simulator;

/// Builder for constructing simulators with a fluent API.
///
/// # Example
///
/// ```rust
/// use doorstep::builder::SimulatorBuilder;
/// use doorstep::core::DoorState;
/// use doorstep::enforcement::InputPolicy;
/// use doorstep::schedule::Schedule;
///
/// let simulator = SimulatorBuilder::new()
///     .schedule(Schedule::reference())
///     .policy(InputPolicy::Reject)
///     .build()
///     .unwrap();
///
/// assert_eq!(simulator.current_state(), DoorState::Closed);
/// assert!(simulator.run().is_ok());
/// ```
pub struct SimulatorBuilder {
    schedule: Option<Schedule>,
    initial: DoorState,
    policy: InputPolicy,
    rules: Option<InputRules>,
}

impl SimulatorBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            schedule: None,
            initial: DoorState::Closed,
            policy: InputPolicy::Trust,
            rules: None,
        }
    }

    /// Set the input schedule (required).
    pub fn schedule(mut self, schedule: Schedule) -> Self {
        self.schedule = Some(schedule);
        self
    }

    /// Parse and set the input schedule from per-signal patterns.
    /// Returns an error if the patterns are malformed.
    pub fn patterns<'a, I>(self, patterns: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let schedule = Schedule::parse(patterns)?;
        Ok(self.schedule(schedule))
    }

    /// Set the register's value for cycle 0. Defaults to `Closed`.
    ///
    /// Cycle 0 always shows the outputs of this state, so a trace only
    /// opens with `outputs_for(Closed)` under the default seed.
    pub fn initial(mut self, state: DoorState) -> Self {
        self.initial = state;
        self
    }

    /// Set how frames that break the input rules are handled.
    pub fn policy(mut self, policy: InputPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replace the standard input rules.
    pub fn rules(mut self, rules: InputRules) -> Self {
        self.rules = Some(rules);
        self
    }

    /// Build the simulator.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<Simulator, BuildError> {
        let schedule = self.schedule.ok_or(BuildError::MissingSchedule)?;
        let rules = self.rules.unwrap_or_else(InputRules::standard);

        Ok(Simulator::from_parts(
            DoorController::with_state(self.initial),
            schedule,
            self.policy,
            rules,
        ))
    }
}

impl Default for SimulatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
