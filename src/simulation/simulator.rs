//! Cycle-by-cycle simulation of the door controller.

use crate::core::{DoorController, DoorState, InputFrame, State};
use crate::enforcement::{FrameContext, InputPolicy, InputRules};
use crate::schedule::Schedule;
use crate::simulation::error::SimulationError;
use crate::simulation::trace::{TraceRecorder, TraceSample};
use stillwater::validation::Validation;
use tracing::{debug, info, warn};

/// Drives a [`DoorController`] through a schedule, one frame per cycle.
///
/// Each simulator owns its controller and trace; independent simulators
/// never share state. Cycles are taken from the schedule in order, whether
/// driven one at a time with [`step`](Self::step) or all at once with
/// [`run`](Self::run).
pub struct Simulator {
    controller: DoorController,
    schedule: Schedule,
    policy: InputPolicy,
    rules: InputRules,
    trace: TraceRecorder,
    cycle: usize,
}

impl Simulator {
    /// A simulator with the controller in `Closed`, trusting every frame.
    pub fn new(schedule: Schedule) -> Self {
        Self::from_parts(
            DoorController::new(),
            schedule,
            InputPolicy::Trust,
            InputRules::standard(),
        )
    }

    pub(crate) fn from_parts(
        controller: DoorController,
        schedule: Schedule,
        policy: InputPolicy,
        rules: InputRules,
    ) -> Self {
        let trace = TraceRecorder::with_capacity(schedule.len());
        Self {
            controller,
            schedule,
            policy,
            rules,
            trace,
            cycle: 0,
        }
    }

    pub fn controller(&self) -> &DoorController {
        &self.controller
    }

    pub fn current_state(&self) -> DoorState {
        self.controller.current_state()
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn policy(&self) -> InputPolicy {
        self.policy
    }

    /// Index of the next cycle to be simulated.
    pub fn cycle(&self) -> usize {
        self.cycle
    }

    /// Samples committed so far.
    pub fn trace(&self) -> &TraceRecorder {
        &self.trace
    }

    /// Cycles left in the schedule.
    pub fn remaining(&self) -> usize {
        self.schedule.len() - self.cycle
    }

    /// Simulate the next scheduled cycle.
    ///
    /// Returns `None` once the schedule is exhausted. The returned sample
    /// carries the state in effect during the cycle and its outputs; the
    /// controller holds the next state afterwards. Under
    /// `InputPolicy::Reject` a violating frame leaves the controller, the
    /// trace and the cycle counter untouched, so the same cycle fails again
    /// if stepped.
    pub fn step(&mut self) -> Option<Result<TraceSample, SimulationError>> {
        let cycle = self.cycle;
        let frame = *self.schedule.frame(cycle)?;

        if let Err(err) = self.check(&frame) {
            return Some(Err(err));
        }

        let step = self.controller.step(&frame);
        debug!(
            cycle,
            state = step.state.name(),
            next = step.next_state.name(),
            input_a = %step.increments.a,
            input_b = %step.increments.b,
            "cycle committed"
        );

        let sample = TraceSample::from_step(cycle, frame, step);
        self.trace.record(sample);
        self.cycle += 1;
        Some(Ok(sample))
    }

    /// Run every remaining cycle of the schedule and return the full trace,
    /// including cycles already driven with [`step`](Self::step).
    ///
    /// An empty schedule yields an empty trace. Under `InputPolicy::Reject`
    /// the run stops at the first violating frame and no trace is returned.
    pub fn run(mut self) -> Result<TraceRecorder, SimulationError> {
        while let Some(sample) = self.step() {
            sample?;
        }

        info!(
            cycles = self.trace.len(),
            final_state = self.current_state().name(),
            "simulation finished"
        );
        Ok(self.trace)
    }

    fn check(&self, frame: &InputFrame) -> Result<(), SimulationError> {
        if self.policy == InputPolicy::Trust {
            return Ok(());
        }

        let context = FrameContext {
            cycle: self.cycle,
            state: self.controller.current_state(),
            frame: *frame,
        };

        let Validation::Failure(errors) = self.rules.enforce(&context) else {
            return Ok(());
        };
        let violations: Vec<_> = errors.iter().cloned().collect();

        if self.policy == InputPolicy::Reject {
            return Err(SimulationError::FrameRejected {
                cycle: context.cycle,
                violations,
            });
        }

        for violation in &violations {
            warn!(cycle = context.cycle, %violation, "input frame breaks controller assumptions");
        }
        Ok(())
    }
}
