//! Per-cycle trace recording.
//!
//! A trace is the ordered record of every cycle a simulator ran: the inputs
//! sampled, the state in effect, the outputs decoded from it, and the
//! internal wires that fed the register.

use crate::core::{DoorState, Increments, InputFrame, OutputFrame, Step};
use crate::simulation::waveform::{self, WaveformOptions};
use serde::{Deserialize, Serialize};

/// Record of a single simulated cycle.
///
/// Samples are immutable values. `state` and `outputs` describe the cycle
/// itself; `next_state` is what the register holds from the next cycle on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceSample {
    /// Zero-based cycle index
    pub cycle: usize,
    /// Input levels sampled this cycle
    pub inputs: InputFrame,
    /// State in effect this cycle (before the register updates)
    pub state: DoorState,
    /// Outputs decoded from `state`
    pub outputs: OutputFrame,
    /// Adder operands computed from `inputs` and `state`
    pub increments: Increments,
    /// State committed at the end of the cycle
    pub next_state: DoorState,
}

impl TraceSample {
    /// Build a sample from what the controller observed for `cycle`.
    pub fn from_step(cycle: usize, inputs: InputFrame, step: Step) -> Self {
        Self {
            cycle,
            inputs,
            state: step.state,
            outputs: step.outputs,
            increments: step.increments,
            next_state: step.next_state,
        }
    }
}

/// Ordered trace of simulated cycles.
///
/// # Example
///
/// ```rust
/// use doorstep::core::DoorState;
/// use doorstep::schedule::Schedule;
/// use doorstep::simulation::Simulator;
///
/// let trace = Simulator::new(Schedule::reference()).run().unwrap();
///
/// let path = trace.state_path();
/// assert_eq!(path.len(), 9); // eight cycles plus the final register value
/// assert_eq!(path[0], DoorState::Closed);
/// assert_eq!(trace.final_state(), Some(DoorState::Closed));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceRecorder {
    samples: Vec<TraceSample>,
}

impl TraceRecorder {
    /// Create a new empty trace.
    pub fn new() -> Self {
        Self {
            samples: Vec::new(),
        }
    }

    pub fn with_capacity(cycles: usize) -> Self {
        Self {
            samples: Vec::with_capacity(cycles),
        }
    }

    /// Append the sample for the next cycle.
    pub fn record(&mut self, sample: TraceSample) {
        self.samples.push(sample);
    }

    /// All samples in cycle order.
    pub fn samples(&self) -> &[TraceSample] {
        &self.samples
    }

    pub fn sample(&self, cycle: usize) -> Option<&TraceSample> {
        self.samples.get(cycle)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// States the register held, in order: the state in effect for each
    /// cycle, then the value committed by the last cycle.
    ///
    /// Empty when nothing was recorded.
    pub fn state_path(&self) -> Vec<DoorState> {
        let mut path = Vec::with_capacity(self.samples.len() + 1);
        if let Some(first) = self.samples.first() {
            path.push(first.state);
        }
        for sample in &self.samples {
            path.push(sample.next_state);
        }
        path
    }

    /// Outputs for each cycle in order.
    pub fn outputs(&self) -> Vec<OutputFrame> {
        self.samples.iter().map(|sample| sample.outputs).collect()
    }

    /// The register value after the last recorded cycle.
    pub fn final_state(&self) -> Option<DoorState> {
        self.samples.last().map(|sample| sample.next_state)
    }

    /// ASCII waveform of every wire, one column per cycle.
    pub fn render_waveform(&self, options: &WaveformOptions) -> String {
        waveform::render(&self.samples, options)
    }

    /// Serialize the trace for an external renderer.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Extend<TraceSample> for TraceRecorder {
    fn extend<T: IntoIterator<Item = TraceSample>>(&mut self, iter: T) {
        self.samples.extend(iter);
    }
}

impl<'a> IntoIterator for &'a TraceRecorder {
    type Item = &'a TraceSample;
    type IntoIter = std::slice::Iter<'a, TraceSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DoorController, Signal};

    fn sample_for(cycle: usize, controller: &mut DoorController, inputs: InputFrame) -> TraceSample {
        let step = controller.step(&inputs);
        TraceSample::from_step(cycle, inputs, step)
    }

    #[test]
    fn new_trace_is_empty() {
        let trace = TraceRecorder::new();
        assert!(trace.is_empty());
        assert!(trace.state_path().is_empty());
        assert!(trace.final_state().is_none());
        assert!(trace.sample(0).is_none());
    }

    #[test]
    fn record_appends_in_order() {
        let mut controller = DoorController::new();
        let mut trace = TraceRecorder::new();

        trace.record(sample_for(0, &mut controller, InputFrame::only(Signal::ButtonPressed)));
        trace.record(sample_for(1, &mut controller, InputFrame::idle()));

        assert_eq!(trace.len(), 2);
        assert_eq!(trace.sample(0).unwrap().cycle, 0);
        assert_eq!(trace.sample(1).unwrap().state, DoorState::Opening);
    }

    #[test]
    fn state_path_ends_with_committed_state() {
        let mut controller = DoorController::new();
        let mut trace = TraceRecorder::new();
        let press = InputFrame::only(Signal::ButtonPressed);

        for cycle in 0..2 {
            trace.record(sample_for(cycle, &mut controller, press));
        }

        assert_eq!(
            trace.state_path(),
            vec![DoorState::Closed, DoorState::Opening, DoorState::Opened]
        );
        assert_eq!(trace.final_state(), Some(DoorState::Opened));
    }

    #[test]
    fn outputs_follow_recorded_states() {
        let mut controller = DoorController::with_state(DoorState::Closing);
        let mut trace = TraceRecorder::new();
        trace.record(sample_for(0, &mut controller, InputFrame::only(Signal::Sensor)));
        trace.record(sample_for(1, &mut controller, InputFrame::idle()));

        let outputs = trace.outputs();
        assert!(outputs[0].closing);
        assert!(outputs[1].opening);
    }

    #[test]
    fn trace_serializes_correctly() {
        let mut controller = DoorController::new();
        let mut trace = TraceRecorder::new();
        trace.extend([sample_for(0, &mut controller, InputFrame::only(Signal::ButtonPressed))]);

        let json = trace.to_json().unwrap();
        assert!(json.contains("\"next_state\": \"Opening\""));

        let parsed: TraceRecorder = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, trace);
    }
}
