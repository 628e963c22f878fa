//! End-to-end run of the reference schedule.

use doorstep::core::{Bits2, DoorState, OutputFrame};
use doorstep::schedule::{Schedule, REFERENCE_PATTERNS};
use doorstep::simulation::{Simulator, WaveformOptions};
use doorstep::SimulationConfig;

use DoorState::*;

fn outputs(pausing: bool, opening: bool, closing: bool) -> OutputFrame {
    OutputFrame {
        pausing,
        opening,
        closing,
    }
}

#[test]
fn reference_schedule_state_sequence() {
    let patterns: Vec<(&str, &str)> = REFERENCE_PATTERNS
        .iter()
        .map(|(signal, pattern)| (signal.name(), *pattern))
        .collect();
    let schedule = Schedule::parse(patterns).unwrap();

    let trace = Simulator::new(schedule).run().unwrap();

    let states: Vec<DoorState> = trace.samples().iter().map(|s| s.state).collect();
    assert_eq!(
        states,
        vec![Closed, Opening, Opened, Closing, Opening, Opened, Closing, Closed]
    );
    assert_eq!(trace.final_state(), Some(Closed));
}

#[test]
fn reference_schedule_outputs_lag_inputs() {
    let trace = Simulator::new(Schedule::reference()).run().unwrap();

    let expected = vec![
        outputs(true, false, false),
        outputs(false, true, false),
        outputs(true, false, false),
        outputs(false, false, true),
        outputs(false, true, false),
        outputs(true, false, false),
        outputs(false, false, true),
        outputs(true, false, false),
    ];
    assert_eq!(trace.outputs(), expected);
}

#[test]
fn sensor_cycle_adds_two_from_closing() {
    let trace = Simulator::new(Schedule::reference()).run().unwrap();
    let sensor_cycle = trace.sample(3).unwrap();

    assert!(sensor_cycle.inputs.sensor);
    assert_eq!(sensor_cycle.state, Closing);
    assert_eq!(sensor_cycle.increments.a, Bits2::ZERO);
    assert_eq!(sensor_cycle.increments.b, Bits2::new(2));
    assert_eq!(sensor_cycle.next_state, Opening);
}

#[test]
fn reference_config_matches_reference_schedule() {
    let from_config = SimulationConfig::reference().build().unwrap().run().unwrap();
    let direct = Simulator::new(Schedule::reference()).run().unwrap();

    assert_eq!(from_config, direct);
}

#[test]
fn reference_waveform_shows_every_wire() {
    let trace = Simulator::new(Schedule::reference()).run().unwrap();
    let waveform = trace.render_waveform(&WaveformOptions::default());

    for name in [
        "IN-buttonPressed",
        "IN-closedSwitch",
        "IN-openedSwitch",
        "IN-sensor",
        "W-input_A",
        "W-input_B",
        "R-state",
        "OUT-pausing",
        "OUT-opening",
        "OUT-closing",
    ] {
        assert!(waveform.contains(name), "missing {name}");
    }
    assert!(waveform.lines().next().unwrap().contains("|7"));

    let state_row = waveform
        .lines()
        .find(|line| line.trim_start().starts_with("R-state"))
        .unwrap();
    assert!(state_row.contains("00--------01--------10--------11--------01"));
}
