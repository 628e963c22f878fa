//! ASCII waveform rendering of a trace.
//!
//! One row per wire, one column per cycle. Single-bit wires draw levels
//! (`‾` high, `_` low, `/` and `\` on edges); multi-bit wires print their
//! value in binary when it changes and `-` while it holds.

use crate::core::{Bits2, Output, Signal};
use crate::simulation::trace::TraceSample;
use serde::{Deserialize, Serialize};

/// Layout of a rendered waveform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaveformOptions {
    /// Characters per cycle column
    pub symbol_len: usize,
    /// Label the header every this many cycles
    pub segment_size: usize,
}

impl Default for WaveformOptions {
    fn default() -> Self {
        Self {
            symbol_len: 10,
            segment_size: 1,
        }
    }
}

/// A named row in the waveform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wire {
    Input(Signal),
    InputA,
    InputB,
    State,
    Output(Output),
}

impl Wire {
    /// Rows in rendering order: inputs, internal wires, register, outputs.
    pub fn all() -> Vec<Wire> {
        let mut wires: Vec<Wire> = Signal::ALL.into_iter().map(Wire::Input).collect();
        wires.extend([Wire::InputA, Wire::InputB, Wire::State]);
        wires.extend(Output::ALL.into_iter().map(Wire::Output));
        wires
    }

    pub fn name(self) -> &'static str {
        match self {
            Wire::Input(signal) => signal.wire_name(),
            Wire::InputA => "W-input_A",
            Wire::InputB => "W-input_B",
            Wire::State => "R-state",
            Wire::Output(output) => output.wire_name(),
        }
    }

    fn value(self, sample: &TraceSample) -> Level {
        match self {
            Wire::Input(signal) => Level::Bit(sample.inputs.level(signal)),
            Wire::InputA => Level::Word(sample.increments.a),
            Wire::InputB => Level::Word(sample.increments.b),
            Wire::State => Level::Word(sample.state.bits()),
            Wire::Output(output) => Level::Bit(sample.outputs.level(output)),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Level {
    Bit(bool),
    Word(Bits2),
}

/// Render `samples` as a text table.
pub fn render(samples: &[TraceSample], options: &WaveformOptions) -> String {
    let width = options.symbol_len.max(1);
    let segment = options.segment_size.max(1);
    let wires = Wire::all();
    let label_width = wires.iter().map(|w| w.name().len()).max().unwrap_or(0);

    let mut out = String::new();
    out.push_str(&" ".repeat(label_width + 1));
    for cycle in 0..samples.len() {
        let label = if cycle % segment == 0 {
            format!("|{cycle}")
        } else {
            String::new()
        };
        out.push_str(&pad(&label, width, ' '));
    }
    out.push('\n');

    for wire in wires {
        out.push_str(&format!("{:>label_width$} ", wire.name()));
        let mut previous: Option<Level> = None;
        for sample in samples {
            let level = wire.value(sample);
            out.push_str(&cell(previous, level, width));
            previous = Some(level);
        }
        out.push('\n');
    }

    out
}

fn cell(previous: Option<Level>, level: Level, width: usize) -> String {
    match level {
        Level::Bit(high) => {
            let fill = if high { '‾' } else { '_' };
            let edge = match previous {
                Some(Level::Bit(was)) if was != high => {
                    if high {
                        '/'
                    } else {
                        '\\'
                    }
                }
                _ => fill,
            };
            let mut cell = String::with_capacity(width * 3);
            cell.push(edge);
            cell.extend(std::iter::repeat(fill).take(width - 1));
            cell
        }
        Level::Word(value) => {
            if previous == Some(level) {
                "-".repeat(width)
            } else {
                pad(&value.to_string(), width, '-')
            }
        }
    }
}

/// Left-align `text` in `width` characters, truncating if it does not fit.
fn pad(text: &str, width: usize, fill: char) -> String {
    let mut out: String = text.chars().take(width).collect();
    let used = out.chars().count();
    out.extend(std::iter::repeat(fill).take(width - used));
    out
}
