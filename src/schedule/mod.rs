//! Input schedules: the per-cycle stimulus fed to a simulation.
//!
//! A schedule is usually written as one string per input line, one
//! character per cycle:
//!
//! ```text
//! buttonPressed  10101100
//! openedSwitch   01000000
//! closedSwitch   00000010
//! sensor         00010000
//! ```
//!
//! Parsing uses Stillwater's `Validation` so a malformed schedule reports
//! all of its bad characters and unknown names at once, then all of its
//! missing lines and ragged lengths, instead of stopping at the first.

use crate::core::{InputFrame, Signal};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

pub mod error;

pub use error::{ScheduleError, SignalError};

/// The demonstration schedule: open, reach the top, close, trip the
/// sensor, pause, close again and hit the bottom switch.
pub const REFERENCE_PATTERNS: [(Signal, &str); 4] = [
    (Signal::ButtonPressed, "10101100"),
    (Signal::OpenedSwitch, "01000000"),
    (Signal::ClosedSwitch, "00000010"),
    (Signal::Sensor, "00010000"),
];

type Checked<T> = Validation<T, NonEmptyVec<SignalError>>;

/// A finite, ordered sequence of input frames, one per cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    frames: Vec<InputFrame>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_frames(frames: Vec<InputFrame>) -> Self {
        Self { frames }
    }

    /// The schedule described by [`REFERENCE_PATTERNS`].
    pub fn reference() -> Self {
        let cycles = REFERENCE_PATTERNS[0].1.len();
        (0..cycles)
            .map(|cycle| {
                REFERENCE_PATTERNS
                    .iter()
                    .fold(InputFrame::idle(), |frame, (signal, pattern)| {
                        frame.with(*signal, pattern.as_bytes()[cycle] == b'1')
                    })
            })
            .collect()
    }

    /// Parse one `'0'`/`'1'` pattern per input line.
    ///
    /// Signal names may be bare (`sensor`) or wire names (`IN-sensor`).
    /// All four lines must be present and cover the same number of cycles;
    /// nothing is padded.
    ///
    /// # Example
    ///
    /// ```rust
    /// use doorstep::schedule::Schedule;
    ///
    /// let schedule = Schedule::parse([
    ///     ("buttonPressed", "100"),
    ///     ("closedSwitch", "000"),
    ///     ("openedSwitch", "000"),
    ///     ("sensor", "000"),
    /// ])
    /// .unwrap();
    /// assert_eq!(schedule.len(), 3);
    ///
    /// let err = Schedule::parse([("buttonPressed", "1x0x")]).unwrap_err();
    /// assert_eq!(err.errors.len(), 2);
    /// ```
    pub fn parse<'a, I>(patterns: I) -> Result<Self, ScheduleError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut seen = Vec::new();
        let lines: Vec<Checked<(Signal, Vec<bool>)>> = patterns
            .into_iter()
            .map(|(name, pattern)| parse_line(name, pattern, &mut seen))
            .collect();

        let lines = match Validation::all_vec(lines) {
            Validation::Success(lines) => lines,
            Validation::Failure(errors) => return Err(rejected(errors)),
        };

        let expected = lines.first().map_or(0, |(_, levels)| levels.len());
        let mut checks: Vec<Checked<()>> = Vec::new();

        for signal in Signal::ALL {
            if !lines.iter().any(|(parsed, _)| *parsed == signal) {
                checks.push(Validation::fail(SignalError::MissingSignal { signal }));
            }
        }

        for (signal, levels) in &lines {
            let check = if levels.len() == expected {
                Validation::success(())
            } else {
                Validation::fail(SignalError::LengthMismatch {
                    signal: *signal,
                    expected,
                    found: levels.len(),
                })
            };
            checks.push(check);
        }

        if let Validation::Failure(errors) = Validation::all_vec(checks) {
            return Err(rejected(errors));
        }

        Ok((0..expected)
            .map(|cycle| {
                lines
                    .iter()
                    .fold(InputFrame::idle(), |frame, (signal, levels)| {
                        frame.with(*signal, levels[cycle])
                    })
            })
            .collect())
    }

    /// Re-encode one input line as a `'0'`/`'1'` pattern.
    pub fn pattern(&self, signal: Signal) -> String {
        self.frames
            .iter()
            .map(|frame| if frame.level(signal) { '1' } else { '0' })
            .collect()
    }

    pub fn push(&mut self, frame: InputFrame) {
        self.frames.push(frame);
    }

    pub fn frames(&self) -> &[InputFrame] {
        &self.frames
    }

    pub fn frame(&self, cycle: usize) -> Option<&InputFrame> {
        self.frames.get(cycle)
    }

    /// Number of cycles the schedule drives.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl FromIterator<InputFrame> for Schedule {
    fn from_iter<T: IntoIterator<Item = InputFrame>>(iter: T) -> Self {
        Self {
            frames: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a InputFrame;
    type IntoIter = std::slice::Iter<'a, InputFrame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

fn parse_line(name: &str, pattern: &str, seen: &mut Vec<Signal>) -> Checked<(Signal, Vec<bool>)> {
    let Some(signal) = Signal::from_name(name) else {
        return Validation::fail(SignalError::UnknownSignal {
            name: name.to_string(),
        });
    };

    if seen.contains(&signal) {
        return Validation::fail(SignalError::DuplicateSignal { signal });
    }
    seen.push(signal);

    let levels: Vec<Checked<bool>> = pattern
        .chars()
        .enumerate()
        .map(|(cycle, found)| match found {
            '0' => Validation::success(false),
            '1' => Validation::success(true),
            found => Validation::fail(SignalError::InvalidLevel {
                signal,
                cycle,
                found,
            }),
        })
        .collect();

    Validation::all_vec(levels).map(move |levels| (signal, levels))
}

fn rejected(errors: NonEmptyVec<SignalError>) -> ScheduleError {
    ScheduleError {
        errors: errors.iter().cloned().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_patterns() -> Vec<(&'static str, &'static str)> {
        REFERENCE_PATTERNS
            .iter()
            .map(|(signal, pattern)| (signal.name(), *pattern))
            .collect()
    }

    #[test]
    fn parses_reference_patterns() {
        let schedule = Schedule::parse(reference_patterns()).unwrap();
        assert_eq!(schedule, Schedule::reference());
        assert_eq!(schedule.len(), 8);

        let first = schedule.frame(0).unwrap();
        assert!(first.button_pressed);
        assert!(!first.opened_switch);

        let fourth = schedule.frame(3).unwrap();
        assert!(fourth.sensor);
        assert!(fourth.asserted_drivers().is_empty());
    }

    #[test]
    fn pattern_round_trips_each_line() {
        let schedule = Schedule::reference();
        for (signal, pattern) in REFERENCE_PATTERNS {
            assert_eq!(schedule.pattern(signal), pattern);
        }
    }

    #[test]
    fn accepts_wire_names() {
        let schedule = Schedule::parse([
            ("IN-buttonPressed", "01"),
            ("IN-closedSwitch", "00"),
            ("IN-openedSwitch", "00"),
            ("IN-sensor", "00"),
        ])
        .unwrap();

        assert_eq!(schedule.pattern(Signal::ButtonPressed), "01");
    }

    #[test]
    fn empty_patterns_make_an_empty_schedule() {
        let schedule = Schedule::parse(Signal::ALL.iter().map(|s| (s.name(), ""))).unwrap();
        assert!(schedule.is_empty());
    }

    #[test]
    fn reports_every_invalid_character() {
        let err = Schedule::parse([
            ("buttonPressed", "1x0"),
            ("closedSwitch", "00"),
            ("openedSwitch", "0 0"),
            ("sensor", "000"),
        ])
        .unwrap_err();

        assert_eq!(
            err.errors,
            vec![
                SignalError::InvalidLevel {
                    signal: Signal::ButtonPressed,
                    cycle: 1,
                    found: 'x',
                },
                SignalError::InvalidLevel {
                    signal: Signal::OpenedSwitch,
                    cycle: 1,
                    found: ' ',
                },
            ]
        );
    }

    #[test]
    fn reports_unknown_and_duplicate_signals() {
        let err = Schedule::parse([
            ("buttonPressed", "1"),
            ("doorbell", "1"),
            ("IN-buttonPressed", "0"),
        ])
        .unwrap_err();

        assert_eq!(err.errors.len(), 2);
        assert!(err.errors.contains(&SignalError::UnknownSignal {
            name: "doorbell".to_string()
        }));
        assert!(err.errors.contains(&SignalError::DuplicateSignal {
            signal: Signal::ButtonPressed
        }));
    }

    #[test]
    fn reports_missing_lines_and_ragged_lengths_together() {
        let err = Schedule::parse([
            ("buttonPressed", "1010"),
            ("closedSwitch", "00"),
            ("openedSwitch", "0000"),
        ])
        .unwrap_err();

        assert_eq!(
            err.errors,
            vec![
                SignalError::MissingSignal {
                    signal: Signal::Sensor
                },
                SignalError::LengthMismatch {
                    signal: Signal::ClosedSwitch,
                    expected: 4,
                    found: 2,
                },
            ]
        );
        assert!(err.to_string().starts_with("Malformed schedule: Signal 'sensor'"));
    }

    #[test]
    fn collects_from_frames() {
        let schedule: Schedule = [InputFrame::idle(), InputFrame::only(Signal::Sensor)]
            .into_iter()
            .collect();

        assert_eq!(schedule.len(), 2);
        assert_eq!(schedule.pattern(Signal::Sensor), "01");
        assert_eq!((&schedule).into_iter().count(), 2);
    }

    #[test]
    fn serializes_as_frame_list() {
        let schedule = Schedule::from_frames(vec![InputFrame::only(Signal::ClosedSwitch)]);
        let json = serde_json::to_string(&schedule).unwrap();
        assert!(json.starts_with("[{"));

        let parsed: Schedule = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, schedule);
    }
}
