//! Declarative simulation configuration.

use crate::builder::error::BuildError;
use crate::builder::simulator::SimulatorBuilder;
use crate::core::DoorState;
use crate::enforcement::InputPolicy;
use crate::schedule::REFERENCE_PATTERNS;
use crate::simulation::Simulator;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Serializable description of a simulation run.
///
/// ```json
/// {
///   "signals": {
///     "buttonPressed": "10101100",
///     "openedSwitch": "01000000",
///     "closedSwitch": "00000010",
///     "sensor": "00010000"
///   },
///   "initial": "Closed",
///   "policy": "warn"
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// One `'0'`/`'1'` pattern per input line, keyed by signal name
    pub signals: BTreeMap<String, String>,

    /// Register value for cycle 0. Any seed other than `Closed` also
    /// changes the outputs reported for cycle 0.
    #[serde(default)]
    pub initial: DoorState,

    #[serde(default)]
    pub policy: InputPolicy,
}

impl SimulationConfig {
    /// The reference schedule with default settings.
    pub fn reference() -> Self {
        Self {
            signals: REFERENCE_PATTERNS
                .iter()
                .map(|(signal, pattern)| (signal.name().to_string(), pattern.to_string()))
                .collect(),
            initial: DoorState::Closed,
            policy: InputPolicy::Trust,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, BuildError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// A builder preloaded with this configuration.
    /// Returns an error if the signal patterns are malformed.
    pub fn into_builder(self) -> Result<SimulatorBuilder, BuildError> {
        let builder = SimulatorBuilder::new()
            .initial(self.initial)
            .policy(self.policy)
            .patterns(
                self.signals
                    .iter()
                    .map(|(name, pattern)| (name.as_str(), pattern.as_str())),
            )?;
        Ok(builder)
    }

    pub fn build(self) -> Result<Simulator, BuildError> {
        self.into_builder()?.build()
    }
}
