//! Build errors for simulators and simulation configs.

use crate::schedule::ScheduleError;
use thiserror::Error;

/// Errors that can occur when building a simulator.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Schedule not specified. Call .schedule(schedule) before .build()")]
    MissingSchedule,

    #[error(transparent)]
    InvalidSchedule(#[from] ScheduleError),

    #[error("Invalid simulation config: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}
