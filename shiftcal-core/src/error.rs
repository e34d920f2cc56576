//! Error types for the shiftcal ecosystem.

use thiserror::Error;

/// Errors that can occur in shiftcal operations.
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Invalid time slot '{0}'. Expected morning, day or night")]
    InvalidSlot(String),

    #[error("Invalid month '{0}'. Expected YYYY-MM")]
    InvalidMonth(String),

    #[error("Invalid side '{0}'. Expected live or simulation")]
    InvalidSide(String),
}

/// Result type alias for shiftcal operations.
pub type ScheduleResult<T> = Result<T, ScheduleError>;
