use thiserror::Error;

use crate::time::MediaTime;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("minimum duration must be non-negative, got {0}s")]
    NegativeMinimumDuration(f64),

    #[error("invalid duration: {0}s")]
    InvalidDuration(f64),

    #[error("maximum duration {maximum} is shorter than minimum duration {minimum}")]
    MaximumBelowMinimum {
        minimum: MediaTime,
        maximum: MediaTime,
    },

    #[error("handle width must be finite and non-negative, got {0}")]
    InvalidHandleWidth(f32),

    #[error("control width must be finite and non-negative, got {0}")]
    InvalidWidth(f32),

    #[error("invalid time range: start {start} > end {end}")]
    InvalidTimeRange { start: MediaTime, end: MediaTime },

    #[error("unsupported config version {found} (supported: {supported})")]
    UnsupportedConfigVersion {
        found: semver::Version,
        supported: semver::Version,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
