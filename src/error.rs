//! Error types for stage_events.

use std::fmt;

/// Result type alias for event normalization.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for event normalization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// A touch point was not found in the touch list of the event it was
    /// claimed to belong to.
    InvalidTouchReference {
        /// Platform identifier of the orphaned touch point.
        identifier: i64,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTouchReference { identifier } => {
                write!(
                    f,
                    "touch point {identifier} is not in its parent event's touch list"
                )
            }
        }
    }
}

impl std::error::Error for Error {}
