use thiserror::Error;

/// Error type for the strict date-parsing surface.
///
/// The forecast pipeline never returns errors; this exists for import
/// validators that need to detect bad dates instead of silently absorbing
/// them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseDateError {
    #[error("empty date string")]
    Empty,
    #[error("invalid ISO date: {0}")]
    InvalidIso(String),
    #[error("unknown month abbreviation: {0}")]
    UnknownMonth(String),
    #[error("unrecognized date format: {0}")]
    Unrecognized(String),
}
