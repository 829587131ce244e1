//! Error types for slot-engine operations.

use thiserror::Error;

use crate::interval::IntervalKind;

/// Input-validation failures. The engine never returns a partial slot list
/// alongside one of these.
#[derive(Error, Debug, PartialEq)]
pub enum SlotError {
    #[error("Invalid duration: {0} minutes (must be positive)")]
    InvalidDuration(i64),

    #[error("Invalid quantity: {0} (must be at least 1)")]
    InvalidQuantity(i64),

    #[error("Invalid step: {0} minutes (must be positive)")]
    InvalidStep(u32),

    #[error("Invalid time: {0}")]
    InvalidTime(String),

    /// An interval whose start is not strictly before its end.
    #[error("Invalid {kind} interval: start {start} is not before end {end}")]
    InvalidInterval {
        kind: IntervalKind,
        start: String,
        end: String,
    },

    #[error("JSON parse error: {0}")]
    Json(String),
}

impl From<serde_json::Error> for SlotError {
    fn from(err: serde_json::Error) -> Self {
        SlotError::Json(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SlotError>;
