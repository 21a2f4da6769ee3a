// crates/kaipop-core/src/error.rs
use thiserror::Error;

/// Errors produced while turning external city records into [`crate::City`]
/// values.
///
/// Aggregation itself never fails; only decoding does.
#[derive(Debug, Error)]
pub enum KaiError {
    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// `population` was present but is not a non-negative integer.
    #[error("record {index}: population must be a non-negative integer, got {value}")]
    InvalidPopulation { index: usize, value: String },

    /// A record that is not a JSON object.
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, KaiError>;
