//! Errors raised at the input boundary (loading and validating definitions)
//!
//! The projection and amortization functions themselves never fail; they
//! return empty output for unusable input instead.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid item {id:?}: {reason}")]
    InvalidItem { id: String, reason: String },

    #[error("duplicate item id {0:?}")]
    DuplicateId(String),

    #[error("unsupported horizon of {0} periods (expected 6, 12, 24, 36 or 60)")]
    UnsupportedHorizon(u32),

    #[error("unsupported payment frequency {0:?} (expected monthly, quarterly or annually)")]
    UnsupportedFrequency(String),

    #[error("unknown input format for {0:?} (expected .csv or .json)")]
    UnknownFormat(String),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
