//! Error taxonomy shared by the repository and calculator layers.

use thiserror::Error;

/// Recoverable failures surfaced to the presentation boundary.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum HandicapError {
    /// The course dataset is missing or cannot be read.
    #[error("course data unavailable: {0}")]
    DataUnavailable(String),
    /// The course dataset was read but does not have the expected shape.
    #[error("course data has an invalid format: {0}")]
    InvalidFormat(String),
    /// No course variant exists for the requested category and hole count.
    #[error("no {holes} course found for category '{category}'")]
    NoMatchingVariant {
        /// Requested category, e.g. `Herren`.
        category: String,
        /// Requested hole count label.
        holes: String,
    },
    /// The tee color is not present in the selected variant.
    #[error("tee '{0}' is not available for this course")]
    NoMatchingTee(String),
    /// A dataset lookup was requested without a category or tee.
    #[error("no {0} selected")]
    MissingSelection(&'static str),
    /// A numeric input lies outside its accepted bounds.
    #[error("{field} must be between {min} and {max} (got {value})")]
    OutOfRange {
        /// Human-readable field name.
        field: &'static str,
        /// Rejected value.
        value: f64,
        /// Inclusive lower bound.
        min: f64,
        /// Inclusive upper bound.
        max: f64,
    },
}

/// Convenience alias for results produced by this crate.
pub type Result<T, E = HandicapError> = std::result::Result<T, E>;
