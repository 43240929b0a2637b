// Input validation errors for the store boundary

use thiserror::Error;

/// Rejection of malformed input at the store boundary.
///
/// "Not found" is deliberately NOT an error: lookups return `Option`, deletes
/// return `bool`. `StoreError` only covers input that must not enter the
/// collections in the first place.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A required string field was empty or whitespace-only.
    #[error("field `{field}` must not be empty")]
    EmptyField { field: &'static str },

    /// `estimated_hours` must be a positive number when present.
    #[error("field `{field}` must be positive, got {value}")]
    NonPositiveNumber { field: &'static str, value: f64 },

    /// An enum field was given a spelling outside its declared set.
    #[error("invalid value for `{field}`: {value}")]
    InvalidEnumValue { field: &'static str, value: String },
}
