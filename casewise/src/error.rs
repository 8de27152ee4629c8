use thiserror::Error;

/// Error kind returned by the validating conversions,
/// [`to_camel_case`](crate::to_camel_case) and
/// [`to_dot_case`](crate::to_dot_case).
///
/// Validation is fail-fast: the first failing check wins and no conversion
/// work happens, so a failed call never produces a partial result.
/// [`to_slug`](crate::to_slug) performs no validation and does not use this
/// type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// The input was empty or contained only whitespace.
    #[error("input must be a non-empty string")]
    InvalidInput,
    /// The input was a numeric literal.
    #[error("input must not be numeric")]
    NumericInput,
    /// Cleaning stripped every character, leaving nothing to convert.
    #[error("input must contain at least one valid word")]
    NoValidWords,
}
