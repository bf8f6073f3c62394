//! Error types for the readout library.
//!
//! This module provides the [`Error`] enum and [`Result`] type alias used
//! throughout the library for error handling.

use thiserror::Error;

use crate::duration::TimeUnit;

/// Error type for readout operations.
///
/// Every formatter is a pure computation, so an error always means the input or
/// the options were bad. Use [`Error::kind`] to tell caller mistakes in the
/// value ([`ErrorKind::InvalidArgument`]) from misconfigured options
/// ([`ErrorKind::PreconditionViolation`]).
#[derive(Error, Debug)]
pub enum Error {
    /// An input string was empty or only whitespace.
    #[error("input string cannot be empty")]
    EmptyInput,

    /// An input string could not be parsed as a number.
    #[error("unable to parse the input string: {0}")]
    Parse(String),

    /// The value cannot be represented as an exact decimal (NaN, infinity, or out of range).
    #[error("unsupported numeric value: {0}")]
    Unsupported(String),

    /// A ratio was requested against a zero total.
    #[error("cannot compute a ratio against a zero total")]
    DivisionByZero,

    /// Scaling the value overflowed the decimal range.
    #[error("arithmetic overflow while scaling {0}")]
    Overflow(String),

    /// Durations must not be negative.
    #[error("duration cannot be negative: {0} seconds")]
    NegativeDuration(String),

    /// A duration field is outside its unit's range, e.g. 24 hours.
    #[error("{unit} value {value} must be below {limit}")]
    TimeField {
        unit: TimeUnit,
        value: u64,
        limit: u64,
    },

    /// No grouping rules are known for the locale tag.
    #[error("unknown locale: {0}")]
    UnknownLocale(String),

    /// The requested number of fractional digits is outside `0..=max`.
    #[error("decimal places must be between 0 and {max}, got {got}")]
    DecimalPlaces {
        /// The rejected value.
        got: i64,
        /// The largest supported value.
        max: u32,
    },

    /// A unit table is empty, unsorted, or has non-positive or duplicate thresholds.
    #[error("invalid unit table: {0}")]
    InvalidUnitTable(String),

    /// A configuration document could not be deserialized.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// A template rendering error occurred.
    ///
    /// This happens when a template has invalid syntax, references undefined
    /// variables, or a formatting filter rejected its input.
    #[error(transparent)]
    Tera(#[from] tera::Error),
}

/// Broad classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumIs)]
pub enum ErrorKind {
    /// The value passed to a formatter was unusable.
    InvalidArgument,
    /// The options or tables the formatter was built with break its contract.
    PreconditionViolation,
    /// A configuration document was malformed.
    Config,
    /// A template failed to render.
    Template,
}

impl Error {
    /// Returns the class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::EmptyInput
            | Error::Parse(_)
            | Error::Unsupported(_)
            | Error::DivisionByZero
            | Error::Overflow(_)
            | Error::NegativeDuration(_)
            | Error::TimeField { .. }
            | Error::UnknownLocale(_) => ErrorKind::InvalidArgument,
            Error::DecimalPlaces { .. } | Error::InvalidUnitTable(_) => {
                ErrorKind::PreconditionViolation
            }
            Error::Json(_) => ErrorKind::Config,
            Error::Tera(_) => ErrorKind::Template,
        }
    }
}

/// A specialized `Result` type for readout operations.
///
/// This is defined as `std::result::Result<T, readout::Error>` for convenience.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        assert!(Error::EmptyInput.kind().is_invalid_argument());
        assert!(Error::DivisionByZero.kind().is_invalid_argument());
        assert!(
            Error::NegativeDuration("-1".into())
                .kind()
                .is_invalid_argument()
        );
        assert!(
            Error::DecimalPlaces { got: -1, max: 28 }
                .kind()
                .is_precondition_violation()
        );
        assert!(
            Error::InvalidUnitTable("empty".into())
                .kind()
                .is_precondition_violation()
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Error::Parse("abc".into()).to_string(),
            "unable to parse the input string: abc"
        );
        assert_eq!(
            Error::DecimalPlaces { got: 30, max: 28 }.to_string(),
            "decimal places must be between 0 and 28, got 30"
        );
        assert_eq!(
            Error::TimeField {
                unit: TimeUnit::Hour,
                value: 25,
                limit: 24
            }
            .to_string(),
            "hour value 25 must be below 24"
        );
    }

    #[test]
    fn test_json_error_is_config() {
        let err: Error = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert_eq!(err.kind(), ErrorKind::Config);
    }
}
