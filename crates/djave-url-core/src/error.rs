//! Core error types for djave-url.
//!
//! [`UrlError`] covers every failure the URL helpers can surface. Date token
//! failures carry a dedicated [`DateParseError`] so callers can tell a
//! malformed token from one whose day could not be repaired.

use std::fmt;

use thiserror::Error;

/// Why a date token could not be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateParseErrorKind {
    /// The token is not three `-`-separated numeric components.
    Malformed,
    /// The year component is not four ASCII digits.
    InvalidYear,
    /// The month component is not in `1..=12`.
    InvalidMonth,
    /// The day component is not in `1..=31`.
    InvalidDay,
    /// The day never fit a month, even after stepping back to January.
    MonthUnderflow,
}

impl fmt::Display for DateParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Malformed => "does not match format YYYY-MM-DD",
            Self::InvalidYear => "year must be four digits",
            Self::InvalidMonth => "month must be between 1 and 12",
            Self::InvalidDay => "day must be between 1 and 31",
            Self::MonthUnderflow => "day is out of range for every earlier month",
        };
        f.write_str(text)
    }
}

/// A date token that could not be turned into a calendar date.
///
/// # Examples
///
/// ```
/// use djave_url_core::error::{DateParseError, DateParseErrorKind};
///
/// let err = DateParseError::new("not-a-date", DateParseErrorKind::Malformed);
/// assert_eq!(err.input(), "not-a-date");
/// assert!(err.to_string().contains("not-a-date"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid date '{input}': {kind}")]
pub struct DateParseError {
    input: String,
    kind: DateParseErrorKind,
}

impl DateParseError {
    /// Creates a new `DateParseError` for the given token.
    pub fn new(input: impl Into<String>, kind: DateParseErrorKind) -> Self {
        Self {
            input: input.into(),
            kind,
        }
    }

    /// Returns the token as originally supplied.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Returns the failure category.
    pub const fn kind(&self) -> DateParseErrorKind {
        self.kind
    }
}

/// The primary error type for djave-url.
#[derive(Error, Debug)]
pub enum UrlError {
    /// An operation expecting a path or a request-like value got something else.
    #[error("Not sure what to do with {0}")]
    InputType(String),

    /// A date token could not be decoded.
    #[error(transparent)]
    DateParse(#[from] DateParseError),

    /// Reverse routing found no pattern for the name and arguments.
    #[error("No reverse match: {0}")]
    NoReverseMatch(String),

    /// A settings source could not be read or parsed.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// A convenience type alias for `Result<T, UrlError>`.
pub type UrlResult<T> = Result<T, UrlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_parse_error_display() {
        let err = DateParseError::new("2017-13-01", DateParseErrorKind::InvalidMonth);
        assert_eq!(
            err.to_string(),
            "invalid date '2017-13-01': month must be between 1 and 12"
        );
        assert_eq!(err.kind(), DateParseErrorKind::InvalidMonth);
    }

    #[test]
    fn test_date_parse_error_converts_transparently() {
        let err: UrlError = DateParseError::new("x", DateParseErrorKind::Malformed).into();
        assert!(matches!(err, UrlError::DateParse(_)));
        assert_eq!(
            err.to_string(),
            "invalid date 'x': does not match format YYYY-MM-DD"
        );
    }

    #[test]
    fn test_input_type_display() {
        let err = UrlError::InputType("an empty path".into());
        assert_eq!(err.to_string(), "Not sure what to do with an empty path");
    }
}
