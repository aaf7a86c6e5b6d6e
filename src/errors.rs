//! Error types with rich diagnostics using miette
//!
//! Parse errors carry the text that was parsed plus a span over the offending
//! part, so a `miette::Report` can point straight at it.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Name used for the source snippet attached to parse diagnostics
pub(crate) const SOURCE_NAME: &str = "<unit>";

// ============================================================================
// Parse Errors
// ============================================================================

/// Errors that occur while building a [`Unit`](crate::Unit) from text
#[derive(Error, Diagnostic, Debug)]
pub enum UnitError {
    #[error("`{suffix}` is not a valid unit type")]
    #[diagnostic(
        code(unitvec::parse::invalid_unit_kind),
        help("expected one of `px`, `rem`, `vh` or `vw` (suffixes are case-sensitive)")
    )]
    InvalidUnitKind {
        suffix: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("unknown unit")]
        span: SourceSpan,
    },

    #[error("invalid number: {message}")]
    #[diagnostic(code(unitvec::parse::invalid_number))]
    InvalidNumber {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("expected a number here")]
        span: SourceSpan,
    },
}

impl UnitError {
    pub(crate) fn invalid_unit_kind(text: &str, start: usize) -> Self {
        let suffix = &text[start..];
        UnitError::InvalidUnitKind {
            suffix: suffix.to_string(),
            src: NamedSource::new(SOURCE_NAME, text.to_string()),
            span: (start, suffix.len()).into(),
        }
    }

    pub(crate) fn invalid_number(text: &str, message: impl Into<String>, span: SourceSpan) -> Self {
        UnitError::InvalidNumber {
            message: message.into(),
            src: NamedSource::new(SOURCE_NAME, text.to_string()),
            span,
        }
    }

    /// The offending suffix, if this is an `InvalidUnitKind` error
    pub fn suffix(&self) -> Option<&str> {
        match self {
            UnitError::InvalidUnitKind { suffix, .. } => Some(suffix),
            UnitError::InvalidNumber { .. } => None,
        }
    }
}

// ============================================================================
// Environment Errors
// ============================================================================

/// Rejected conversion factor
#[derive(Error, Diagnostic, Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    #[error("value is NaN")]
    #[diagnostic(code(unitvec::env::nan))]
    NaN,

    #[error("value is infinite")]
    #[diagnostic(code(unitvec::env::infinite))]
    Infinite,

    #[error("value is zero")]
    #[diagnostic(code(unitvec::env::zero))]
    Zero,

    #[error("value is negative")]
    #[diagnostic(code(unitvec::env::negative))]
    Negative,
}

impl NumericError {
    /// Validate a strictly positive, finite conversion factor.
    pub(crate) fn check_positive(val: f64) -> Result<f64, NumericError> {
        if val.is_nan() {
            Err(NumericError::NaN)
        } else if val.is_infinite() {
            Err(NumericError::Infinite)
        } else if val == 0.0 {
            Err(NumericError::Zero)
        } else if val < 0.0 {
            Err(NumericError::Negative)
        } else {
            Ok(val)
        }
    }
}
