//! Parse `"<number><suffix>"` strings into a magnitude and a unit kind

use pest::Parser;
use pest::error::InputLocation;
use pest::iterators::Pair;
use pest_derive::Parser;

use crate::errors::UnitError;
use crate::types::UnitKind;

#[derive(Parser)]
#[grammar = "unit.pest"]
struct UnitParser;

/// Split `text` into its numeric magnitude and unit kind.
///
/// The magnitude is returned as written, before any pixel conversion.
pub(crate) fn parse_length(text: &str) -> Result<(f64, UnitKind), UnitError> {
    let pairs = UnitParser::parse(Rule::length, text).map_err(|e| {
        let span = match e.location {
            InputLocation::Pos(pos) => (pos, 0).into(),
            InputLocation::Span((start, end)) => (start, end - start).into(),
        };
        UnitError::invalid_number(text, "expected a number before the unit suffix", span)
    })?;

    let mut value = None;
    let mut kind = None;
    for pair in pairs {
        for inner in pair.into_inner() {
            match inner.as_rule() {
                Rule::number => value = Some(parse_number(text, inner)?),
                Rule::suffix => kind = Some(parse_suffix(text, inner)?),
                _ => {}
            }
        }
    }

    match (value, kind) {
        (Some(value), Some(kind)) => {
            crate::log::debug!(text, value, %kind, "parsed unit");
            Ok((value, kind))
        }
        (None, _) => Err(UnitError::invalid_number(
            text,
            "expected a number before the unit suffix",
            (0, 0).into(),
        )),
        (Some(_), None) => Err(UnitError::invalid_unit_kind(text, text.len())),
    }
}

fn parse_number(text: &str, pair: Pair<Rule>) -> Result<f64, UnitError> {
    let span = pair.as_span();
    pair.as_str().parse::<f64>().map_err(|e| {
        let span = (span.start(), span.end() - span.start()).into();
        UnitError::invalid_number(text, e.to_string(), span)
    })
}

fn parse_suffix(text: &str, pair: Pair<Rule>) -> Result<UnitKind, UnitError> {
    UnitKind::from_suffix(pair.as_str())
        .ok_or_else(|| UnitError::invalid_unit_kind(text, pair.as_span().start()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_integer_rem() {
        assert_eq!(parse_length("10rem").unwrap(), (10.0, UnitKind::Rem));
    }

    #[test]
    fn parse_each_suffix() {
        assert_eq!(parse_length("3px").unwrap(), (3.0, UnitKind::Px));
        assert_eq!(parse_length("50vh").unwrap(), (50.0, UnitKind::Vh));
        assert_eq!(parse_length("25vw").unwrap(), (25.0, UnitKind::Vw));
    }

    #[test]
    fn parse_fraction_and_sign() {
        assert_eq!(parse_length("-2.5px").unwrap(), (-2.5, UnitKind::Px));
        assert_eq!(parse_length("+.5vw").unwrap(), (0.5, UnitKind::Vw));
        assert_eq!(parse_length("10.0rem").unwrap(), (10.0, UnitKind::Rem));
    }

    #[test]
    fn parse_exponent() {
        assert_eq!(parse_length("1e2px").unwrap(), (100.0, UnitKind::Px));
        assert_eq!(parse_length("2.5E-1rem").unwrap(), (0.25, UnitKind::Rem));
    }

    #[test]
    fn parse_non_finite_magnitudes() {
        assert_eq!(parse_length("Infinitypx").unwrap(), (f64::INFINITY, UnitKind::Px));
        assert_eq!(parse_length("-Infinityrem").unwrap(), (f64::NEG_INFINITY, UnitKind::Rem));
        let (value, kind) = parse_length("NaNvw").unwrap();
        assert!(value.is_nan());
        assert_eq!(kind, UnitKind::Vw);
    }

    #[test]
    fn non_finite_keyword_is_case_sensitive() {
        assert!(matches!(parse_length("infinitypx"), Err(UnitError::InvalidNumber { .. })));
        assert!(matches!(parse_length("nanpx"), Err(UnitError::InvalidNumber { .. })));
    }

    #[test]
    fn exponent_marker_without_digits_belongs_to_suffix() {
        let err = parse_length("5em").unwrap_err();
        assert_eq!(err.suffix(), Some("em"));
    }

    #[test]
    fn unknown_suffix_is_reported() {
        let err = parse_length("5pt").unwrap_err();
        assert!(matches!(err, UnitError::InvalidUnitKind { ref suffix, .. } if suffix == "pt"));
    }

    #[test]
    fn suffix_is_case_sensitive() {
        assert_eq!(parse_length("5PX").unwrap_err().suffix(), Some("PX"));
    }

    #[test]
    fn missing_suffix_is_an_empty_unit_kind() {
        assert_eq!(parse_length("10").unwrap_err().suffix(), Some(""));
    }

    #[test]
    fn missing_number_is_invalid_number() {
        assert!(matches!(parse_length("rem"), Err(UnitError::InvalidNumber { .. })));
        assert!(matches!(parse_length(""), Err(UnitError::InvalidNumber { .. })));
    }

    #[test]
    fn surrounding_whitespace_is_rejected() {
        assert!(parse_length(" 10px").is_err());
        assert_eq!(parse_length("10px ").unwrap_err().suffix(), Some("px "));
    }
}
