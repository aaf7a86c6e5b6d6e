//! Lengths tagged with a unit kind, normalized to pixels.
//!
//! A [`Unit`] stores its magnitude in the pixel basis. Relative kinds (`rem`,
//! `vh`, `vw`) are resolved against an [`Environment`] snapshot once, at
//! construction, and never re-based afterwards. Every operation returns a new
//! value; results of arithmetic are always labelled [`UnitKind::Px`].

use std::fmt;
use std::iter::{Product, Sum};
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::env::Environment;
use crate::errors::UnitError;
use crate::parse::parse_length;
use crate::types::UnitKind;

/// A length in one of the four supported units.
///
/// Equality and ordering compare pixel values only, so `16px == 1rem` under a
/// 16px root font.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unit {
    px: f64,
    kind: UnitKind,
}

impl Unit {
    pub const ZERO: Unit = Unit::px(0.0);
    pub const ONE: Unit = Unit::px(1.0);

    /// A pixel length. Needs no environment.
    #[inline]
    pub const fn px(value: f64) -> Unit {
        Unit {
            px: value,
            kind: UnitKind::Px,
        }
    }

    /// Build a length of `kind`, converting to pixels with the current
    /// conversion factors of `env`.
    pub fn new<E: Environment + ?Sized>(value: f64, kind: UnitKind, env: &E) -> Unit {
        let px = match kind {
            UnitKind::Px => value,
            _ => kind.scale_to_px(value, &env.snapshot()),
        };
        crate::log::trace!(value, %kind, px, "resolved unit to pixels");
        Unit { px, kind }
    }

    /// Parse `"<number><suffix>"`, e.g. `"10rem"` or `"-4.5px"`.
    ///
    /// Fails with [`UnitError::InvalidUnitKind`] when the suffix is not one of
    /// `px`, `rem`, `vh`, `vw`.
    pub fn parse<E: Environment + ?Sized>(text: &str, env: &E) -> Result<Unit, UnitError> {
        let (value, kind) = parse_length(text)?;
        Ok(Unit::new(value, kind, env))
    }

    /// Magnitude in the pixel basis
    #[inline]
    pub fn value(self) -> f64 {
        self.px
    }

    /// Kind the length was created with. Only a label: arithmetic ignores it.
    #[inline]
    pub fn kind(self) -> UnitKind {
        self.kind
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.px.is_finite()
    }

    // ------------------------------------------------------------------
    // Conversions
    // ------------------------------------------------------------------

    /// Magnitude expressed in `kind` under the current factors of `env`.
    pub fn magnitude_in<E: Environment + ?Sized>(self, kind: UnitKind, env: &E) -> f64 {
        match kind {
            UnitKind::Px => self.px,
            _ => kind.scale_from_px(self.px, &env.snapshot()),
        }
    }

    /// Render as `"<number><suffix>"` in `kind`.
    pub fn to_kind<E: Environment + ?Sized>(self, kind: UnitKind, env: &E) -> String {
        format!("{}{}", self.magnitude_in(kind, env), kind.suffix())
    }

    pub fn to_px(self) -> String {
        format!("{}px", self.px)
    }

    pub fn to_rem<E: Environment + ?Sized>(self, env: &E) -> String {
        self.to_kind(UnitKind::Rem, env)
    }

    pub fn to_vh<E: Environment + ?Sized>(self, env: &E) -> String {
        self.to_kind(UnitKind::Vh, env)
    }

    pub fn to_vw<E: Environment + ?Sized>(self, env: &E) -> String {
        self.to_kind(UnitKind::Vw, env)
    }

    // ------------------------------------------------------------------
    // Arithmetic
    // ------------------------------------------------------------------

    pub fn add(self, other: Unit) -> Unit {
        Unit::sum([self, other])
    }

    pub fn subtract(self, other: Unit) -> Unit {
        Unit::difference(self, [other])
    }

    /// Product of both pixel magnitudes.
    pub fn multiply(self, other: Unit) -> Unit {
        Unit::product([self, other])
    }

    pub fn divide(self, other: Unit) -> Unit {
        Unit::quotient(self, [other])
    }

    pub fn pow(self, exponent: f64) -> Unit {
        Unit::px(self.px.powf(exponent))
    }

    // ------------------------------------------------------------------
    // Aggregates
    // ------------------------------------------------------------------

    /// Sum of all pixel magnitudes; `0px` when empty.
    pub fn sum(units: impl IntoIterator<Item = Unit>) -> Unit {
        checked(units.into_iter().fold(0.0, |acc, u| acc + u.px), "sum")
    }

    /// `first` minus the sum of `rest`.
    pub fn difference(first: Unit, rest: impl IntoIterator<Item = Unit>) -> Unit {
        checked(first.px - Unit::sum(rest).px, "difference")
    }

    /// Product of all pixel magnitudes; `1px` when empty.
    pub fn product(units: impl IntoIterator<Item = Unit>) -> Unit {
        checked(units.into_iter().fold(1.0, |acc, u| acc * u.px), "product")
    }

    /// `first` divided by the product of `rest`.
    ///
    /// A zero divisor yields an infinite or NaN result rather than an error.
    pub fn quotient(first: Unit, rest: impl IntoIterator<Item = Unit>) -> Unit {
        checked(first.px / Unit::product(rest).px, "quotient")
    }
}

/// Wrap an aggregate result, noting when it has degenerated.
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn checked(px: f64, op: &'static str) -> Unit {
    if !px.is_finite() {
        crate::log::warn!(op, px, "non-finite unit result");
    }
    Unit::px(px)
}

impl PartialEq for Unit {
    fn eq(&self, other: &Unit) -> bool {
        self.px == other.px
    }
}

impl PartialOrd for Unit {
    fn partial_cmp(&self, other: &Unit) -> Option<std::cmp::Ordering> {
        self.px.partial_cmp(&other.px)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.px)
    }
}

impl Add for Unit {
    type Output = Unit;
    fn add(self, rhs: Unit) -> Unit { Unit::add(self, rhs) }
}
impl Sub for Unit {
    type Output = Unit;
    fn sub(self, rhs: Unit) -> Unit { self.subtract(rhs) }
}
impl Mul for Unit {
    type Output = Unit;
    fn mul(self, rhs: Unit) -> Unit { self.multiply(rhs) }
}
impl Div for Unit {
    type Output = Unit;
    fn div(self, rhs: Unit) -> Unit { self.divide(rhs) }
}
impl Mul<f64> for Unit {
    type Output = Unit;
    fn mul(self, rhs: f64) -> Unit { Unit::px(self.px * rhs) }
}
impl Div<f64> for Unit {
    type Output = Unit;
    fn div(self, rhs: f64) -> Unit { Unit::px(self.px / rhs) }
}

impl Neg for Unit {
    type Output = Unit;
    fn neg(self) -> Unit { Unit::px(-self.px) }
}

impl Sum for Unit {
    fn sum<I: Iterator<Item = Unit>>(iter: I) -> Unit {
        Unit::sum(iter)
    }
}

impl Product for Unit {
    fn product<I: Iterator<Item = Unit>>(iter: I) -> Unit {
        Unit::product(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::Metrics;

    const EPS: f64 = 1e-9;

    fn env() -> Metrics {
        Metrics::default().with_root_font_size(16.0).with_viewport(1000.0, 500.0)
    }

    // ==================== Construction ====================

    #[test]
    fn px_is_identity() {
        let u = Unit::new(12.5, UnitKind::Px, &env());
        assert_eq!(u.value(), 12.5);
        assert_eq!(u.kind(), UnitKind::Px);
    }

    #[test]
    fn relative_kinds_resolve_to_pixels() {
        let e = env();
        assert_eq!(Unit::new(2.0, UnitKind::Rem, &e).value(), 32.0);
        assert_eq!(Unit::new(10.0, UnitKind::Vh, &e).value(), 50.0);
        assert_eq!(Unit::new(10.0, UnitKind::Vw, &e).value(), 100.0);
    }

    #[test]
    fn kind_is_kept_as_label() {
        let u = Unit::new(1.0, UnitKind::Vw, &env());
        assert_eq!(u.kind(), UnitKind::Vw);
    }

    #[test]
    fn parse_resolves_rem() {
        let u = Unit::parse("10rem", &env()).unwrap();
        assert_eq!(u.value(), 160.0);
        assert_eq!(u.kind(), UnitKind::Rem);
        assert_eq!(u.to_rem(&env()), "10rem");
    }

    #[test]
    fn parse_keeps_non_finite_values() {
        let u = Unit::parse("Infinityrem", &env()).unwrap();
        assert_eq!(u.value(), f64::INFINITY);
        assert!(!u.is_finite());
        assert!(Unit::parse("NaNvh", &env()).unwrap().value().is_nan());
    }

    #[test]
    fn parse_rejects_unknown_suffix() {
        let err = Unit::parse("5pt", &env()).unwrap_err();
        assert_eq!(err.suffix(), Some("pt"));
    }

    #[test]
    fn conversion_is_frozen_at_construction() {
        let before = env();
        let u = Unit::new(1.0, UnitKind::Rem, &before);
        let after = before.with_root_font_size(20.0);
        assert_eq!(u.value(), 16.0);
        assert_eq!(u.to_rem(&after), "0.8rem");
        assert_ne!(u, Unit::new(1.0, UnitKind::Rem, &after));
    }

    // ==================== Conversions ====================

    #[test]
    fn round_trip_every_kind() {
        let e = env();
        for kind in UnitKind::ALL {
            for m in [0.0, 1.0, -3.25, 42.0, 1e-3] {
                let back = Unit::new(m, kind, &e).magnitude_in(kind, &e);
                assert!((back - m).abs() < EPS, "{m}{kind} came back as {back}");
            }
        }
    }

    #[test]
    fn textual_forms() {
        let e = env();
        let u = Unit::px(50.0);
        assert_eq!(u.to_px(), "50px");
        assert_eq!(u.to_rem(&e), "3.125rem");
        assert_eq!(u.to_vh(&e), "10vh");
        assert_eq!(u.to_vw(&e), "5vw");
        assert_eq!(u.to_string(), "50px");
    }

    // ==================== Equality ====================

    #[test]
    fn equality_ignores_kind() {
        let e = env();
        assert_eq!(Unit::new(1.0, UnitKind::Rem, &e), Unit::px(16.0));
        assert!(Unit::px(1.0) < Unit::new(1.0, UnitKind::Rem, &e));
    }

    // ==================== Arithmetic ====================

    #[test]
    fn add_and_subtract_are_pixel_based() {
        let e = env();
        let a = Unit::new(1.0, UnitKind::Rem, &e);
        let b = Unit::new(10.0, UnitKind::Vw, &e);
        assert_eq!(a.add(b).value(), 116.0);
        assert_eq!(a.subtract(b).value(), -84.0);
        assert_eq!(a.add(b).kind(), UnitKind::Px);
    }

    #[test]
    fn multiply_is_a_true_product() {
        let a = Unit::px(3.0);
        let b = Unit::px(4.0);
        assert_eq!(a.multiply(b).value(), a.value() * b.value());
        assert_eq!((a * b).value(), 12.0);
    }

    #[test]
    fn divide_is_a_quotient() {
        assert_eq!(Unit::px(12.0).divide(Unit::px(4.0)).value(), 3.0);
        assert_eq!((Unit::px(12.0) / Unit::px(4.0)).value(), 3.0);
    }

    #[test]
    fn divide_by_zero_is_not_an_error() {
        assert_eq!(Unit::px(1.0).divide(Unit::ZERO).value(), f64::INFINITY);
        assert!(Unit::ZERO.divide(Unit::ZERO).value().is_nan());
        assert!(!Unit::px(1.0).divide(Unit::ZERO).is_finite());
    }

    #[test]
    fn pow_is_pixel_anchored() {
        let u = Unit::new(1.0, UnitKind::Rem, &env()).pow(2.0);
        assert_eq!(u.value(), 256.0);
        assert_eq!(u.kind(), UnitKind::Px);
        assert_eq!(Unit::px(9.0).pow(0.5).value(), 3.0);
    }

    #[test]
    fn scalar_ops() {
        assert_eq!((Unit::px(3.0) * 2.0).value(), 6.0);
        assert_eq!((Unit::px(3.0) / 2.0).value(), 1.5);
        assert_eq!((-Unit::px(3.0)).value(), -3.0);
    }

    // ==================== Aggregates ====================

    #[test]
    fn empty_aggregates_are_identities() {
        assert_eq!(Unit::sum([]).value(), 0.0);
        assert_eq!(Unit::product([]).value(), 1.0);
    }

    #[test]
    fn aggregates_over_many_operands() {
        let units = [Unit::px(2.0), Unit::px(3.0), Unit::px(4.0)];
        assert_eq!(Unit::sum(units).value(), 9.0);
        assert_eq!(Unit::product(units).value(), 24.0);
        assert_eq!(Unit::difference(Unit::px(10.0), units).value(), 1.0);
        assert_eq!(Unit::quotient(Unit::px(48.0), units).value(), 2.0);
    }

    #[test]
    fn difference_and_quotient_with_no_rest() {
        assert_eq!(Unit::difference(Unit::px(5.0), []).value(), 5.0);
        assert_eq!(Unit::quotient(Unit::px(5.0), []).value(), 5.0);
    }

    #[test]
    fn iterator_sum_and_product() {
        let total: Unit = (1..=4).map(|i| Unit::px(i as f64)).sum();
        let prod: Unit = (1..=4).map(|i| Unit::px(i as f64)).product();
        assert_eq!(total.value(), 10.0);
        assert_eq!(prod.value(), 24.0);
    }
}
