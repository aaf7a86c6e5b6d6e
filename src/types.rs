//! Small strongly-typed primitives shared by the unit and vector modules.

use std::fmt;

use crate::env::Metrics;

/// The length unit a [`Unit`](crate::Unit) was created with.
///
/// All arithmetic happens in pixels; the kind is kept as a label and picks the
/// conversion applied at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum UnitKind {
    /// Absolute CSS pixels.
    #[default]
    Px,
    /// Multiples of the root font size.
    Rem,
    /// Percent of the viewport height.
    Vh,
    /// Percent of the viewport width.
    Vw,
}

impl UnitKind {
    pub const ALL: [UnitKind; 4] = [UnitKind::Px, UnitKind::Rem, UnitKind::Vh, UnitKind::Vw];

    /// Textual suffix used in `"<number><suffix>"` forms.
    pub const fn suffix(self) -> &'static str {
        match self {
            UnitKind::Px => "px",
            UnitKind::Rem => "rem",
            UnitKind::Vh => "vh",
            UnitKind::Vw => "vw",
        }
    }

    /// Look up a kind by suffix. Matching is case-sensitive.
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "px" => Some(UnitKind::Px),
            "rem" => Some(UnitKind::Rem),
            "vh" => Some(UnitKind::Vh),
            "vw" => Some(UnitKind::Vw),
            _ => None,
        }
    }

    /// Convert a magnitude of this kind into pixels.
    pub(crate) fn scale_to_px(self, value: f64, metrics: &Metrics) -> f64 {
        match self {
            UnitKind::Px => value,
            UnitKind::Rem => value * metrics.root_font_size,
            UnitKind::Vh => metrics.viewport_height * (value / 100.0),
            UnitKind::Vw => metrics.viewport_width * (value / 100.0),
        }
    }

    /// Convert a pixel magnitude into this kind.
    pub(crate) fn scale_from_px(self, px: f64, metrics: &Metrics) -> f64 {
        match self {
            UnitKind::Px => px,
            UnitKind::Rem => px / metrics.root_font_size,
            UnitKind::Vh => (px / metrics.viewport_height) * 100.0,
            UnitKind::Vw => (px / metrics.viewport_width) * 100.0,
        }
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// A rotation angle, stored in radians.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct Angle(f64);

impl Angle {
    pub const ZERO: Angle = Angle(0.0);

    #[inline]
    pub fn degrees(deg: f64) -> Self {
        Angle(deg.to_radians())
    }

    #[inline]
    pub const fn radians(rad: f64) -> Self {
        Angle(rad)
    }

    #[inline]
    pub fn as_radians(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn as_degrees(self) -> f64 {
        self.0.to_degrees()
    }

    /// `(sin, cos)` of the angle
    #[inline]
    pub fn sin_cos(self) -> (f64, f64) {
        self.0.sin_cos()
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}rad", self.0)
    }
}
