//! 2D vectors whose components are [`Unit`] lengths.
//!
//! Each axis may carry its own unit kind. All arithmetic goes through
//! [`Unit`]'s pixel-based operations, so results are pixel-anchored.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Neg, Sub};

use glam::{DVec2, dvec2};

use crate::env::Environment;
use crate::types::{Angle, UnitKind};
use crate::unit::Unit;

/// A displacement in 2D, with x and y stored as [`Unit`]s.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Vector {
    x: Unit,
    y: Unit,
}

impl Vector {
    pub const ZERO: Vector = Vector::from_px(0.0, 0.0);
    pub const ONE: Vector = Vector::from_px(1.0, 1.0);

    #[inline]
    pub const fn new(x: Unit, y: Unit) -> Vector {
        Vector { x, y }
    }

    /// Pixel vector from raw components.
    #[inline]
    pub const fn from_px(x: f64, y: f64) -> Vector {
        Vector::new(Unit::px(x), Unit::px(y))
    }

    /// Vector from two raw magnitudes sharing one unit kind.
    ///
    /// Both axes are resolved against the same environment snapshot.
    pub fn from_values<E: Environment + ?Sized>(x: f64, y: f64, kind: UnitKind, env: &E) -> Vector {
        let metrics = env.snapshot();
        Vector::new(Unit::new(x, kind, &metrics), Unit::new(y, kind, &metrics))
    }

    #[inline]
    pub fn x(self) -> Unit {
        self.x
    }

    #[inline]
    pub fn y(self) -> Unit {
        self.y
    }

    /// Euclidean length, `sqrt(x² + y²)`.
    pub fn magnitude(self) -> Unit {
        Unit::sum([self.x.pow(2.0), self.y.pow(2.0)]).pow(0.5)
    }

    /// Same direction, unit length.
    ///
    /// The zero vector has no direction; its components come out as NaN.
    pub fn normalized(self) -> Vector {
        let magnitude = self.magnitude();
        Vector::new(self.x.divide(magnitude), self.y.divide(magnitude))
    }

    /// Pixel strings ready for a `translate(x, y)` offset.
    pub fn translate(self) -> (String, String) {
        (self.x.to_px(), self.y.to_px())
    }

    pub fn add(self, other: Vector) -> Vector {
        Vector::sum([self, other])
    }

    pub fn subtract(self, other: Vector) -> Vector {
        Vector::difference([self, other])
    }

    /// Scale both axes by `scalar`.
    pub fn multiply(self, scalar: Unit) -> Vector {
        Vector::new(self.x.multiply(scalar), self.y.multiply(scalar))
    }

    /// Dot product, in squared pixels.
    pub fn dot(self, other: Vector) -> f64 {
        Unit::sum([self.x.multiply(other.x), self.y.multiply(other.y)]).value()
    }

    /// Perpendicular dot product: `x * other.y + y * other.x`.
    pub fn p_dot(self, other: Vector) -> f64 {
        Unit::sum([self.x.multiply(other.y), self.y.multiply(other.x)]).value()
    }

    /// Unsigned angle between the two vectors, in radians.
    ///
    /// NaN when either vector has zero magnitude.
    pub fn angle_diff(self, other: Vector) -> f64 {
        let lengths = Unit::product([self.magnitude(), other.magnitude()]);
        // Rounding can push parallel vectors just past ±1; NaN passes through clamp.
        (self.dot(other) / lengths.value()).clamp(-1.0, 1.0).acos()
    }

    /// Rotate counter-clockwise (in a y-up frame) by `angle`.
    pub fn rotate(self, angle: Angle) -> Vector {
        let (sin, cos) = angle.sin_cos();
        let (sin, cos) = (Unit::px(sin), Unit::px(cos));
        Vector::new(
            Unit::difference(self.x.multiply(cos), [self.y.multiply(sin)]),
            Unit::sum([self.x.multiply(sin), self.y.multiply(cos)]),
        )
    }

    /// Rotate by `degrees`.
    pub fn rotate_degrees(self, degrees: f64) -> Vector {
        self.rotate(Angle::degrees(degrees))
    }

    /// Component-wise sum; [`Vector::ZERO`] when empty.
    pub fn sum(vectors: impl IntoIterator<Item = Vector>) -> Vector {
        vectors
            .into_iter()
            .reduce(|acc, v| Vector::new(acc.x.add(v.x), acc.y.add(v.y)))
            .unwrap_or(Vector::ZERO)
    }

    /// First vector minus each of the following ones; [`Vector::ZERO`] when empty.
    pub fn difference(vectors: impl IntoIterator<Item = Vector>) -> Vector {
        vectors
            .into_iter()
            .reduce(|acc, v| Vector::new(acc.x.subtract(v.x), acc.y.subtract(v.y)))
            .unwrap_or(Vector::ZERO)
    }

    /// Pixel components as a `glam` vector.
    #[inline]
    pub fn to_dvec2(self) -> DVec2 {
        dvec2(self.x.value(), self.y.value())
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<DVec2> for Vector {
    fn from(v: DVec2) -> Vector {
        Vector::from_px(v.x, v.y)
    }
}

impl From<Vector> for DVec2 {
    fn from(v: Vector) -> DVec2 {
        v.to_dvec2()
    }
}

impl Add for Vector {
    type Output = Vector;
    fn add(self, rhs: Vector) -> Vector { Vector::add(self, rhs) }
}
impl Sub for Vector {
    type Output = Vector;
    fn sub(self, rhs: Vector) -> Vector { self.subtract(rhs) }
}
impl Mul<Unit> for Vector {
    type Output = Vector;
    fn mul(self, rhs: Unit) -> Vector { self.multiply(rhs) }
}
impl Neg for Vector {
    type Output = Vector;
    fn neg(self) -> Vector { Vector::new(-self.x, -self.y) }
}

impl Sum for Vector {
    fn sum<I: Iterator<Item = Vector>>(iter: I) -> Vector {
        Vector::sum(iter)
    }
}
