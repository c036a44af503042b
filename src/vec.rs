//! Two-dimensional vector type and rotation helpers.

use crate::float::Float;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 2D vector for planar physics.
///
/// Magnitude is computed from the current components on every call, so it can
/// never go stale after `x` or `y` are written directly.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Create a new 2D vector.
    pub fn new(x: F, y: F) -> Self { Vec2 { x, y } }

    /// Zero vector.
    pub fn zero() -> Self { Vec2 { x: F::zero(), y: F::zero() } }

    /// Dot product.
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    /// 2D cross product (returns scalar): self.x * other.y - self.y * other.x
    pub fn cross(self, other: Self) -> F {
        self.x * other.y - self.y * other.x
    }

    /// Squared length (avoids sqrt).
    pub fn magnitude_sq(self) -> F {
        self.dot(self)
    }

    /// Length (magnitude).
    pub fn magnitude(self) -> F {
        self.magnitude_sq().sqrt()
    }

    /// Scale to unit length in place.
    ///
    /// The vector must not be (near) zero; callers guard before normalizing.
    /// Use [`Vec2::normalized`] when the input may be degenerate.
    pub fn normalize(&mut self) {
        let len = self.magnitude();
        debug_assert!(
            !len.is_near_zero(F::from_f32(1e-12)),
            "normalize called on a zero-length vector"
        );
        *self /= len;
    }

    /// Unit vector in the same direction, or `None` if the length is below `epsilon`.
    pub fn normalized(self, epsilon: F) -> Option<Self> {
        let len = self.magnitude();
        if len.is_near_zero(epsilon) {
            None
        } else {
            Some(self / len)
        }
    }

    /// Perpendicular vector (rotated 90 degrees counter-clockwise).
    pub fn rotated_90(self) -> Self {
        Vec2 { x: -self.y, y: self.x }
    }

    /// Distance between two points.
    pub fn distance(self, other: Self) -> F {
        (self - other).magnitude()
    }

    /// Convert the components to another float type.
    ///
    /// Mixed-precision arithmetic casts the right operand to the left one's type:
    /// `a + b.cast()`.
    pub fn cast<G: Float>(self) -> Vec2<G> {
        Vec2 { x: G::from_f64(self.x.to_f64()), y: G::from_f64(self.y.to_f64()) }
    }
}

/// Rotate `point` counter-clockwise about the origin by `angle` radians.
pub fn rotate<F: Float>(angle: F, point: Vec2<F>) -> Vec2<F> {
    let (sin_a, cos_a) = (angle.sin(), angle.cos());
    Vec2 {
        x: point.x * cos_a - point.y * sin_a,
        y: point.x * sin_a + point.y * cos_a,
    }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Vec2 { x: self.x + rhs.x, y: self.y + rhs.y } }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Vec2 { x: self.x - rhs.x, y: self.y - rhs.y } }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec2 { x: -self.x, y: -self.y } }
}

impl<F: Float> AddAssign for Vec2<F> {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl<F: Float> SubAssign for Vec2<F> {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl<F: Float> Mul<F> for Vec2<F> {
    type Output = Self;
    fn mul(self, s: F) -> Self { Vec2 { x: self.x * s, y: self.y * s } }
}

impl<F: Float> Div<F> for Vec2<F> {
    type Output = Self;
    fn div(self, s: F) -> Self { Vec2 { x: self.x / s, y: self.y / s } }
}

impl<F: Float> MulAssign<F> for Vec2<F> {
    fn mul_assign(&mut self, s: F) {
        *self = *self * s;
    }
}

impl<F: Float> DivAssign<F> for Vec2<F> {
    fn div_assign(&mut self, s: F) {
        *self = *self / s;
    }
}

// Scalar on the left. Coherence rules rule out a blanket impl over `F`.

impl Mul<Vec2<f32>> for f32 {
    type Output = Vec2<f32>;
    fn mul(self, v: Vec2<f32>) -> Vec2<f32> { v * self }
}

impl Mul<Vec2<f64>> for f64 {
    type Output = Vec2<f64>;
    fn mul(self, v: Vec2<f64>) -> Vec2<f64> { v * self }
}
