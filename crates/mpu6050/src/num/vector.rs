//! Three-component fixed-point vector.

use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use super::FixedPoint;

/// Three-axis vector of [`FixedPoint`] components.
///
/// Arithmetic is component-wise and inherits the wrapping behaviour of
/// [`FixedPoint`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Vector3Fix {
    /// X component.
    pub x: FixedPoint,
    /// Y component.
    pub y: FixedPoint,
    /// Z component.
    pub z: FixedPoint,
}

impl Vector3Fix {
    /// The zero vector.
    pub const ZERO: Self = Self::new(FixedPoint::ZERO, FixedPoint::ZERO, FixedPoint::ZERO);

    /// Creates a vector from three components.
    pub const fn new(x: FixedPoint, y: FixedPoint, z: FixedPoint) -> Self {
        Self { x, y, z }
    }

    /// Scales three raw sensor counts by a per-count factor.
    pub const fn from_raw(raw: [i16; 3], factor: FixedPoint) -> Self {
        Self {
            x: factor.mul_int(raw[0] as i32),
            y: factor.mul_int(raw[1] as i32),
            z: factor.mul_int(raw[2] as i32),
        }
    }

    /// Resets all components to zero and returns the vector for chaining.
    pub fn zero(&mut self) -> &mut Self {
        *self = Self::ZERO;
        self
    }
}

impl Add for Vector3Fix {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3Fix {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<FixedPoint> for Vector3Fix {
    type Output = Self;

    fn mul(self, rhs: FixedPoint) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Div<FixedPoint> for Vector3Fix {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    fn div(self, rhs: FixedPoint) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl Mul<f32> for Vector3Fix {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Div<f32> for Vector3Fix {
    type Output = Self;

    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl AddAssign for Vector3Fix {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vector3Fix {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<FixedPoint> for Vector3Fix {
    fn mul_assign(&mut self, rhs: FixedPoint) {
        *self = *self * rhs;
    }
}

impl DivAssign<FixedPoint> for Vector3Fix {
    fn div_assign(&mut self, rhs: FixedPoint) {
        *self = *self / rhs;
    }
}

impl MulAssign<f32> for Vector3Fix {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl DivAssign<f32> for Vector3Fix {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

impl fmt::Display for Vector3Fix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::format;

    use super::*;

    fn vec(x: f32, y: f32, z: f32) -> Vector3Fix {
        Vector3Fix::new(
            FixedPoint::from_f32(x),
            FixedPoint::from_f32(y),
            FixedPoint::from_f32(z),
        )
    }

    #[test]
    fn adding_zero_is_identity() {
        let v = vec(1.5, -2.25, 300.0);
        assert_eq!(v + Vector3Fix::ZERO, v);
        assert_eq!(Vector3Fix::default(), Vector3Fix::ZERO);
    }

    #[test]
    fn add_then_sub_restores() {
        let v1 = vec(1.5, -2.25, 300.0);
        let v2 = vec(-0.125, 40.0, -299.5);
        assert_eq!((v1 + v2) - v2, v1);
    }

    #[test]
    fn scalar_mul_and_div() {
        let v = vec(1.0, -2.0, 0.5);
        let two = FixedPoint::from_int(2);
        assert_eq!(v * two, vec(2.0, -4.0, 1.0));
        assert_eq!(v / two, vec(0.5, -1.0, 0.25));
    }

    #[test]
    fn float_scaling_is_per_component() {
        let v = vec(1.0, -2.0, 0.5);
        assert_eq!(v * 2.5_f32, vec(2.5, -5.0, 1.25));
        assert_eq!(v / 4.0_f32, vec(0.25, -0.5, 0.125));

        let mut w = v;
        w *= 3.0_f32;
        assert_eq!(w, vec(3.0, -6.0, 1.5));
        w /= 0.5_f32;
        assert_eq!(w, vec(6.0, -12.0, 3.0));
    }

    #[test]
    fn compound_operators_mutate_in_place() {
        let mut v = vec(1.0, 2.0, 3.0);
        v += vec(1.0, 1.0, 1.0);
        v -= vec(0.5, 0.5, 0.5);
        v *= FixedPoint::from_int(2);
        v /= FixedPoint::from_int(4);
        assert_eq!(v, vec(0.75, 1.25, 1.75));
    }

    #[test]
    fn zero_resets_and_chains() {
        let mut v = vec(1.0, 2.0, 3.0);
        let other = vec(4.0, 5.0, 6.0);
        *v.zero() += other;
        assert_eq!(v, other);
    }

    #[test]
    fn equality_is_bitwise_per_component() {
        let v = vec(1.0, 2.0, 3.0);
        let mut w = v;
        w.z += FixedPoint::EPSILON;
        assert_ne!(v, w);
    }

    #[test]
    fn components_wrap_independently() {
        let v = Vector3Fix::new(FixedPoint::MAX, FixedPoint::ZERO, FixedPoint::MIN);
        let step = Vector3Fix::new(
            FixedPoint::EPSILON,
            FixedPoint::EPSILON,
            -FixedPoint::EPSILON,
        );
        assert_eq!(
            v + step,
            Vector3Fix::new(FixedPoint::MIN, FixedPoint::EPSILON, FixedPoint::MAX)
        );
    }

    #[test]
    fn from_raw_scales_counts() {
        let v = Vector3Fix::from_raw([100, -100, 0], FixedPoint::from_bits(500));
        assert_eq!(v.x.to_bits(), 50_000);
        assert_eq!(v.y.to_bits(), -50_000);
        assert_eq!(v.z, FixedPoint::ZERO);
    }

    #[test]
    fn display_lists_components() {
        let v = vec(1.0, -0.5, 0.0);
        assert_eq!(format!("{v}"), "(1.00000, -0.50000, 0.00000)");
    }
}
