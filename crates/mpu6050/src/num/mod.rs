//! 16.16 fixed-point arithmetic.
//!
//! [`FixedPoint`] stores a value as `bits / 65536` in an `i32`. Every operation
//! wraps on overflow (two's complement), mirroring native integer arithmetic on
//! the target rather than saturating:
//!
//! - add, sub and negation wrap at the 32-bit boundary, so
//!   `FixedPoint::MAX + FixedPoint::EPSILON == FixedPoint::MIN`;
//! - [`from_int`](FixedPoint::from_int) discards integer bits above bit 15;
//! - multiplication forms a 64-bit product and shifts right by 16, rounding
//!   toward negative infinity, then keeps the low 32 bits;
//! - division shifts the dividend left by 16 into 64 bits and divides,
//!   truncating toward zero, then keeps the low 32 bits.
//!
//! Division by zero is the one operation that does not produce a value. Use
//! [`try_div`](FixedPoint::try_div) or [`checked_div`](FixedPoint::checked_div)
//! to handle it; the `/` operator panics, like native integer division.

pub(crate) mod format;
#[cfg(feature = "fixed")]
pub(crate) mod interop;
pub(crate) mod vector;

pub use vector::Vector3Fix;

use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::Error;

/// Signed 16.16 fixed-point number.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FixedPoint(i32);

impl FixedPoint {
    /// Number of fractional bits.
    pub const FRACTIONAL_BITS: u32 = 16;
    /// Raw value of `1.0`.
    pub const SCALE: i32 = 1 << Self::FRACTIONAL_BITS;

    /// `0.0`.
    pub const ZERO: Self = Self(0);
    /// `1.0`.
    pub const ONE: Self = Self(Self::SCALE);
    /// `0.5`.
    pub const HALF: Self = Self(Self::SCALE / 2);
    /// Smallest representable value, `-32768.0`.
    pub const MIN: Self = Self(i32::MIN);
    /// Largest representable value, just below `32768.0`.
    pub const MAX: Self = Self(i32::MAX);
    /// Smallest positive value, `1 / 65536`.
    pub const EPSILON: Self = Self(1);

    /// Creates a value from its raw 16.16 representation.
    pub const fn from_bits(bits: i32) -> Self {
        Self(bits)
    }

    /// Returns the raw 16.16 representation.
    pub const fn to_bits(self) -> i32 {
        self.0
    }

    /// Converts an integer exactly.
    ///
    /// Integers outside `-32768..=32767` lose their upper bits.
    pub const fn from_int(value: i32) -> Self {
        Self(value.wrapping_shl(Self::FRACTIONAL_BITS))
    }

    /// Returns the integer part, truncating toward zero.
    pub const fn to_int(self) -> i32 {
        self.0 / Self::SCALE
    }

    /// Converts from `f32`, truncating toward zero.
    ///
    /// Values outside the representable range wrap; NaN converts to zero.
    pub fn from_f32(value: f32) -> Self {
        Self(narrow_f32(value * Self::SCALE as f32))
    }

    /// Converts to `f32`.
    pub fn to_f32(self) -> f32 {
        self.0 as f32 / Self::SCALE as f32
    }

    /// Converts from `f64`, truncating toward zero.
    ///
    /// Values outside the representable range wrap; NaN converts to zero.
    pub fn from_f64(value: f64) -> Self {
        Self((value * f64::from(Self::SCALE)) as i64 as i32)
    }

    /// Converts to `f64`.
    pub fn to_f64(self) -> f64 {
        f64::from(self.0) / f64::from(Self::SCALE)
    }

    /// Returns true if the value is below zero.
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Absolute value; `MIN.abs()` wraps to `MIN`.
    pub const fn abs(self) -> Self {
        Self(self.0.wrapping_abs())
    }

    /// Wrapping fixed-point multiplication.
    pub const fn wrapping_mul(self, rhs: Self) -> Self {
        let wide = (self.0 as i64) * (rhs.0 as i64);
        Self((wide >> Self::FRACTIONAL_BITS) as i32)
    }

    /// Fixed-point division, or `None` if `rhs` is zero.
    pub const fn checked_div(self, rhs: Self) -> Option<Self> {
        if rhs.0 == 0 {
            return None;
        }
        let wide = ((self.0 as i64) << Self::FRACTIONAL_BITS) / (rhs.0 as i64);
        Some(Self(wide as i32))
    }

    /// Fixed-point division, failing with [`Error::DivideByZero`] if `rhs` is zero.
    pub const fn try_div(self, rhs: Self) -> Result<Self, Error> {
        match self.checked_div(rhs) {
            Some(value) => Ok(value),
            None => Err(Error::DivideByZero),
        }
    }

    /// Multiplies the raw representation by an integer.
    ///
    /// This is how a raw sensor count is scaled by a calibration factor: the
    /// factor is the fixed-point value of one count.
    pub const fn mul_int(self, rhs: i32) -> Self {
        Self(self.0.wrapping_mul(rhs))
    }
}

/// Narrows a scaled float to 32 bits, wrapping like an integer cast would.
fn narrow_f32(scaled: f32) -> i32 {
    scaled as i64 as i32
}

impl Add for FixedPoint {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.wrapping_add(rhs.0))
    }
}

impl Sub for FixedPoint {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0.wrapping_sub(rhs.0))
    }
}

impl Mul for FixedPoint {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.wrapping_mul(rhs)
    }
}

impl Div for FixedPoint {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    fn div(self, rhs: Self) -> Self {
        match self.checked_div(rhs) {
            Some(value) => value,
            None => panic!("attempt to divide by zero"),
        }
    }
}

impl Neg for FixedPoint {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.wrapping_neg())
    }
}

impl Mul<i32> for FixedPoint {
    type Output = Self;

    fn mul(self, rhs: i32) -> Self {
        self.mul_int(rhs)
    }
}

impl Mul<FixedPoint> for i32 {
    type Output = FixedPoint;

    fn mul(self, rhs: FixedPoint) -> FixedPoint {
        rhs.mul_int(self)
    }
}

impl Div<i32> for FixedPoint {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    fn div(self, rhs: i32) -> Self {
        Self(self.0.wrapping_div(rhs))
    }
}

impl Mul<f32> for FixedPoint {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self(narrow_f32(self.0 as f32 * rhs))
    }
}

impl Div<f32> for FixedPoint {
    type Output = Self;

    fn div(self, rhs: f32) -> Self {
        Self(narrow_f32(self.0 as f32 / rhs))
    }
}

impl AddAssign for FixedPoint {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for FixedPoint {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for FixedPoint {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl DivAssign for FixedPoint {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl MulAssign<i32> for FixedPoint {
    fn mul_assign(&mut self, rhs: i32) {
        *self = *self * rhs;
    }
}

impl DivAssign<i32> for FixedPoint {
    fn div_assign(&mut self, rhs: i32) {
        *self = *self / rhs;
    }
}

impl MulAssign<f32> for FixedPoint {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl DivAssign<f32> for FixedPoint {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}
