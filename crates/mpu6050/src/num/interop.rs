//! Conversions between [`FixedPoint`] and the `fixed` crate.
//!
//! Both types use the same 16.16 two's-complement layout, so the conversions
//! are bit-for-bit and lossless.

use fixed::types::I16F16;

use super::FixedPoint;
use super::vector::Vector3Fix;

impl From<FixedPoint> for I16F16 {
    fn from(value: FixedPoint) -> Self {
        I16F16::from_bits(value.to_bits())
    }
}

impl From<I16F16> for FixedPoint {
    fn from(value: I16F16) -> Self {
        FixedPoint::from_bits(value.to_bits())
    }
}

impl From<Vector3Fix> for [I16F16; 3] {
    fn from(value: Vector3Fix) -> Self {
        [value.x.into(), value.y.into(), value.z.into()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_preserves_bits() {
        let value = FixedPoint::from_f32(-12.375);
        let converted: I16F16 = value.into();
        assert_eq!(converted, I16F16::from_num(-12.375));
        assert_eq!(FixedPoint::from(converted), value);
    }

    #[test]
    fn extremes_survive() {
        assert_eq!(I16F16::from(FixedPoint::MIN), I16F16::MIN);
        assert_eq!(I16F16::from(FixedPoint::MAX), I16F16::MAX);
        assert_eq!(FixedPoint::from(I16F16::DELTA), FixedPoint::EPSILON);
    }

    #[test]
    fn vector_converts_per_component() {
        let v = Vector3Fix::new(FixedPoint::ONE, FixedPoint::HALF, -FixedPoint::ONE);
        let array: [I16F16; 3] = v.into();
        assert_eq!(
            array,
            [
                I16F16::from_num(1),
                I16F16::from_num(0.5),
                I16F16::from_num(-1)
            ]
        );
    }
}
