//! Decimal rendering for [`FixedPoint`].
//!
//! Values print as `[-]<int>.<frac>` with five fractional digits, which is the
//! smallest count that still distinguishes neighbouring 16.16 values. The
//! fraction is rounded half-up; a carry propagates into the integer part.
//! A formatter precision (`{:.2}`) selects fewer digits. Width, fill, `+` and
//! `0` flags behave as they do for integers. A value that rounds to zero prints
//! without a sign.

use core::fmt::{self, Write as _};

use super::FixedPoint;

/// Default number of fractional digits.
pub(crate) const DECIMAL_PLACES: usize = 5;

const FRACTION_MASK: u32 = (1 << FixedPoint::FRACTIONAL_BITS) - 1;

/// Longest unsigned rendering, `32768.00000`.
const MAX_LEN: usize = 5 + 1 + DECIMAL_PLACES;

/// Sign, integer and rounded fractional digits of a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct DecimalParts {
    pub(crate) negative: bool,
    pub(crate) integer: u32,
    pub(crate) fraction: u32,
}

pub(crate) const fn decimal_parts(value: FixedPoint, places: usize) -> DecimalParts {
    let bits = value.to_bits();
    let magnitude = bits.unsigned_abs();
    let mut integer = magnitude >> FixedPoint::FRACTIONAL_BITS;
    let scale = 10u64.pow(places as u32);
    let half = 1u64 << (FixedPoint::FRACTIONAL_BITS - 1);
    let mut fraction =
        ((magnitude & FRACTION_MASK) as u64 * scale + half) >> FixedPoint::FRACTIONAL_BITS;
    if fraction >= scale {
        integer += 1;
        fraction -= scale;
    }
    DecimalParts {
        negative: bits < 0,
        integer,
        fraction: fraction as u32,
    }
}

/// Stack buffer for the unsigned digits, handed to `Formatter::pad_integral`.
struct Digits {
    bytes: [u8; MAX_LEN],
    len: usize,
}

impl Digits {
    const fn new() -> Self {
        Self {
            bytes: [0; MAX_LEN],
            len: 0,
        }
    }

    fn as_str(&self) -> &str {
        core::str::from_utf8(&self.bytes[..self.len]).unwrap_or_default()
    }
}

impl fmt::Write for Digits {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let end = self.len + s.len();
        let slot = self.bytes.get_mut(self.len..end).ok_or(fmt::Error)?;
        slot.copy_from_slice(s.as_bytes());
        self.len = end;
        Ok(())
    }
}

impl fmt::Display for FixedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let places = match f.precision() {
            Some(places) => places.min(DECIMAL_PLACES),
            None => DECIMAL_PLACES,
        };
        let parts = decimal_parts(*self, places);
        let mut digits = Digits::new();
        if places == 0 {
            write!(digits, "{}", parts.integer)?;
        } else {
            write!(
                digits,
                "{}.{:0width$}",
                parts.integer,
                parts.fraction,
                width = places
            )?;
        }
        let rounds_to_zero = parts.integer == 0 && parts.fraction == 0;
        f.pad_integral(!parts.negative || rounds_to_zero, "", digits.as_str())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for FixedPoint {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(f, "{}", defmt::Display2Format(self));
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::format;

    use super::*;

    #[test]
    fn renders_five_places() {
        assert_eq!(format!("{}", FixedPoint::ONE), "1.00000");
        assert_eq!(format!("{}", FixedPoint::from_f32(1.5)), "1.50000");
        assert_eq!(format!("{}", FixedPoint::ZERO), "0.00000");
        assert_eq!(format!("{}", FixedPoint::from_f32(0.25)), "0.25000");
    }

    #[test]
    fn negative_values_have_leading_minus() {
        assert_eq!(format!("{}", FixedPoint::from_f32(-1.5)), "-1.50000");
        assert_eq!(format!("{}", FixedPoint::from_f32(-0.5)), "-0.50000");
        assert_eq!(format!("{}", FixedPoint::from_int(-36)), "-36.00000");
    }

    #[test]
    fn extremes() {
        assert_eq!(format!("{}", FixedPoint::MIN), "-32768.00000");
        assert_eq!(format!("{}", FixedPoint::MAX), "32767.99998");
        assert_eq!(format!("{}", FixedPoint::EPSILON), "0.00002");
        assert_eq!(format!("{}", -FixedPoint::EPSILON), "-0.00002");
    }

    #[test]
    fn rounding_carries_into_integer_part() {
        // 0xFFFF / 65536 = 0.99998..., rounds up at two places.
        let value = FixedPoint::from_bits(0xFFFF);
        assert_eq!(format!("{value:.2}"), "1.00");
        assert_eq!(format!("{value}"), "0.99998");
    }

    #[test]
    fn precision_selects_fewer_places() {
        let value = FixedPoint::from_f32(36.5);
        assert_eq!(format!("{value:.1}"), "36.5");
        assert_eq!(format!("{value:.0}"), "37");
        assert_eq!(format!("{value:.9}"), "36.50000");
    }

    #[test]
    fn width_fill_and_sign_flags_apply() {
        assert_eq!(format!("{:>12}", FixedPoint::ONE), "     1.00000");
        assert_eq!(format!("{:*<9.1}", FixedPoint::from_f32(36.5)), "36.5*****");
        assert_eq!(format!("{:08.2}", FixedPoint::from_f32(-1.5)), "-0001.50");
        assert_eq!(format!("{:+}", FixedPoint::ONE), "+1.00000");
    }

    #[test]
    fn values_rounding_to_zero_drop_the_sign() {
        let tiny = FixedPoint::from_bits(-1);
        assert_eq!(format!("{tiny:.2}"), "0.00");
        assert_eq!(format!("{tiny:.0}"), "0");
        assert_eq!(format!("{tiny}"), "-0.00002");
    }

    #[test]
    fn decimal_parts_of_temperature() {
        let parts = decimal_parts(FixedPoint::from_bits(2_393_991), DECIMAL_PLACES);
        assert_eq!(
            parts,
            DecimalParts {
                negative: false,
                integer: 36,
                fraction: 52_940,
            }
        );
    }
}
