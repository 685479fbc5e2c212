//! Calibration factors and sensitivity tables.
//!
//! A calibration factor is the 16.16 value of one raw count, `65536 / sensitivity`
//! rounded to the nearest LSB. Multiplying a raw i16 sample by the factor's raw
//! bits yields the measurement in fixed point directly. The factors are derived
//! from the datasheet sensitivities below.

use crate::config::{AccelRange, GyroRange};
use crate::num::FixedPoint;

/// Sensitivity in LSB per unit, as a ratio so fractional datasheet values stay exact.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScaleFactor {
    /// Scale numerator.
    pub numerator: i32,
    /// Scale denominator.
    pub denominator: i32,
}

impl ScaleFactor {
    /// Creates a new scale ratio.
    pub const fn new(numerator: i32, denominator: i32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Returns the 16.16 value of one raw count, `denominator / numerator`
    /// rounded to nearest.
    ///
    /// # Panics
    ///
    /// Panics if `numerator` is zero.
    pub const fn per_count(self) -> FixedPoint {
        let scaled = FixedPoint::SCALE as i64 * self.denominator as i64;
        let numerator = self.numerator as i64;
        FixedPoint::from_bits(((scaled + numerator / 2) / numerator) as i32)
    }
}

/// Returns the gyroscope factor: dps per raw count in 16.16.
///
/// 500, 1001, 1998 and 3996 for the four ranges.
pub const fn gyro_factor(range: GyroRange) -> FixedPoint {
    gyro_lsb_per_dps(range).per_count()
}

/// Returns the accelerometer factor: g per raw count in 16.16.
///
/// 4, 8, 16 and 32 for the four ranges.
pub const fn accel_factor(range: AccelRange) -> FixedPoint {
    ScaleFactor::new(accel_lsb_per_g(range), 1).per_count()
}

/// Returns the gyroscope sensitivity in LSB/dps as a ratio.
///
/// Register map section 4.19.
pub const fn gyro_lsb_per_dps(range: GyroRange) -> ScaleFactor {
    match range {
        GyroRange::Dps250 => ScaleFactor::new(131, 1),
        GyroRange::Dps500 => ScaleFactor::new(655, 10),
        GyroRange::Dps1000 => ScaleFactor::new(328, 10),
        GyroRange::Dps2000 => ScaleFactor::new(164, 10),
    }
}

/// Returns the accelerometer sensitivity in LSB/g.
///
/// Register map section 4.17.
pub const fn accel_lsb_per_g(range: AccelRange) -> i32 {
    match range {
        AccelRange::G2 => 16_384,
        AccelRange::G4 => 8_192,
        AccelRange::G8 => 4_096,
        AccelRange::G16 => 2_048,
    }
}

/// Returns the temperature sensitivity in LSB per degree Celsius.
pub const fn temperature_lsb_per_celsius() -> i32 {
    340
}
