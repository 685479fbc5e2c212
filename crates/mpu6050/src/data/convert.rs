//! Raw-to-fixed-point conversions.

use super::scale::{accel_factor, gyro_factor, temperature_lsb_per_celsius};
use super::{AccelRaw, GyroRaw, RawBlock, TemperatureRaw};
use crate::config::{AccelRange, GyroRange};
use crate::num::{FixedPoint, Vector3Fix};

/// Whole-degree offset of the temperature formula.
const TEMPERATURE_OFFSET_WHOLE: i32 = 36;
/// Fractional offset of the temperature formula, `round(0.53 * 340)` counts.
const TEMPERATURE_OFFSET_COUNTS: i32 = 180;

/// Calibrated measurement set from one burst read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reading {
    /// Angular rate in degrees per second.
    pub gyro: Vector3Fix,
    /// Acceleration in g.
    pub accel: Vector3Fix,
    /// Die temperature in degrees Celsius.
    pub temperature: FixedPoint,
}

/// Converts gyroscope raw counts to dps.
pub const fn gyro_to_dps(raw: GyroRaw, range: GyroRange) -> Vector3Fix {
    Vector3Fix::from_raw(raw.axes(), gyro_factor(range))
}

/// Converts accelerometer raw counts to g.
pub const fn accel_to_g(raw: AccelRaw, range: AccelRange) -> Vector3Fix {
    Vector3Fix::from_raw(raw.axes(), accel_factor(range))
}

/// Converts a raw temperature count to degrees Celsius.
///
/// Register map section 4.18 gives `T = raw / 340 + 36.53`. The whole and
/// fractional parts are computed separately in integer math: `raw / 340 + 36`
/// whole degrees plus `raw % 340 + 180` counts of 1/340 degree, both
/// truncating toward zero.
pub const fn temperature_celsius(raw: TemperatureRaw) -> FixedPoint {
    let lsb = temperature_lsb_per_celsius();
    let raw = raw.value as i32;
    let whole = raw / lsb + TEMPERATURE_OFFSET_WHOLE;
    let counts = raw % lsb + TEMPERATURE_OFFSET_COUNTS;
    FixedPoint::from_bits(whole * FixedPoint::SCALE + counts * FixedPoint::SCALE / lsb)
}

/// Converts a raw block using explicit calibration factors.
pub(crate) const fn convert_block(
    block: RawBlock,
    gyro_factor: FixedPoint,
    accel_factor: FixedPoint,
) -> Reading {
    Reading {
        gyro: Vector3Fix::from_raw(block.gyro.axes(), gyro_factor),
        accel: Vector3Fix::from_raw(block.accel.axes(), accel_factor),
        temperature: temperature_celsius(block.temperature),
    }
}
