//! Configuration helpers for the MPU-6050.

pub(crate) mod common;

pub use common::{AccelRange, GyroRange, LowPassFilter};

/// MPU-6050 measurement configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Gyroscope full-scale range.
    pub gyro_range: GyroRange,
    /// Accelerometer full-scale range.
    pub accel_range: AccelRange,
    /// Digital low-pass filter setting.
    pub low_pass: LowPassFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Configuration applied by `begin`: +/-250 dps, +/-2 g, 44 Hz low-pass.
    pub const DEFAULT: Self = Self {
        gyro_range: GyroRange::Dps250,
        accel_range: AccelRange::G2,
        low_pass: LowPassFilter::Hz44,
    };

    /// Creates a default configuration.
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    /// Sets the gyroscope range.
    #[must_use]
    pub const fn with_gyro_range(mut self, range: GyroRange) -> Self {
        self.gyro_range = range;
        self
    }

    /// Sets the accelerometer range.
    #[must_use]
    pub const fn with_accel_range(mut self, range: AccelRange) -> Self {
        self.accel_range = range;
        self
    }

    /// Sets the low-pass filter.
    #[must_use]
    pub const fn with_low_pass(mut self, low_pass: LowPassFilter) -> Self {
        self.low_pass = low_pass;
        self
    }
}
