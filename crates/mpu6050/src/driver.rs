//! MPU-6050 driver implementation.
//!
//! This module provides a blocking driver for the MPU-6050 that converts every
//! measurement to 16.16 fixed point.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::config::{AccelRange, Config, GyroRange, LowPassFilter};
use crate::data::RawBlock;
use crate::data::convert::Reading;
use crate::device::{DeviceCore, DriverState};
use crate::error::Error;
use crate::interface::{I2cInterface, Interface, Mpu6050Address};
use crate::num::{FixedPoint, Vector3Fix};

/// MPU-6050 6-axis IMU driver.
pub struct Mpu6050<I> {
    core: DeviceCore<I>,
}

/// I2C type alias for the MPU-6050 driver.
pub type Mpu6050I2c<I2C> = Mpu6050<I2cInterface<I2C>>;

impl<I2C> Mpu6050<I2cInterface<I2C>>
where
    I2C: I2c,
{
    /// Creates a new I2C-based driver at the default address (0x68).
    pub fn new_i2c(i2c: I2C) -> Self {
        Self::new(I2cInterface::primary(i2c))
    }

    /// Creates a new I2C-based driver at the given address.
    pub fn with_address(i2c: I2C, address: Mpu6050Address) -> Self {
        Self::new(I2cInterface::new(i2c, address.addr()))
    }

    /// Returns the 7-bit I2C address in use.
    pub const fn address(&self) -> u8 {
        self.core.interface().address()
    }

    /// Releases the I2C bus, consuming the driver.
    pub fn release(self) -> I2C {
        self.core.release().release()
    }
}

impl<I> Mpu6050<I>
where
    I: Interface,
{
    /// Creates a driver on top of any register interface.
    ///
    /// The driver starts [`DriverState::Uninitialized`]; call [`begin`](Self::begin)
    /// before relying on the configured ranges.
    pub fn new(interface: I) -> Self {
        Self {
            core: DeviceCore::new(interface),
        }
    }

    /// Releases the underlying interface, consuming the driver.
    pub fn release_interface(self) -> I {
        self.core.release()
    }

    /// Resets the device and applies [`Config::DEFAULT`].
    ///
    /// A failed reset or configuration write leaves the driver
    /// [`DriverState::Uninitialized`]. Nothing is retried.
    pub fn begin(&mut self) -> Result<(), Error> {
        self.core.begin()
    }

    /// Like [`begin`](Self::begin), but waits for the reset to settle and
    /// clears the SLEEP bit before configuring.
    ///
    /// The device comes out of DEVICE_RESET asleep and reports zeros until it is
    /// woken, so this is the entry point to use on real hardware.
    pub fn begin_with_delay<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error> {
        self.core.begin_with_delay(delay)
    }

    /// Clears the SLEEP bit and selects the internal oscillator.
    pub fn wake(&mut self) -> Result<(), Error> {
        self.core.wake()
    }

    /// Puts the device into sleep mode.
    pub fn sleep(&mut self) -> Result<(), Error> {
        self.core.sleep()
    }

    /// Reads the WHO_AM_I register.
    pub fn who_am_i(&mut self) -> Result<u8, Error> {
        self.core.who_am_i()
    }

    /// Checks WHO_AM_I and returns [`Error::WrongDevice`] on a mismatch.
    pub fn verify_device(&mut self) -> Result<(), Error> {
        self.core.verify_device()
    }

    /// Writes ranges and filter from `config`, in that order.
    ///
    /// Stops at the first failed write; settings written before it stay applied.
    pub fn apply_config(&mut self, config: Config) -> Result<(), Error> {
        self.core.apply_config(config)
    }

    /// Sets the digital low-pass filter.
    pub fn set_low_pass(&mut self, low_pass: LowPassFilter) -> Result<(), Error> {
        self.core.set_low_pass(low_pass)
    }

    /// Sets the digital low-pass filter from a DLPF_CFG level (0..=6).
    ///
    /// Levels above 6 return [`Error::InvalidData`] without touching the bus.
    pub fn set_low_pass_level(&mut self, level: u8) -> Result<(), Error> {
        let low_pass = LowPassFilter::try_from(level)?;
        self.core.set_low_pass(low_pass)
    }

    /// Sets the gyroscope full-scale range and its conversion factor.
    ///
    /// On error the previous range and factor are kept.
    pub fn set_gyro_range(&mut self, range: GyroRange) -> Result<(), Error> {
        self.core.set_gyro_range(range)
    }

    /// Sets the accelerometer full-scale range and its conversion factor.
    ///
    /// On error the previous range and factor are kept.
    pub fn set_accel_range(&mut self, range: AccelRange) -> Result<(), Error> {
        self.core.set_accel_range(range)
    }

    /// Reads gyroscope (dps), accelerometer (g) and temperature (degrees C)
    /// with a single 14-byte burst read.
    ///
    /// The outputs are written only when the whole block arrived. A short
    /// transfer returns [`Error::PartialRead`] and leaves them untouched.
    pub fn read(
        &mut self,
        gyro: &mut Vector3Fix,
        accel: &mut Vector3Fix,
        temperature: &mut FixedPoint,
    ) -> Result<(), Error> {
        let reading = self.core.read_all()?;
        *gyro = reading.gyro;
        *accel = reading.accel;
        *temperature = reading.temperature;
        Ok(())
    }

    /// Reads and converts one measurement block.
    pub fn read_all(&mut self) -> Result<Reading, Error> {
        self.core.read_all()
    }

    /// Reads one measurement block without conversion.
    pub fn read_raw(&mut self) -> Result<RawBlock, Error> {
        self.core.read_raw()
    }

    /// Returns the lifecycle state.
    pub const fn state(&self) -> DriverState {
        self.core.state()
    }

    /// Returns true once [`begin`](Self::begin) has succeeded.
    pub fn is_ready(&self) -> bool {
        self.core.state() == DriverState::Ready
    }

    /// Returns the active gyroscope range.
    pub const fn gyro_range(&self) -> GyroRange {
        self.core.gyro_range()
    }

    /// Returns the active accelerometer range.
    pub const fn accel_range(&self) -> AccelRange {
        self.core.accel_range()
    }

    /// Returns the gyroscope raw-to-dps factor.
    pub const fn gyro_factor(&self) -> FixedPoint {
        self.core.gyro_factor()
    }

    /// Returns the accelerometer raw-to-g factor.
    pub const fn accel_factor(&self) -> FixedPoint {
        self.core.accel_factor()
    }

    /// Returns the last low-pass filter written, if any.
    pub const fn low_pass(&self) -> Option<LowPassFilter> {
        self.core.low_pass()
    }
}
