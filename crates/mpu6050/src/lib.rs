//! Blocking `#![no_std]` driver for the
//! [MPU-6050](https://invensense.tdk.com/products/motion-tracking/6-axis/mpu-6050/)
//! 6-axis IMU (accelerometer + gyroscope + temperature) from InvenSense/TDK,
//! with every measurement delivered in 16.16 fixed point.
//!
//! This crate provides a lightweight, `embedded-hal` 1.0 based driver that
//! never touches floating point on the measurement path, so it suits cores
//! without an FPU.
//!
//! # Quick start (I2C)
//!
//! ```rust,no_run
//! use ph_mpu6050::{FixedPoint, Mpu6050I2c, Vector3Fix};
//! # use embedded_hal::delay::DelayNs;
//! # use embedded_hal::i2c::I2c;
//! #
//! # fn example<I2C: I2c, D: DelayNs>(i2c: I2C, delay: &mut D) -> Result<(), ph_mpu6050::Error> {
//! let mut imu: Mpu6050I2c<I2C> = Mpu6050I2c::new_i2c(i2c);
//! imu.begin_with_delay(delay)?;
//!
//! let mut gyro = Vector3Fix::ZERO;
//! let mut accel = Vector3Fix::ZERO;
//! let mut temperature = FixedPoint::ZERO;
//! imu.read(&mut gyro, &mut accel, &mut temperature)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Fixed point
//!
//! [`FixedPoint`] is a signed 16.16 value with wrapping arithmetic. Division by
//! zero is explicit: use [`FixedPoint::checked_div`] or [`FixedPoint::try_div`];
//! the `/` operator panics like integer division does. [`Vector3Fix`] applies
//! the same rules component-wise. Both implement `Display` with five decimal
//! places.
//!
//! # Scaling helpers
//!
//! [`gyro_factor`] and [`accel_factor`] return the per-count factors used by
//! the driver. [`gyro_lsb_per_dps`], [`accel_lsb_per_g`] and
//! [`temperature_lsb_per_celsius`] expose the datasheet sensitivities.
//!
//! # Features
//!
//! - `defmt`: `defmt::Format` for public types and driver logging.
//! - `fixed`: lossless conversions between [`FixedPoint`] and `fixed::types::I16F16`.

#![no_std]
#![deny(missing_docs)]
#![forbid(unsafe_code)]
// Clippy lint levels live here; thresholds and config are in clippy.toml.
#![deny(clippy::correctness)]
#![warn(
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::cloned_instead_of_copied,
    clippy::explicit_iter_loop,
    clippy::implicit_clone,
    clippy::inconsistent_struct_constructor,
    clippy::manual_assert,
    clippy::manual_let_else,
    clippy::match_same_arms,
    clippy::needless_pass_by_value,
    clippy::semicolon_if_nothing_returned,
    clippy::uninlined_format_args,
    clippy::unnested_or_patterns,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::alloc_instead_of_core
)]
#![allow(
    clippy::mod_module_files,
    clippy::self_named_module_files,
    clippy::similar_names,
    clippy::must_use_candidate,
    clippy::assertions_on_constants,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::cast_lossless,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::module_name_repetitions,
    clippy::wildcard_imports,
    clippy::suspicious_arithmetic_impl,
    clippy::suspicious_op_assign_impl
)]

mod macros;

mod config;
mod data;
mod device;
mod driver;
mod error;
mod interface;
mod num;
mod register;

#[cfg(test)]
mod testing;

// Interface layer
pub use interface::Mpu6050Address;
pub use interface::{I2cInterface, Interface};

// Configuration
pub use config::{AccelRange, Config, GyroRange, LowPassFilter};

// Driver
pub use device::DriverState;
pub use driver::{Mpu6050, Mpu6050I2c};

// Data types
pub use data::convert::{Reading, accel_to_g, gyro_to_dps, temperature_celsius};
pub use data::scale::{
    ScaleFactor,
    accel_factor,
    accel_lsb_per_g,
    gyro_factor,
    gyro_lsb_per_dps,
    temperature_lsb_per_celsius,
};
pub use data::{AccelRaw, GyroRaw, RawBlock, TemperatureRaw};

// Fixed point
pub use error::Error;
pub use num::{FixedPoint, Vector3Fix};
