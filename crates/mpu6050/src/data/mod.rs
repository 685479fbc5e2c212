//! Sensor data readout helpers.
//!
//! The MPU-6050 exposes its measurements as one contiguous block of big-endian
//! registers starting at ACCEL_XOUT_H:
//!
//! | offset | registers        | content          |
//! |--------|------------------|------------------|
//! | 0..6   | 0x3B..=0x40      | accel X, Y, Z    |
//! | 6..8   | 0x41..=0x42      | temperature      |
//! | 8..14  | 0x43..=0x48      | gyro X, Y, Z     |

pub(crate) mod convert;
pub(crate) mod scale;

use crate::register::Register;

pub(crate) const RAW_BLOCK_START: Register = Register::AccelXoutH;
pub(crate) const RAW_BLOCK_LEN: usize = 14;
pub(crate) const RAW_BLOCK_ACCEL_OFFSET: usize = 0;
pub(crate) const RAW_BLOCK_TEMPERATURE_OFFSET: usize = 6;
pub(crate) const RAW_BLOCK_GYRO_OFFSET: usize = 8;

/// Raw block of sensor data from a single burst read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawBlock {
    /// Raw accelerometer reading.
    pub accel: AccelRaw,
    /// Raw temperature reading.
    pub temperature: TemperatureRaw,
    /// Raw gyroscope reading.
    pub gyro: GyroRaw,
}

impl RawBlock {
    /// Encodes the block in register order, as the device would return it.
    pub const fn to_be_bytes(self) -> [u8; RAW_BLOCK_LEN] {
        let [ax0, ax1] = self.accel.x.to_be_bytes();
        let [ay0, ay1] = self.accel.y.to_be_bytes();
        let [az0, az1] = self.accel.z.to_be_bytes();
        let [t0, t1] = self.temperature.value.to_be_bytes();
        let [gx0, gx1] = self.gyro.x.to_be_bytes();
        let [gy0, gy1] = self.gyro.y.to_be_bytes();
        let [gz0, gz1] = self.gyro.z.to_be_bytes();
        [
            ax0, ax1, ay0, ay1, az0, az1, t0, t1, gx0, gx1, gy0, gy1, gz0, gz1,
        ]
    }
}

/// Decodes a raw block buffer into a structured sample.
pub(crate) const fn decode_raw_block(buffer: &[u8; RAW_BLOCK_LEN]) -> RawBlock {
    let accel = axes_from_be_bytes(buffer, RAW_BLOCK_ACCEL_OFFSET);
    let gyro = axes_from_be_bytes(buffer, RAW_BLOCK_GYRO_OFFSET);
    RawBlock {
        accel: AccelRaw {
            x: accel[0],
            y: accel[1],
            z: accel[2],
        },
        temperature: TemperatureRaw {
            value: i16::from_be_bytes([
                buffer[RAW_BLOCK_TEMPERATURE_OFFSET],
                buffer[RAW_BLOCK_TEMPERATURE_OFFSET + 1],
            ]),
        },
        gyro: GyroRaw {
            x: gyro[0],
            y: gyro[1],
            z: gyro[2],
        },
    }
}

const fn axes_from_be_bytes(buffer: &[u8; RAW_BLOCK_LEN], offset: usize) -> [i16; 3] {
    [
        i16::from_be_bytes([buffer[offset], buffer[offset + 1]]),
        i16::from_be_bytes([buffer[offset + 2], buffer[offset + 3]]),
        i16::from_be_bytes([buffer[offset + 4], buffer[offset + 5]]),
    ]
}

/// Raw accelerometer sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelRaw {
    /// X-axis raw count.
    pub x: i16,
    /// Y-axis raw count.
    pub y: i16,
    /// Z-axis raw count.
    pub z: i16,
}

impl AccelRaw {
    pub(crate) const fn axes(self) -> [i16; 3] {
        [self.x, self.y, self.z]
    }
}

/// Raw gyroscope sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroRaw {
    /// X-axis raw count.
    pub x: i16,
    /// Y-axis raw count.
    pub y: i16,
    /// Z-axis raw count.
    pub z: i16,
}

impl GyroRaw {
    pub(crate) const fn axes(self) -> [i16; 3] {
        [self.x, self.y, self.z]
    }
}

/// Raw temperature sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TemperatureRaw {
    /// Raw temperature count.
    pub value: i16,
}
