//! MPU-6050 register definitions.
//!
//! Only the registers the driver touches are listed, plus the bit masks used to
//! build their values. Addresses follow the MPU-6000/MPU-6050 register map
//! (RM-MPU-6000A-00, rev. 4.2).

/// MPU-6050 register addresses.
#[allow(dead_code)] // Only the block start is addressed directly; the rest document the layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Register {
    /// Frame sync and digital low-pass filter configuration.
    Config = 0x1A,
    /// Gyroscope full-scale range (FS_SEL in bits 3..4).
    GyroConfig = 0x1B,
    /// Accelerometer full-scale range (AFS_SEL in bits 3..4).
    AccelConfig = 0x1C,
    /// Accelerometer X-axis high byte; start of the measurement block.
    AccelXoutH = 0x3B,
    /// Accelerometer X-axis low byte.
    AccelXoutL = 0x3C,
    /// Accelerometer Y-axis high byte.
    AccelYoutH = 0x3D,
    /// Accelerometer Y-axis low byte.
    AccelYoutL = 0x3E,
    /// Accelerometer Z-axis high byte.
    AccelZoutH = 0x3F,
    /// Accelerometer Z-axis low byte.
    AccelZoutL = 0x40,
    /// Temperature high byte.
    TempOutH = 0x41,
    /// Temperature low byte.
    TempOutL = 0x42,
    /// Gyroscope X-axis high byte.
    GyroXoutH = 0x43,
    /// Gyroscope X-axis low byte.
    GyroXoutL = 0x44,
    /// Gyroscope Y-axis high byte.
    GyroYoutH = 0x45,
    /// Gyroscope Y-axis low byte.
    GyroYoutL = 0x46,
    /// Gyroscope Z-axis high byte.
    GyroZoutH = 0x47,
    /// Gyroscope Z-axis low byte.
    GyroZoutL = 0x48,
    /// Power management 1 (reset, sleep, clock source).
    PwrMgmt1 = 0x6B,
    /// Device identifier register.
    WhoAmI = 0x75,
}

impl Register {
    /// Returns the register address.
    pub const fn addr(self) -> u8 {
        self as u8
    }
}

/// PWR_MGMT_1 bit definitions.
pub mod pwr_mgmt_1 {
    /// Resets all internal registers to their defaults.
    pub const DEVICE_RESET: u8 = 0b1000_0000;
    /// Puts the device into sleep mode.
    pub const SLEEP: u8 = 1 << 6;
    /// Internal 8 MHz oscillator clock source.
    pub const CLKSEL_INTERNAL: u8 = 0b000;
}

/// GYRO_CONFIG / ACCEL_CONFIG full-scale select field.
pub mod fs_sel {
    /// Bit offset of the full-scale select field.
    pub const SHIFT: u8 = 3;
    /// Mask of the full-scale select field.
    pub const MASK: u8 = 0b11 << SHIFT;
}

/// CONFIG bit definitions.
pub mod config {
    /// Mask of the DLPF_CFG field.
    pub const DLPF_CFG_MASK: u8 = 0b111;
}

/// WHO_AM_I expected values.
pub mod who_am_i {
    /// Expected WHO_AM_I value (bits 6..1 of the AD0-low address).
    pub const EXPECTED: u8 = 0x68;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measurement_block_is_contiguous() {
        assert_eq!(Register::TempOutH.addr(), Register::AccelXoutH.addr() + 6);
        assert_eq!(Register::GyroXoutH.addr(), Register::AccelXoutH.addr() + 8);
        assert_eq!(Register::GyroZoutL.addr(), Register::AccelXoutH.addr() + 13);
    }

    #[test]
    fn fs_sel_field_covers_bits_3_and_4() {
        assert_eq!(fs_sel::MASK, 0b0001_1000);
    }
}
