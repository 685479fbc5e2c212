use crate::error::Error;
use crate::register::{self, fs_sel};

/// Digital low-pass filter setting (CONFIG.DLPF_CFG).
///
/// Higher levels select a lower cutoff frequency. Bandwidths are for the
/// accelerometer; the gyroscope cutoff is within a few hertz of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LowPassFilter {
    /// 260 Hz bandwidth (filter effectively off).
    Hz260,
    /// 184 Hz bandwidth.
    Hz184,
    /// 94 Hz bandwidth.
    Hz94,
    /// 44 Hz bandwidth.
    Hz44,
    /// 21 Hz bandwidth.
    Hz21,
    /// 10 Hz bandwidth.
    Hz10,
    /// 5 Hz bandwidth.
    Hz5,
}

impl LowPassFilter {
    /// Returns the DLPF_CFG level (0..=6).
    pub const fn bits(self) -> u8 {
        match self {
            Self::Hz260 => 0,
            Self::Hz184 => 1,
            Self::Hz94 => 2,
            Self::Hz44 => 3,
            Self::Hz21 => 4,
            Self::Hz10 => 5,
            Self::Hz5 => 6,
        }
    }

    /// Returns the CONFIG register value (FSYNC disabled).
    pub(crate) const fn config_value(self) -> u8 {
        self.bits() & register::config::DLPF_CFG_MASK
    }

    /// Returns the accelerometer bandwidth in hertz.
    pub const fn bandwidth_hz(self) -> u16 {
        match self {
            Self::Hz260 => 260,
            Self::Hz184 => 184,
            Self::Hz94 => 94,
            Self::Hz44 => 44,
            Self::Hz21 => 21,
            Self::Hz10 => 10,
            Self::Hz5 => 5,
        }
    }
}

impl TryFrom<u8> for LowPassFilter {
    type Error = Error;

    fn try_from(level: u8) -> Result<Self, Error> {
        match level {
            0 => Ok(Self::Hz260),
            1 => Ok(Self::Hz184),
            2 => Ok(Self::Hz94),
            3 => Ok(Self::Hz44),
            4 => Ok(Self::Hz21),
            5 => Ok(Self::Hz10),
            6 => Ok(Self::Hz5),
            _ => Err(Error::InvalidData),
        }
    }
}

/// Gyroscope full-scale range selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroRange {
    /// +/-250 dps range.
    Dps250,
    /// +/-500 dps range.
    Dps500,
    /// +/-1000 dps range.
    Dps1000,
    /// +/-2000 dps range.
    Dps2000,
}

impl GyroRange {
    /// Returns the full-scale range in degrees per second.
    pub const fn dps(self) -> u16 {
        match self {
            Self::Dps250 => 250,
            Self::Dps500 => 500,
            Self::Dps1000 => 1000,
            Self::Dps2000 => 2000,
        }
    }

    /// Returns the FS_SEL code.
    pub(crate) const fn bits(self) -> u8 {
        match self {
            Self::Dps250 => 0b00,
            Self::Dps500 => 0b01,
            Self::Dps1000 => 0b10,
            Self::Dps2000 => 0b11,
        }
    }

    /// Returns the GYRO_CONFIG register value.
    pub(crate) const fn config_value(self) -> u8 {
        (self.bits() << fs_sel::SHIFT) & fs_sel::MASK
    }
}

/// Accelerometer full-scale range selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelRange {
    /// +/-2 g range.
    G2,
    /// +/-4 g range.
    G4,
    /// +/-8 g range.
    G8,
    /// +/-16 g range.
    G16,
}

impl AccelRange {
    /// Returns the full-scale range in g.
    pub const fn g(self) -> u16 {
        match self {
            Self::G2 => 2,
            Self::G4 => 4,
            Self::G8 => 8,
            Self::G16 => 16,
        }
    }

    /// Returns the AFS_SEL code.
    pub(crate) const fn bits(self) -> u8 {
        match self {
            Self::G2 => 0b00,
            Self::G4 => 0b01,
            Self::G8 => 0b10,
            Self::G16 => 0b11,
        }
    }

    /// Returns the ACCEL_CONFIG register value (self-test bits cleared).
    pub(crate) const fn config_value(self) -> u8 {
        (self.bits() << fs_sel::SHIFT) & fs_sel::MASK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_pass_levels_round_trip() {
        for level in 0..=6u8 {
            let filter = LowPassFilter::try_from(level).expect("valid level");
            assert_eq!(filter.bits(), level);
        }
        assert_eq!(LowPassFilter::try_from(7), Err(Error::InvalidData));
    }

    #[test]
    fn low_pass_config_value_is_the_dlpf_field() {
        for level in 0..=6u8 {
            let filter = LowPassFilter::try_from(level).expect("valid level");
            assert_eq!(filter.config_value(), level);
        }
    }

    #[test]
    fn low_pass_cutoff_falls_with_level() {
        assert_eq!(LowPassFilter::Hz260.bandwidth_hz(), 260);
        assert_eq!(LowPassFilter::Hz5.bandwidth_hz(), 5);
    }

    #[test]
    fn gyro_config_values() {
        assert_eq!(GyroRange::Dps250.config_value(), 0x00);
        assert_eq!(GyroRange::Dps500.config_value(), 0x08);
        assert_eq!(GyroRange::Dps1000.config_value(), 0x10);
        assert_eq!(GyroRange::Dps2000.config_value(), 0x18);
    }

    #[test]
    fn accel_config_values_stay_in_fs_sel_field() {
        assert_eq!(AccelRange::G2.config_value(), 0x00);
        assert_eq!(AccelRange::G4.config_value(), 0x08);
        assert_eq!(AccelRange::G8.config_value(), 0x10);
        assert_eq!(AccelRange::G16.config_value(), 0x18);
    }

    #[test]
    fn range_magnitudes() {
        assert_eq!(GyroRange::Dps2000.dps(), 2000);
        assert_eq!(AccelRange::G16.g(), 16);
    }
}
