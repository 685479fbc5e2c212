//! Device core operations for the MPU-6050.

use embedded_hal::delay::DelayNs;

use crate::config::{AccelRange, Config, GyroRange, LowPassFilter};
use crate::data::convert::{Reading, convert_block};
use crate::data::scale::{accel_factor, gyro_factor};
use crate::data::{RAW_BLOCK_LEN, RAW_BLOCK_START, RawBlock, decode_raw_block};
use crate::error::Error;
use crate::interface::Interface;
use crate::macros::{log_debug, log_trace, log_warn};
use crate::num::FixedPoint;
use crate::register::{Register, pwr_mgmt_1, who_am_i};

/// Settling time after DEVICE_RESET before the device accepts writes.
const RESET_DELAY_MS: u32 = 100;

/// Driver lifecycle state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverState {
    /// `begin` has not completed successfully.
    Uninitialized,
    /// The device was reset and the default configuration applied.
    Ready,
}

pub(crate) struct DeviceCore<I> {
    interface: I,
    state: DriverState,
    gyro_range: GyroRange,
    accel_range: AccelRange,
    gyro_factor: FixedPoint,
    accel_factor: FixedPoint,
    low_pass: Option<LowPassFilter>,
}

impl<I> DeviceCore<I> {
    pub(crate) fn release(self) -> I {
        self.interface
    }

    pub(crate) const fn interface(&self) -> &I {
        &self.interface
    }

    #[cfg(test)]
    pub(crate) fn interface_mut(&mut self) -> &mut I {
        &mut self.interface
    }

    pub(crate) const fn state(&self) -> DriverState {
        self.state
    }

    pub(crate) const fn gyro_range(&self) -> GyroRange {
        self.gyro_range
    }

    pub(crate) const fn accel_range(&self) -> AccelRange {
        self.accel_range
    }

    pub(crate) const fn gyro_factor(&self) -> FixedPoint {
        self.gyro_factor
    }

    pub(crate) const fn accel_factor(&self) -> FixedPoint {
        self.accel_factor
    }

    pub(crate) const fn low_pass(&self) -> Option<LowPassFilter> {
        self.low_pass
    }
}

impl<I> DeviceCore<I>
where
    I: Interface,
{
    pub(crate) fn new(interface: I) -> Self {
        let defaults = Config::DEFAULT;
        Self {
            interface,
            state: DriverState::Uninitialized,
            gyro_range: defaults.gyro_range,
            accel_range: defaults.accel_range,
            gyro_factor: gyro_factor(defaults.gyro_range),
            accel_factor: accel_factor(defaults.accel_range),
            low_pass: None,
        }
    }

    pub(crate) fn begin(&mut self) -> Result<(), Error> {
        self.state = DriverState::Uninitialized;
        self.reset()?;
        self.apply_config(Config::DEFAULT)?;
        self.state = DriverState::Ready;
        log_debug!("MPU-6050 ready");
        Ok(())
    }

    pub(crate) fn begin_with_delay<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error> {
        self.state = DriverState::Uninitialized;
        self.reset()?;
        delay.delay_ms(RESET_DELAY_MS);
        self.wake()?;
        self.apply_config(Config::DEFAULT)?;
        self.state = DriverState::Ready;
        log_debug!("MPU-6050 ready (awake)");
        Ok(())
    }

    pub(crate) fn reset(&mut self) -> Result<(), Error> {
        self.write_reg(Register::PwrMgmt1, pwr_mgmt_1::DEVICE_RESET)
            .inspect_err(|_| log_warn!("MPU-6050 reset not acknowledged"))
    }

    pub(crate) fn wake(&mut self) -> Result<(), Error> {
        self.write_reg(Register::PwrMgmt1, pwr_mgmt_1::CLKSEL_INTERNAL)
    }

    pub(crate) fn sleep(&mut self) -> Result<(), Error> {
        self.write_reg(
            Register::PwrMgmt1,
            pwr_mgmt_1::SLEEP | pwr_mgmt_1::CLKSEL_INTERNAL,
        )
    }

    pub(crate) fn who_am_i(&mut self) -> Result<u8, Error> {
        self.interface.read_reg(Register::WhoAmI.addr())
    }

    pub(crate) fn verify_device(&mut self) -> Result<(), Error> {
        let who = self.who_am_i()?;
        if who != who_am_i::EXPECTED {
            log_warn!("unexpected WHO_AM_I {=u8:#x}", who);
            return Err(Error::WrongDevice);
        }
        Ok(())
    }

    pub(crate) fn apply_config(&mut self, config: Config) -> Result<(), Error> {
        self.set_gyro_range(config.gyro_range)?;
        self.set_accel_range(config.accel_range)?;
        self.set_low_pass(config.low_pass)
    }

    pub(crate) fn set_low_pass(&mut self, low_pass: LowPassFilter) -> Result<(), Error> {
        self.write_reg(Register::Config, low_pass.config_value())?;
        self.low_pass = Some(low_pass);
        log_trace!("low-pass set to {=u16} Hz", low_pass.bandwidth_hz());
        Ok(())
    }

    pub(crate) fn set_gyro_range(&mut self, range: GyroRange) -> Result<(), Error> {
        self.write_reg(Register::GyroConfig, range.config_value())?;
        self.gyro_range = range;
        self.gyro_factor = gyro_factor(range);
        log_trace!("gyro range set to {=u16} dps", range.dps());
        Ok(())
    }

    pub(crate) fn set_accel_range(&mut self, range: AccelRange) -> Result<(), Error> {
        self.write_reg(Register::AccelConfig, range.config_value())?;
        self.accel_range = range;
        self.accel_factor = accel_factor(range);
        log_trace!("accel range set to {=u16} g", range.g());
        Ok(())
    }

    pub(crate) fn read_raw(&mut self) -> Result<RawBlock, Error> {
        let mut buffer = [0u8; RAW_BLOCK_LEN];
        let received = self
            .interface
            .read_regs(RAW_BLOCK_START.addr(), &mut buffer)?;
        if received != RAW_BLOCK_LEN {
            log_warn!(
                "burst read returned {=usize} of {=usize} bytes",
                received,
                RAW_BLOCK_LEN
            );
            return Err(Error::PartialRead {
                expected: RAW_BLOCK_LEN,
                received,
            });
        }
        Ok(decode_raw_block(&buffer))
    }

    pub(crate) fn read_all(&mut self) -> Result<Reading, Error> {
        let block = self.read_raw()?;
        Ok(convert_block(block, self.gyro_factor, self.accel_factor))
    }

    fn write_reg(&mut self, reg: Register, value: u8) -> Result<(), Error> {
        self.interface.write_reg(reg.addr(), value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::register::config;
    use crate::testing::{MockDelay, MockInterface};

    #[test]
    fn new_core_starts_uninitialized_with_table_factors() {
        let core = DeviceCore::new(MockInterface::default());
        assert_eq!(core.state(), DriverState::Uninitialized);
        assert_eq!(core.gyro_factor().to_bits(), 500);
        assert_eq!(core.accel_factor().to_bits(), 4);
        assert_eq!(core.low_pass(), None);
        assert!(core.interface().writes().is_empty());
    }

    #[test]
    fn begin_with_delay_wakes_after_reset() {
        let mut core = DeviceCore::new(MockInterface::default());
        let mut delay = MockDelay::default();
        core.begin_with_delay(&mut delay).expect("begin");

        assert_eq!(delay.total_ns, 100_000_000);
        assert!(delay.calls >= 1);
        let writes = core.interface().writes();
        assert_eq!(writes[0], (Register::PwrMgmt1.addr(), 0x80));
        assert_eq!(writes[1], (Register::PwrMgmt1.addr(), 0x00));
        assert_eq!(writes.len(), 5);
        assert_eq!(core.state(), DriverState::Ready);
    }

    #[test]
    fn low_pass_write_stays_in_dlpf_field() {
        let mut core = DeviceCore::new(MockInterface::default());
        core.set_low_pass(LowPassFilter::Hz5).expect("low pass");
        let value = core.interface().reg(Register::Config.addr());
        assert_eq!(value, 6);
        assert_eq!(value & !config::DLPF_CFG_MASK, 0);
    }

    #[test]
    fn sleep_sets_sleep_bit() {
        let mut core = DeviceCore::new(MockInterface::default());
        core.sleep().expect("sleep");
        assert_eq!(core.interface().reg(Register::PwrMgmt1.addr()), 0x40);
        core.wake().expect("wake");
        assert_eq!(core.interface().reg(Register::PwrMgmt1.addr()), 0x00);
    }
}
