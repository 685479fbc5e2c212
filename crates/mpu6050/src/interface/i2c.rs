//! I2C interface adapter for the MPU-6050.

use embedded_hal::i2c::I2c;

use super::{Interface, Mpu6050Address};
use crate::error::Error;

/// I2C register interface.
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cInterface<I2C> {
    /// Creates a new I2C interface with the given bus and 7-bit address.
    pub const fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Creates a new I2C interface at the default address (0x68).
    pub const fn primary(i2c: I2C) -> Self {
        Self::new(i2c, Mpu6050Address::Primary.addr())
    }

    /// Returns the 7-bit I2C address.
    pub const fn address(&self) -> u8 {
        self.address
    }

    /// Releases the underlying I2C bus.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> Interface for I2cInterface<I2C>
where
    I2C: I2c,
{
    fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), Error> {
        self.i2c
            .write(self.address, &[reg, value])
            .map_err(|_| Error::Bus)
    }

    fn read_regs(&mut self, reg: u8, buffer: &mut [u8]) -> Result<usize, Error> {
        if buffer.is_empty() {
            return Ok(0);
        }
        // write_read completes the whole buffer or fails; there is no short read.
        self.i2c
            .write_read(self.address, &[reg], buffer)
            .map_err(|_| Error::Bus)?;
        Ok(buffer.len())
    }
}
