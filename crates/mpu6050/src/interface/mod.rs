//! Interface abstraction for register I/O.

pub(crate) mod address;
pub(crate) mod i2c;

pub use address::Mpu6050Address;
pub use i2c::I2cInterface;

use crate::error::Error;

/// Minimal blocking register I/O for the device core.
///
/// Implemented by [`I2cInterface`] for any `embedded-hal` I2C bus. Custom
/// transports can implement it directly, for instance to report a short read
/// from a bus that can stop early.
pub trait Interface {
    /// Writes a single register in one transaction.
    fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), Error>;

    /// Reads a contiguous block of registers into `buffer`.
    ///
    /// The register pointer is written without releasing the bus, then the
    /// read follows after a repeated start. Returns the number of bytes
    /// actually received, which may be less than `buffer.len()`.
    fn read_regs(&mut self, reg: u8, buffer: &mut [u8]) -> Result<usize, Error>;

    /// Reads a single register.
    fn read_reg(&mut self, reg: u8) -> Result<u8, Error> {
        let mut buffer = [0u8];
        let received = self.read_regs(reg, &mut buffer)?;
        if received != buffer.len() {
            return Err(Error::PartialRead {
                expected: buffer.len(),
                received,
            });
        }
        Ok(buffer[0])
    }
}
