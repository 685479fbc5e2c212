//! Error type for the MPU-6050 driver.

/// Error type for MPU-6050 and fixed-point operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Bus communication error (NACK, arbitration loss, transport fault).
    Bus,
    /// A burst read returned fewer bytes than requested.
    PartialRead {
        /// Number of bytes requested.
        expected: usize,
        /// Number of bytes actually received.
        received: usize,
    },
    /// Fixed-point division with a zero divisor.
    DivideByZero,
    /// Invalid data or configuration value.
    InvalidData,
    /// WHO_AM_I did not match the MPU-6050 identifier.
    WrongDevice,
}
