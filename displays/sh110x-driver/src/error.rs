//! Driver error types

use crate::config::ConfigError;

/// Errors surfaced by the display driver
///
/// `E` is the bus error type of the underlying [`I2cBus`].
///
/// [`I2cBus`]: sh110x_hal::I2cBus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Invalid or incomplete configuration (construction only)
    Config(ConfigError),
    /// The bus or a device handle could not be opened
    BusAcquisition(E),
    /// A read or write on an open handle failed
    Transfer(E),
}

impl<E> From<ConfigError> for Error<E> {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}
