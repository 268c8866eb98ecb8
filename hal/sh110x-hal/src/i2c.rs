//! I2C bus abstractions
//!
//! The display protocol never keeps a device session open between
//! operations. Each transaction (init, status probe, frame write) opens a
//! handle, uses it, and drops it. Dropping the handle releases the bus on
//! every exit path, including early returns on error.

/// Resolves a configured bus identifier (e.g. `"1"` for `/dev/i2c-1`)
/// to a bus instance.
pub trait BusProvider {
    /// Bus type handed out by this provider
    type Bus: I2cBus;

    /// Open the bus named `identifier`
    fn open_bus(&mut self, identifier: &str) -> Result<Self::Bus, <Self::Bus as I2cBus>::Error>;
}

/// I2C bus master that hands out per-transaction device handles
///
/// The handle mutably borrows the bus, so at most one session can be open
/// at a time.
pub trait I2cBus {
    /// Error type for I2C operations
    type Error: core::fmt::Debug;

    /// Session on one device address
    type Handle<'a>: I2cHandle<Error = Self::Error>
    where
        Self: 'a;

    /// Open a session on the device at `address`
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    fn open_handle(&mut self, address: u8) -> Result<Self::Handle<'_>, Self::Error>;
}

/// Open session on a single device
#[allow(async_fn_in_trait)]
pub trait I2cHandle {
    /// Error type for transfers
    type Error: core::fmt::Debug;

    /// Write `data` to the device in one transfer
    async fn write(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Read `buf.len()` bytes from the device
    async fn read(&mut self, buf: &mut [u8]) -> Result<(), Self::Error>;
}
