//! Adapters from `embedded-hal` I2C masters to [`I2cBus`]
//!
//! Both adapters own the master and open handles infallibly; opening a
//! session on a shared master is just binding an address. Platforms where
//! acquiring the device can fail (e.g. an `ioctl(I2C_SLAVE)` on Linux)
//! implement [`I2cBus`] directly.

use embedded_hal::i2c::I2c as BlockingI2c;
use embedded_hal_async::i2c::I2c as AsyncI2c;

use crate::i2c::{I2cBus, I2cHandle};

/// Bus over an async `embedded-hal-async` I2C master
pub struct AsyncBus<I> {
    i2c: I,
}

impl<I> AsyncBus<I> {
    /// Wrap an async I2C master
    pub const fn new(i2c: I) -> Self {
        Self { i2c }
    }

    /// Give back the wrapped master
    pub fn release(self) -> I {
        self.i2c
    }
}

impl<I: AsyncI2c> I2cBus for AsyncBus<I> {
    type Error = I::Error;
    type Handle<'a>
        = AsyncHandle<'a, I>
    where
        Self: 'a;

    fn open_handle(&mut self, address: u8) -> Result<Self::Handle<'_>, Self::Error> {
        Ok(AsyncHandle {
            i2c: &mut self.i2c,
            address,
        })
    }
}

/// Session handle produced by [`AsyncBus`]
pub struct AsyncHandle<'a, I> {
    i2c: &'a mut I,
    address: u8,
}

impl<I: AsyncI2c> I2cHandle for AsyncHandle<'_, I> {
    type Error = I::Error;

    async fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.i2c.write(self.address, data).await
    }

    async fn read(&mut self, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.i2c.read(self.address, buf).await
    }
}

/// Bus over a blocking `embedded-hal` I2C master
///
/// Transfers complete before the returned future is first polled, so the
/// driver runs unchanged on hosts whose I2C masters only expose blocking
/// calls.
pub struct BlockingBus<I> {
    i2c: I,
}

impl<I> BlockingBus<I> {
    /// Wrap a blocking I2C master
    pub const fn new(i2c: I) -> Self {
        Self { i2c }
    }

    /// Give back the wrapped master
    pub fn release(self) -> I {
        self.i2c
    }
}

impl<I: BlockingI2c> I2cBus for BlockingBus<I> {
    type Error = I::Error;
    type Handle<'a>
        = BlockingHandle<'a, I>
    where
        Self: 'a;

    fn open_handle(&mut self, address: u8) -> Result<Self::Handle<'_>, Self::Error> {
        Ok(BlockingHandle {
            i2c: &mut self.i2c,
            address,
        })
    }
}

/// Session handle produced by [`BlockingBus`]
pub struct BlockingHandle<'a, I> {
    i2c: &'a mut I,
    address: u8,
}

impl<I: BlockingI2c> I2cHandle for BlockingHandle<'_, I> {
    type Error = I::Error;

    async fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.i2c.write(self.address, data)
    }

    async fn read(&mut self, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.i2c.read(self.address, buf)
    }
}
