//! SH110x device protocol
//!
//! Power-on initialisation, the status probe that detects a controller
//! that lost its configuration, and the paged frame write.
//!
//! Every transaction opens its own handle and drops it before returning,
//! on success and on error alike.

use embedded_hal_async::delay::DelayNs;
use sh110x_gfx::{Framebuffer, DEVICE_WIDTH};
use sh110x_hal::{I2cBus, I2cHandle};

use crate::config::DEFAULT_INIT_ATTEMPTS;
use crate::error::Error;

/// SH110x commands
pub mod cmd {
    /// Control byte: command stream follows
    pub const CONTROL_COMMAND: u8 = 0x00;
    /// Control byte: display RAM data follows
    pub const CONTROL_DATA: u8 = 0x40;

    pub const SET_LOW_COLUMN: u8 = 0x00;
    pub const SET_HIGH_COLUMN: u8 = 0x10;
    pub const MEMORY_MODE: u8 = 0x20;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const SEG_REMAP: u8 = 0xA0;
    pub const DISPLAY_ALL_ON_RESUME: u8 = 0xA4;
    pub const NORMAL_DISPLAY: u8 = 0xA6;
    pub const SET_MULTIPLEX: u8 = 0xA8;
    pub const DCDC: u8 = 0xAD;
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_PAGE_ADDR: u8 = 0xB0;
    pub const COM_SCAN_INC: u8 = 0xC0;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
    pub const SET_DISP_START_LINE: u8 = 0xDC;
}

/// Contrast preset written ahead of the init sequence
pub const CONTRAST_SEQUENCE: [u8; 3] = [cmd::CONTROL_COMMAND, cmd::SET_CONTRAST, 0x2F];

/// Panel configuration, sent as one command stream
pub const INIT_SEQUENCE: [u8; 23] = [
    cmd::CONTROL_COMMAND,
    cmd::DISPLAY_OFF,
    cmd::SET_CLOCK_DIV,
    0x51,
    cmd::MEMORY_MODE,
    cmd::SET_CONTRAST,
    0x4F,
    cmd::DCDC,
    0x8A, // Charge pump on
    cmd::SEG_REMAP,
    cmd::COM_SCAN_INC,
    cmd::SET_DISP_START_LINE,
    0x00,
    cmd::SET_DISPLAY_OFFSET,
    0x60,
    cmd::SET_PRECHARGE,
    0x22,
    cmd::SET_VCOM_DETECT,
    0x35,
    cmd::SET_MULTIPLEX,
    0x3F,
    cmd::DISPLAY_ALL_ON_RESUME,
    cmd::NORMAL_DISPLAY,
];

/// Display-on command, sent once the panel has settled
pub const DISPLAY_ON_SEQUENCE: [u8; 2] = [cmd::CONTROL_COMMAND, cmd::DISPLAY_ON];

/// Settle time between configuration and display-on
pub const SETTLE_DELAY_MS: u32 = 100;

/// Status byte reported by a controller that came out of reset
pub const STATUS_RESET: u8 = 0x47;

/// Data transfer sizes for one 64-byte page
///
/// The target bus rejects transfers above 32 bytes including the control
/// byte.
pub const PAGE_CHUNKS: [usize; 3] = [31, 31, 2];

const MAX_CHUNK: usize = 31;

const _: () = assert!(PAGE_CHUNKS[0] + PAGE_CHUNKS[1] + PAGE_CHUNKS[2] == DEVICE_WIDTH);

/// Controller configuration state as the driver last observed it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceState {
    /// No successful init yet
    Uninitialized,
    /// Configured
    Ready,
    /// Probe reported a reset and re-init has not succeeded yet
    Lost,
}

/// Result of a status probe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Probe {
    /// Controller still configured
    Configured,
    /// Controller had reset and was re-initialised
    Recovered,
}

/// Bounded retry for power-on initialisation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RetryPolicy {
    /// Maximum number of init attempts
    pub attempts: u8,
}

impl RetryPolicy {
    /// Policy with `attempts` tries
    pub const fn new(attempts: u8) -> Self {
        Self { attempts }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_INIT_ATTEMPTS)
    }
}

/// Outcome of [`Sh110x::initialize_with_retry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InitOutcome {
    /// An attempt succeeded; `attempts` counts the tries used
    Ready { attempts: u8 },
    /// Every attempt failed
    Exhausted { attempts: u8 },
}

impl InitOutcome {
    /// Whether an attempt succeeded
    pub fn is_ready(&self) -> bool {
        matches!(self, InitOutcome::Ready { .. })
    }
}

/// SH110x controller on an I2C bus
pub struct Sh110x<B, D> {
    bus: B,
    delay: D,
    address: u8,
    state: DeviceState,
}

impl<B, D> Sh110x<B, D> {
    /// Create a driver for the controller at `address`
    ///
    /// No bus traffic is generated.
    pub const fn new(bus: B, delay: D, address: u8) -> Self {
        Self {
            bus,
            delay,
            address,
            state: DeviceState::Uninitialized,
        }
    }

    /// 7-bit device address
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Last observed controller state
    pub fn state(&self) -> DeviceState {
        self.state
    }

    /// Give back the bus and delay
    pub fn release(self) -> (B, D) {
        (self.bus, self.delay)
    }
}

impl<B, D> Sh110x<B, D>
where
    B: I2cBus,
    D: DelayNs,
{
    /// Send the power-on sequence
    ///
    /// Contrast preset, configuration stream, 100 ms settle, display on.
    /// Safe to repeat.
    ///
    /// Stops at the first failed write, so display-on is only sent after
    /// the configuration went through. [`initialize_with_retry`] repeats
    /// the whole sequence instead.
    ///
    /// [`initialize_with_retry`]: Self::initialize_with_retry
    pub async fn initialize(&mut self) -> Result<(), Error<B::Error>> {
        let mut handle = self
            .bus
            .open_handle(self.address)
            .map_err(Error::BusAcquisition)?;

        handle
            .write(&CONTRAST_SEQUENCE)
            .await
            .map_err(Error::Transfer)?;
        handle.write(&INIT_SEQUENCE).await.map_err(Error::Transfer)?;

        self.delay.delay_ms(SETTLE_DELAY_MS).await;

        handle
            .write(&DISPLAY_ON_SEQUENCE)
            .await
            .map_err(Error::Transfer)?;
        drop(handle);

        self.state = DeviceState::Ready;
        Ok(())
    }

    /// Run [`initialize`](Self::initialize) until it succeeds or the
    /// policy runs out
    ///
    /// Exhaustion is reported, not raised: callers carry on and rely on
    /// the probe before each frame write.
    pub async fn initialize_with_retry(&mut self, policy: RetryPolicy) -> InitOutcome {
        for attempt in 1..=policy.attempts {
            match self.initialize().await {
                Ok(()) => {
                    #[cfg(feature = "defmt")]
                    defmt::info!("SH110x init ok (attempt {})", attempt);
                    return InitOutcome::Ready { attempts: attempt };
                }
                Err(_e) => {
                    #[cfg(feature = "defmt")]
                    defmt::warn!(
                        "SH110x init attempt {} failed: {:?}",
                        attempt,
                        defmt::Debug2Format(&_e)
                    );
                }
            }
        }
        InitOutcome::Exhausted {
            attempts: policy.attempts,
        }
    }

    /// Read the status byte and re-initialise a controller that reset
    pub async fn probe_and_recover(&mut self) -> Result<Probe, Error<B::Error>> {
        let mut status = [0u8; 1];
        {
            let mut handle = self
                .bus
                .open_handle(self.address)
                .map_err(Error::BusAcquisition)?;
            handle.read(&mut status).await.map_err(Error::Transfer)?;
        }

        if status[0] != STATUS_RESET {
            self.state = DeviceState::Ready;
            return Ok(Probe::Configured);
        }

        #[cfg(feature = "defmt")]
        defmt::warn!("SH110x reset detected, re-initialising");
        self.state = DeviceState::Lost;
        self.initialize().await?;
        Ok(Probe::Recovered)
    }

    /// Write `fb` to display RAM page by page
    ///
    /// Each page selects its register and resets the column address, then
    /// streams the 64 column bytes in [`PAGE_CHUNKS`] sized transfers.
    /// A failure part way leaves the panel showing a mix of old and new
    /// pages.
    pub async fn commit(&mut self, fb: &Framebuffer) -> Result<(), Error<B::Error>> {
        let mut handle = self
            .bus
            .open_handle(self.address)
            .map_err(Error::BusAcquisition)?;

        for (page, columns) in fb.pages().enumerate() {
            let select = [
                cmd::CONTROL_COMMAND,
                cmd::SET_PAGE_ADDR + page as u8,
                cmd::SET_HIGH_COLUMN,
                cmd::SET_LOW_COLUMN,
            ];
            handle.write(&select).await.map_err(Error::Transfer)?;

            let mut start = 0;
            for len in PAGE_CHUNKS {
                let mut data = [0u8; MAX_CHUNK + 1];
                data[0] = cmd::CONTROL_DATA;
                data[1..=len].copy_from_slice(&columns[start..start + len]);
                handle.write(&data[..=len]).await.map_err(Error::Transfer)?;
                start += len;
            }
        }

        Ok(())
    }

    /// Probe, then commit
    ///
    /// A failed probe is logged and the commit goes ahead.
    pub async fn present(&mut self, fb: &Framebuffer) -> Result<(), Error<B::Error>> {
        if let Err(_e) = self.probe_and_recover().await {
            #[cfg(feature = "defmt")]
            defmt::warn!("SH110x status probe failed: {:?}", defmt::Debug2Format(&_e));
        }
        self.commit(fb).await
    }
}
