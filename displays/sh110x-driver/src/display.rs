//! Drawing façade
//!
//! [`Display`] owns the protocol driver and the committed framebuffer
//! behind one async mutex. Every drawing call renders onto a copy of the
//! committed buffer and adopts the copy only after it reached the panel,
//! so a failed write never changes what [`Display::framebuffer`] reports.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::mutex::Mutex;
use embassy_sync::signal::Signal;
use embedded_hal_async::delay::DelayNs;
use sh110x_gfx::{draw_line, render_string, Framebuffer};
use sh110x_hal::{BusProvider, I2cBus};

use crate::animation::{AnimationOutcome, StartupAnimation};
use crate::config::DisplayConfig;
use crate::error::Error;
use crate::protocol::{DeviceState, InitOutcome, RetryPolicy, Sh110x};

struct Inner<B, D> {
    device: Sh110x<B, D>,
    /// Last buffer known to have reached the panel
    current: Framebuffer,
    in_sync: bool,
}

impl<B, D> Inner<B, D>
where
    B: I2cBus,
    D: DelayNs,
{
    /// Probe, commit, and adopt `fb` on success
    async fn push(&mut self, fb: Framebuffer) -> Result<(), Error<B::Error>> {
        match self.device.present(&fb).await {
            Ok(()) => {
                self.current = fb;
                self.in_sync = true;
                Ok(())
            }
            Err(e) => {
                // Partial page writes leave the panel ahead of `current`
                if matches!(e, Error::Transfer(_)) {
                    self.in_sync = false;
                }
                #[cfg(feature = "defmt")]
                defmt::warn!("SH110x commit failed: {:?}", defmt::Debug2Format(&e));
                Err(e)
            }
        }
    }
}

/// SH110x panel with a resident framebuffer
///
/// Operations may be called from several tasks; they run one at a time in
/// lock order.
pub struct Display<M: RawMutex, B, D> {
    inner: Mutex<M, Inner<B, D>>,
}

impl<M, B, D> Display<M, B, D>
where
    M: RawMutex,
    B: I2cBus,
    D: DelayNs,
{
    /// Wrap a bus without touching it
    ///
    /// Call [`power_on`](Self::power_on) before drawing, or use
    /// [`from_config`](Self::from_config).
    pub fn new(bus: B, delay: D, address: u8) -> Self {
        Self {
            inner: Mutex::new(Inner {
                device: Sh110x::new(bus, delay, address),
                current: Framebuffer::blank(),
                in_sync: true,
            }),
        }
    }

    /// Build a ready display from its configuration
    ///
    /// Opens the configured bus, runs the bounded init loop and plays the
    /// startup sweep unless disabled. Init exhaustion and animation
    /// failures are logged; only config and bus lookup errors fail.
    pub async fn from_config<P, C>(
        config: &DisplayConfig,
        provider: &mut P,
        delay: D,
        cancel: &Signal<C, ()>,
    ) -> Result<Self, Error<B::Error>>
    where
        P: BusProvider<Bus = B>,
        C: RawMutex,
    {
        config.validate()?;

        let bus = provider
            .open_bus(config.i2c_bus.as_str())
            .map_err(Error::BusAcquisition)?;

        if config.uses_default_address() {
            #[cfg(feature = "defmt")]
            defmt::warn!("using i2c address: {=u8:#x}", config.address());
        }

        let display = Self::new(bus, delay, config.address());

        let _outcome = display.power_on(config.retry_policy()).await;
        #[cfg(feature = "defmt")]
        if !_outcome.is_ready() {
            defmt::warn!("SH110x init exhausted: {}", _outcome);
        }

        if !config.skip_animation {
            let _outcome = display.play_startup_animation(cancel).await;
            #[cfg(feature = "defmt")]
            defmt::debug!("startup animation: {}", _outcome);
        }

        Ok(display)
    }

    /// Bounded power-on initialisation
    pub async fn power_on(&self, policy: RetryPolicy) -> InitOutcome {
        let mut inner = self.inner.lock().await;
        inner.device.initialize_with_retry(policy).await
    }

    /// Commit the startup sweep frame by frame
    ///
    /// `cancel` is checked before each frame. The last committed frame
    /// stays on the panel when the sweep stops early.
    pub async fn play_startup_animation<C: RawMutex>(
        &self,
        cancel: &Signal<C, ()>,
    ) -> AnimationOutcome {
        let mut inner = self.inner.lock().await;

        for (frames, frame) in StartupAnimation::new().enumerate() {
            if cancel.signaled() {
                #[cfg(feature = "defmt")]
                defmt::info!("startup animation cancelled after {} frames", frames);
                return AnimationOutcome::Cancelled { frames };
            }
            if inner.push(frame).await.is_err() {
                return AnimationOutcome::Failed { frames };
            }
        }

        AnimationOutcome::Completed
    }

    /// Replace the screen with raw framebuffer bytes
    ///
    /// The first 1024 bytes are used; a shorter slice is zero padded.
    pub async fn display_bytes(&self, data: &[u8]) -> Result<(), Error<B::Error>> {
        let mut inner = self.inner.lock().await;
        inner.push(Framebuffer::from_bytes(data)).await
    }

    /// Draw `text` with its baseline at `y`, starting at `x`
    pub async fn write_string(&self, x: i32, y: i32, text: &str) -> Result<(), Error<B::Error>> {
        let mut inner = self.inner.lock().await;
        let mut fb = inner.current.clone();
        render_string(&mut fb, x, y, text);
        inner.push(fb).await
    }

    /// Draw a line between two points, both inclusive
    pub async fn draw_line(
        &self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
    ) -> Result<(), Error<B::Error>> {
        let mut inner = self.inner.lock().await;
        let mut fb = inner.current.clone();
        draw_line(&mut fb, x1, y1, x2, y2);
        inner.push(fb).await
    }

    /// Re-initialise the controller and clear the screen
    ///
    /// The blank frame is committed even when init fails; the init error
    /// is returned once the screen has been cleared.
    pub async fn reset(&self) -> Result<(), Error<B::Error>> {
        let mut inner = self.inner.lock().await;
        let init = inner.device.initialize().await;
        inner.push(Framebuffer::blank()).await?;
        init
    }

    /// Copy of the committed framebuffer
    pub async fn framebuffer(&self) -> Framebuffer {
        self.inner.lock().await.current.clone()
    }

    /// Whether the panel is known to show [`framebuffer`](Self::framebuffer)
    pub async fn is_in_sync(&self) -> bool {
        self.inner.lock().await.in_sync
    }

    /// Controller state as last observed by the protocol driver
    pub async fn device_state(&self) -> DeviceState {
        self.inner.lock().await.device.state()
    }

    /// Tear down into bus and delay
    pub fn into_parts(self) -> (B, D) {
        self.inner.into_inner().device.release()
    }
}
