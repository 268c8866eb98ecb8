//! SH110x OLED driver
//!
//! Async driver for 128x64 SH110x panels on I2C. It keeps the panel's
//! contents in a resident [`Framebuffer`] and pushes the whole buffer on
//! every drawing call, checking first whether the controller reset and
//! needs its configuration sent again.
//!
//! # Layers
//!
//! - [`protocol::Sh110x`] - init sequence, status probe, paged frame write
//! - [`display::Display`] - mutex-guarded drawing API over the protocol
//! - [`config::DisplayConfig`] - attributes from the hosting service
//!
//! # Quick start
//!
//! ```ignore
//! use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
//! use embassy_sync::signal::Signal;
//! use sh110x_driver::{hal::AsyncBus, Display};
//!
//! static CANCEL: Signal<CriticalSectionRawMutex, ()> = Signal::new();
//!
//! let display: Display<CriticalSectionRawMutex, _, _> =
//!     Display::new(AsyncBus::new(i2c), delay, 0x3C);
//! display.power_on(Default::default()).await;
//! display.play_startup_animation(&CANCEL).await;
//! display.write_string(0, 20, "Hello").await?;
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod animation;
pub mod config;
pub mod display;
pub mod error;
pub mod protocol;

#[cfg(test)]
mod mock;

pub use sh110x_gfx as gfx;
pub use sh110x_hal as hal;

pub use animation::{AnimationOutcome, StartupAnimation};
pub use config::{ConfigError, DisplayConfig, DEFAULT_ADDRESS};
pub use display::Display;
pub use error::Error;
pub use gfx::Framebuffer;
pub use protocol::{DeviceState, InitOutcome, Probe, RetryPolicy, Sh110x};
