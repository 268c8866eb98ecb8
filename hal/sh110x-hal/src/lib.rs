//! sh110x Hardware Abstraction Layer
//!
//! This crate defines the bus traits the display driver talks through. A
//! platform supplies a [`BusProvider`] that resolves a configured bus name
//! to an [`I2cBus`]; the bus hands out short-lived [`I2cHandle`]s bound to a
//! single device address, one per protocol transaction.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  sh110x-driver (protocol + facade)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  sh110x-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  AsyncBus     │       │  BlockingBus  │
//! │ (e-h-async)   │       │ (e-h 1.0)     │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`i2c::BusProvider`] - Named bus lookup
//! - [`i2c::I2cBus`] - Handle factory for one physical bus
//! - [`i2c::I2cHandle`] - Open session on one device address

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod adapter;
pub mod i2c;

// Re-export key traits at crate root for convenience
pub use adapter::{AsyncBus, BlockingBus};
pub use i2c::{BusProvider, I2cBus, I2cHandle};
