//! Display configuration
//!
//! Attributes the hosting service hands to the driver at construction.
//! Keys keep the names used by the service's component config:
//!
//! ```toml
//! i2c_bus = "1"
//! i2c_addr = 0x3C        # optional, 0 or absent selects 0x3C
//! skip_animation = false # optional
//! init_attempts = 4      # optional
//! ```

use heapless::String;
use serde::{Deserialize, Serialize};

use crate::protocol::RetryPolicy;

/// Maximum length of a bus identifier
pub const MAX_BUS_ID_LEN: usize = 32;

/// Default 7-bit device address
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Default bound for the power-on init loop
pub const DEFAULT_INIT_ATTEMPTS: u8 = 4;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A required field is missing or empty
    MissingField(&'static str),
    /// Address does not fit in 7 bits
    InvalidAddress(u8),
    /// `init_attempts` is zero
    InvalidAttempts,
    /// Value does not fit its field (e.g. bus identifier too long)
    TooLong(&'static str),
    /// Input is not valid TOML or has wrongly typed values
    Parse,
}

fn default_init_attempts() -> u8 {
    DEFAULT_INIT_ATTEMPTS
}

/// Display attributes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    /// Bus identifier resolved by the platform's bus provider
    #[serde(default)]
    pub i2c_bus: String<MAX_BUS_ID_LEN>,
    /// Device address; `None` or `0` selects [`DEFAULT_ADDRESS`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub i2c_addr: Option<u8>,
    /// Skip the startup sweep
    #[serde(default)]
    pub skip_animation: bool,
    /// Bound for the power-on init loop
    #[serde(default = "default_init_attempts")]
    pub init_attempts: u8,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            i2c_bus: String::new(),
            i2c_addr: None,
            skip_animation: false,
            init_attempts: DEFAULT_INIT_ATTEMPTS,
        }
    }
}

impl DisplayConfig {
    /// Config for the named bus with every other field defaulted
    pub fn new(i2c_bus: &str) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config
            .i2c_bus
            .push_str(i2c_bus)
            .map_err(|_| ConfigError::TooLong("i2c_bus"))?;
        Ok(config)
    }

    /// Parse and validate a TOML document
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input).map_err(|_e| {
            #[cfg(feature = "defmt")]
            defmt::warn!("TOML parse error: {:?}", defmt::Debug2Format(&_e));
            ConfigError::Parse
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check required fields and ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.i2c_bus.trim().is_empty() {
            return Err(ConfigError::MissingField("i2c_bus"));
        }
        if let Some(addr) = self.i2c_addr {
            if addr > 0x7F {
                return Err(ConfigError::InvalidAddress(addr));
            }
        }
        if self.init_attempts == 0 {
            return Err(ConfigError::InvalidAttempts);
        }
        Ok(())
    }

    /// Whether the address falls back to [`DEFAULT_ADDRESS`]
    pub fn uses_default_address(&self) -> bool {
        matches!(self.i2c_addr, None | Some(0))
    }

    /// Effective 7-bit device address
    pub fn address(&self) -> u8 {
        match self.i2c_addr {
            Some(addr) if addr != 0 => addr,
            _ => DEFAULT_ADDRESS,
        }
    }

    /// Retry policy for power-on initialisation
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.init_attempts)
    }
}
