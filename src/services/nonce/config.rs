//! Configuration for the nonce service

use serde::{Deserialize, Serialize};

use crate::errors::{NonceError, NonceResult};

/// Minimum number of bits of entropy to include in each nonce
pub const NONCE_BITS: usize = 128;

/// Default minimum amount of time to wait between sweeps of expired nonces,
/// in seconds
pub const SWEEP_INTERVAL_SECONDS: i64 = 60;

/// Configuration for the nonce service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NonceServiceConfig {
    /// Bits of entropy in each generated nonce (minimum 128)
    #[serde(default = "default_nonce_bits")]
    pub nonce_bits: usize,

    /// Minimum seconds between sweeps of expired entries
    #[serde(default = "default_sweep_interval_seconds")]
    pub sweep_interval_seconds: i64,
}

fn default_nonce_bits() -> usize {
    NONCE_BITS
}

fn default_sweep_interval_seconds() -> i64 {
    SWEEP_INTERVAL_SECONDS
}

impl Default for NonceServiceConfig {
    fn default() -> Self {
        Self {
            nonce_bits: NONCE_BITS,
            sweep_interval_seconds: SWEEP_INTERVAL_SECONDS,
        }
    }
}

impl NonceServiceConfig {
    /// Set the bits of entropy per nonce
    pub fn with_nonce_bits(mut self, bits: usize) -> Self {
        self.nonce_bits = bits;
        self
    }

    /// Set the minimum interval between sweeps in seconds
    pub fn with_sweep_interval_seconds(mut self, seconds: i64) -> Self {
        self.sweep_interval_seconds = seconds;
        self
    }

    /// Check the configuration for values that would weaken the service
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Configuration is usable
    /// * `Err(NonceError::InvalidConfig)` - A field is out of range
    pub fn validate(&self) -> NonceResult<()> {
        if self.nonce_bits < NONCE_BITS {
            return Err(NonceError::InvalidConfig {
                message: format!(
                    "nonce_bits must be at least {}, got {}",
                    NONCE_BITS, self.nonce_bits
                ),
            });
        }

        if self.sweep_interval_seconds <= 0 {
            return Err(NonceError::InvalidConfig {
                message: format!(
                    "sweep_interval_seconds must be positive, got {}",
                    self.sweep_interval_seconds
                ),
            });
        }

        Ok(())
    }
}
