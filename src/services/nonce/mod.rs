//! Single-use nonce service for replay attack prevention
//!
//! This module provides the complete nonce lifecycle:
//! - Cryptographically-secure generation of case-insensitive tokens with at
//!   least 128 bits of entropy
//! - Strict one-time validation that consumes the token on any lookup,
//!   successful or not
//! - Opportunistic sweeping of expired entries on the generation path, so no
//!   background timer or task is required

mod clock;
mod config;
mod generator;
mod service;

#[cfg(test)]
mod tests;

pub use clock::{Clock, SystemClock};
pub use config::{NonceServiceConfig, NONCE_BITS, SWEEP_INTERVAL_SECONDS};
pub use generator::{IdentifierGenerator, SecureIdentifierGenerator};
pub use service::NonceService;
