//! Error types for nonce issuance.
//!
//! Validation deliberately has no error path: unknown, expired, and
//! already-consumed nonces are all reported uniformly as `false` so a caller
//! (or an attacker probing the endpoint) cannot tell them apart.

use thiserror::Error;

/// Errors surfaced by nonce issuance and configuration.
#[derive(Error, Debug)]
pub enum NonceError {
    /// The secure random source could not produce entropy.
    #[error("Secure random source unavailable: {message}")]
    EntropyUnavailable { message: String },

    /// The service configuration was rejected.
    #[error("Invalid nonce service configuration: {message}")]
    InvalidConfig { message: String },
}

/// Convenience result alias for nonce operations.
pub type NonceResult<T> = Result<T, NonceError>;
