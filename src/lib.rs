//! # nonce-store
//!
//! Single-use token (nonce) issuance and validation for authentication
//! handshakes such as SSO redirect flows. The service generates
//! unpredictable, case-insensitive tokens with at least 128 bits of entropy,
//! tracks their expiration, enforces strict one-time use, and reclaims
//! memory for abandoned tokens opportunistically during generation.

pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use errors::*;
pub use services::*;
