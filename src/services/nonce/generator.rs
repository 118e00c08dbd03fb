//! Cryptographically-secure identifier generation

use rand::rngs::OsRng;
use rand::RngCore;

use crate::errors::{NonceError, NonceResult};

/// Trait for the identifier-generation collaborator
///
/// Implementations must draw identifiers from a case-insensitive alphabet;
/// the nonce service normalizes them to lowercase for storage and
/// comparison. Injected into the service so tests can substitute a
/// deterministic generator.
pub trait IdentifierGenerator: Send + Sync {
    /// Generate a random identifier carrying at least `min_bits` bits of
    /// entropy
    ///
    /// # Arguments
    ///
    /// * `min_bits` - Minimum bits of entropy the identifier must contain
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The generated identifier
    /// * `Err(NonceError::EntropyUnavailable)` - The random source failed
    fn generate_identifier(&self, min_bits: usize) -> NonceResult<String>;
}

/// Identifier generator backed by the operating system CSPRNG
///
/// Identifiers are lowercase hex strings, so case folding can never make
/// two distinct identifiers collide.
#[derive(Debug, Default, Clone, Copy)]
pub struct SecureIdentifierGenerator;

impl SecureIdentifierGenerator {
    /// Create a new generator
    pub fn new() -> Self {
        Self
    }
}

impl IdentifierGenerator for SecureIdentifierGenerator {
    fn generate_identifier(&self, min_bits: usize) -> NonceResult<String> {
        // Round up so non-byte-aligned bit counts never lose entropy
        let byte_len = (min_bits + 7) / 8;
        let mut bytes = vec![0u8; byte_len];

        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| NonceError::EntropyUnavailable {
                message: format!("OS random source failed: {}", e),
            })?;

        Ok(hex::encode(bytes))
    }
}
