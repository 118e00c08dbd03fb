//! Business services containing the nonce lifecycle logic.

pub mod nonce;

// Re-export commonly used types
pub use nonce::{
    Clock, IdentifierGenerator, NonceService, NonceServiceConfig, SecureIdentifierGenerator,
    SystemClock, NONCE_BITS,
};
