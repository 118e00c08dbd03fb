//! Unit tests for nonce service configuration

use crate::errors::NonceError;
use crate::services::nonce::{NonceServiceConfig, NONCE_BITS, SWEEP_INTERVAL_SECONDS};

#[test]
fn test_default_config_is_valid() {
    let config = NonceServiceConfig::default();

    assert_eq!(config.nonce_bits, NONCE_BITS);
    assert_eq!(config.sweep_interval_seconds, SWEEP_INTERVAL_SECONDS);
    assert!(config.validate().is_ok());
}

#[test]
fn test_rejects_insufficient_entropy() {
    let config = NonceServiceConfig::default().with_nonce_bits(64);

    match config.validate() {
        Err(NonceError::InvalidConfig { message }) => {
            assert!(message.contains("nonce_bits"));
        }
        other => panic!("Expected invalid config error, got {:?}", other),
    }
}

#[test]
fn test_rejects_non_positive_sweep_interval() {
    let config = NonceServiceConfig::default().with_sweep_interval_seconds(0);
    assert!(config.validate().is_err());

    let config = NonceServiceConfig::default().with_sweep_interval_seconds(-5);
    assert!(config.validate().is_err());
}

#[test]
fn test_accepts_stronger_entropy() {
    let config = NonceServiceConfig::default().with_nonce_bits(256);
    assert!(config.validate().is_ok());
}

#[test]
fn test_deserializes_with_field_defaults() {
    let config: NonceServiceConfig = serde_json::from_str("{}").unwrap();

    assert_eq!(config.nonce_bits, NONCE_BITS);
    assert_eq!(config.sweep_interval_seconds, SWEEP_INTERVAL_SECONDS);
}

#[test]
fn test_deserializes_explicit_values() {
    let config: NonceServiceConfig =
        serde_json::from_str(r#"{"nonce_bits": 192, "sweep_interval_seconds": 120}"#).unwrap();

    assert_eq!(config.nonce_bits, 192);
    assert_eq!(config.sweep_interval_seconds, 120);
}
