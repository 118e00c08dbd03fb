//! Tests for the nonce service

#[cfg(test)]
mod config_tests;
