//! Main nonce service implementation

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, trace};

use crate::errors::NonceResult;

use super::clock::{Clock, SystemClock};
use super::config::NonceServiceConfig;
use super::generator::{IdentifierGenerator, SecureIdentifierGenerator};

/// Mutable store state kept behind a single lock so that lookup-and-remove
/// is atomic with respect to concurrent validators.
struct StoreState {
    /// Map of issued nonces to their expiration instants
    nonces: HashMap<String, DateTime<Utc>>,
    /// When expired entries were last swept from the map
    last_sweep: DateTime<Utc>,
}

/// Service for generating and validating single-use random tokens (nonces)
///
/// Each generated nonce carries at least 128 bits of entropy and is
/// case-insensitive (stored and compared lowercase). Testing a nonce through
/// [`is_valid`](NonceService::is_valid) immediately and permanently consumes
/// it, whether or not the test succeeds, so a nonce can never validate
/// twice. Expired entries that are never validated are purged
/// opportunistically during generation rather than by a background task.
pub struct NonceService<G, C>
where
    G: IdentifierGenerator,
    C: Clock,
{
    /// Generator for cryptographically-secure identifiers
    generator: Arc<G>,
    /// Time source for expiration decisions
    clock: Arc<C>,
    /// Service configuration
    config: NonceServiceConfig,
    /// Nonce map and sweep bookkeeping
    state: Mutex<StoreState>,
}

impl NonceService<SecureIdentifierGenerator, SystemClock> {
    /// Create a service backed by the OS CSPRNG and the system clock, with
    /// the default configuration
    pub fn with_defaults() -> Self {
        let clock = Arc::new(SystemClock::new());
        let last_sweep = clock.now();

        Self {
            generator: Arc::new(SecureIdentifierGenerator::new()),
            clock,
            config: NonceServiceConfig::default(),
            state: Mutex::new(StoreState {
                nonces: HashMap::new(),
                last_sweep,
            }),
        }
    }
}

impl<G, C> NonceService<G, C>
where
    G: IdentifierGenerator,
    C: Clock,
{
    /// Create a new nonce service
    ///
    /// # Arguments
    ///
    /// * `generator` - Identifier generator implementation
    /// * `clock` - Time source implementation
    /// * `config` - Service configuration
    ///
    /// # Returns
    ///
    /// * `Ok(NonceService)` - The constructed service
    /// * `Err(NonceError::InvalidConfig)` - The configuration was rejected
    pub fn new(generator: Arc<G>, clock: Arc<C>, config: NonceServiceConfig) -> NonceResult<Self> {
        config.validate()?;
        let last_sweep = clock.now();

        Ok(Self {
            generator,
            clock,
            config,
            state: Mutex::new(StoreState {
                nonces: HashMap::new(),
                last_sweep,
            }),
        })
    }

    /// Generate a cryptographically-secure single-use nonce
    ///
    /// The nonce is intended to be embedded in an outgoing request and
    /// echoed back for exactly one validation. Generation first sweeps
    /// expired entries if enough time has passed since the last sweep.
    ///
    /// # Arguments
    ///
    /// * `max_age` - How long the nonce remains valid from now
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - A lowercase nonce with at least the configured bits
    ///   of entropy, not currently present in the store
    /// * `Err(NonceError::EntropyUnavailable)` - The random source failed
    pub fn generate(&self, max_age: Duration) -> NonceResult<String> {
        let now = self.clock.now();
        let mut state = self.lock_state();

        self.sweep_expired(&mut state, now);

        // Draw until the identifier is absent from the map. A collision in a
        // 128-bit space is astronomically unlikely, so the loop all but
        // never repeats.
        let nonce = loop {
            let candidate = self
                .generator
                .generate_identifier(self.config.nonce_bits)?
                .to_lowercase();
            if !state.nonces.contains_key(&candidate) {
                break candidate;
            }
        };

        state.nonces.insert(nonce.clone(), now + max_age);

        debug!(
            event = "nonce_issued",
            active = state.nonces.len(),
            "Issued single-use nonce"
        );

        Ok(nonce)
    }

    /// Generate a nonce valid for the given number of milliseconds
    ///
    /// Convenience wrapper over [`generate`](NonceService::generate).
    pub fn generate_ms(&self, max_age_ms: i64) -> NonceResult<String> {
        self.generate(Duration::milliseconds(max_age_ms))
    }

    /// Test whether the given nonce value is valid
    ///
    /// A nonce is valid if and only if it was generated by this service
    /// instance and has not yet expired. Testing validity immediately and
    /// permanently invalidates the nonce: the matching entry is removed even
    /// when the check fails on expiry. Comparisons are case-insensitive.
    ///
    /// Unknown, expired, and already-consumed nonces all yield `false` with
    /// no further distinction, so the result cannot serve as a replay or
    /// enumeration oracle. `None` yields `false` without touching the store.
    pub fn is_valid(&self, nonce: Option<&str>) -> bool {
        let nonce = match nonce {
            Some(value) => value,
            None => return false,
        };

        // Remove the entry while holding the lock so two concurrent
        // validators can never both observe the same nonce as present
        let expires_at = {
            let mut state = self.lock_state();
            state.nonces.remove(&nonce.to_lowercase())
        };

        match expires_at {
            Some(expires_at) if expires_at > self.clock.now() => true,
            Some(_) => {
                trace!(event = "nonce_expired", "Rejected expired nonce");
                false
            }
            None => {
                trace!(
                    event = "nonce_unknown",
                    "Rejected unknown or already-consumed nonce"
                );
                false
            }
        }
    }

    /// Get the current number of stored nonces (for monitoring)
    pub fn len(&self) -> usize {
        self.lock_state().nonces.len()
    }

    /// Check if the store currently holds no nonces
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove every entry whose expiration is at or before the current time
    ///
    /// No-op unless the configured sweep interval has elapsed since the last
    /// sweep. Runs only on the generation path; validation stays
    /// minimal-latency and enforces expiry independently, so this purge is a
    /// memory bound, not a correctness mechanism.
    fn sweep_expired(&self, state: &mut StoreState, now: DateTime<Utc>) {
        if now - state.last_sweep < Duration::seconds(self.config.sweep_interval_seconds) {
            return;
        }

        // Record time of sweep
        state.last_sweep = now;

        let before = state.nonces.len();
        state.nonces.retain(|_, expires_at| *expires_at > now);

        debug!(
            event = "nonce_sweep",
            removed = before - state.nonces.len(),
            retained = state.nonces.len(),
            "Swept expired nonces"
        );
    }

    /// Lock the store state, recovering from poisoning
    ///
    /// A panic on an unrelated thread must not permanently disable nonce
    /// validation; the map and sweep timestamp stay consistent under the
    /// lock regardless of where a holder panicked.
    fn lock_state(&self) -> MutexGuard<'_, StoreState> {
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
