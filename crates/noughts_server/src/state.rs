//! Shared server state.

use crate::config::ServerConfig;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{info, instrument};

/// State handed to every handler.
///
/// Holds the process-wide random source, seeded once. Handlers never
/// search with it directly: [`AppState::request_rng`] draws a seed under
/// the lock and returns an independent generator, so the lock is held
/// for one `u64` and never across a move computation.
#[derive(Debug, Clone)]
pub struct AppState {
    config: Arc<ServerConfig>,
    rng: Arc<Mutex<ChaCha8Rng>>,
}

impl AppState {
    /// Creates state from configuration, seeding the random source.
    #[instrument(skip(config))]
    pub fn new(config: ServerConfig) -> Self {
        let seed = config.rng_seed().unwrap_or_else(rand::random);
        info!(seed, "Seeding random source");
        Self {
            config: Arc::new(config),
            rng: Arc::new(Mutex::new(ChaCha8Rng::seed_from_u64(seed))),
        }
    }

    /// The configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// A generator for one request, derived from the shared source.
    pub fn request_rng(&self) -> ChaCha8Rng {
        let seed = self
            .rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .next_u64();
        ChaCha8Rng::seed_from_u64(seed)
    }
}
