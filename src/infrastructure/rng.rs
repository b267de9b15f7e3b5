use crate::config::MockDataEnvConfig;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::atomic::{AtomicU64, Ordering};

/// Hands out one generator per request.
///
/// Without a seed each generator is drawn from the thread-local entropy
/// source. With a seed, request `n` gets `StdRng::seed_from_u64(seed + n)`,
/// so a restarted server replays the same sequence of payloads.
#[derive(Debug, Default)]
pub struct RngSource {
    seed: Option<u64>,
    issued: AtomicU64,
}

impl RngSource {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            seed,
            issued: AtomicU64::new(0),
        }
    }

    pub fn from_config(config: &MockDataEnvConfig) -> Self {
        Self::new(config.seed)
    }

    pub fn is_seeded(&self) -> bool {
        self.seed.is_some()
    }

    pub fn next_rng(&self) -> StdRng {
        let n = self.issued.fetch_add(1, Ordering::Relaxed);
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(n)),
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }
}
