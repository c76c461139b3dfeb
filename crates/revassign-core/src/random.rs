//! Random source used by the reviewer policies.

use std::sync::{Mutex, PoisonError};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Uniform index generator.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
pub trait RandomService: Send + Sync {
    /// Uniform value in `0..upper`. `upper` is at least 1.
    fn gen_index(&self, upper: usize) -> usize;
}

/// Process-wide generator, seeded once from the configuration.
pub struct SeededRandomService {
    rng: Mutex<ChaCha8Rng>,
}

impl SeededRandomService {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }
}

impl RandomService for SeededRandomService {
    fn gen_index(&self, upper: usize) -> usize {
        self.rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .gen_range(0..upper)
    }
}
