//! Injectable randomness.
//!
//! Resolvers never call an ambient generator directly. They receive a
//! [`RandomSource`] at construction, which lets tests swap in a
//! [`SeededRandom`] and get repeatable dice rolls and quote picks.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use std::sync::{Arc, Mutex};

pub trait RandomSource: Send + Sync {
    /// Uniform float in `[0, 1)`.
    fn next_f64(&self) -> f64;

    /// Uniform integer in `[lo, hi]`. Callers guarantee `lo <= hi`.
    fn range_inclusive(&self, lo: i64, hi: i64) -> i64;

    fn fill_bytes(&self, buf: &mut [u8]);
}

/// Thread-local OS-seeded generator used by the server.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_f64(&self) -> f64 {
        rand::rng().random::<f64>()
    }

    fn range_inclusive(&self, lo: i64, hi: i64) -> i64 {
        rand::rng().random_range(lo..=hi)
    }

    fn fill_bytes(&self, buf: &mut [u8]) {
        rand::rng().fill_bytes(buf);
    }
}

/// Deterministic generator for tests and `--seed`.
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        // A poisoned lock still holds a usable generator.
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut rng)
    }
}

impl RandomSource for SeededRandom {
    fn next_f64(&self) -> f64 {
        self.with_rng(|rng| rng.random::<f64>())
    }

    fn range_inclusive(&self, lo: i64, hi: i64) -> i64 {
        self.with_rng(|rng| rng.random_range(lo..=hi))
    }

    fn fill_bytes(&self, buf: &mut [u8]) {
        self.with_rng(|rng| rng.fill_bytes(buf));
    }
}

/// Pick a generator: seeded when a seed is configured, thread-local otherwise.
pub fn from_seed(seed: Option<u64>) -> Arc<dyn RandomSource> {
    match seed {
        Some(seed) => Arc::new(SeededRandom::new(seed)),
        None => Arc::new(ThreadRandom),
    }
}
