//! Seeded permutation source used by the shuffle transform.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

/// A seeded pseudo-random source of permutations.
///
/// The generator sits behind a lock so a single source can be shared by
/// reference between pipelines. Two sources built from the same seed yield
/// the same sequence of permutations.
///
/// # Example
///
/// ```
/// use deckrs::ShuffleSource;
///
/// let a = ShuffleSource::new(7);
/// let b = ShuffleSource::new(7);
/// assert_eq!(a.permutation(52), b.permutation(52));
/// ```
#[derive(Debug)]
pub struct ShuffleSource {
    rng: Mutex<ChaCha8Rng>,
}

impl ShuffleSource {
    /// Creates a source seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Creates a source seeded from the wall clock, in whole seconds.
    #[cfg(feature = "std")]
    #[must_use]
    pub fn from_time() -> Self {
        Self::new(time_seed())
    }

    /// Restarts the source from `seed`.
    pub fn reseed(&self, seed: u64) {
        log::debug!("reseeding shuffle source with {seed}");
        self.rng
            .with(|rng| *rng = ChaCha8Rng::seed_from_u64(seed));
    }

    /// Returns a uniformly random permutation of `0..n`.
    #[must_use]
    pub fn permutation(&self, n: usize) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..n).collect();
        self.rng.with(|rng| indices.shuffle(rng));
        indices
    }
}

#[cfg(feature = "std")]
fn time_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

/// Returns the process-wide source, seeded from the wall clock on first use.
///
/// Reseed it with [`ShuffleSource::reseed`] for reproducible runs. Tests that
/// run in parallel should build their own source instead.
#[cfg(feature = "std")]
#[must_use]
pub fn shared() -> &'static ShuffleSource {
    static SHARED: std::sync::OnceLock<ShuffleSource> = std::sync::OnceLock::new();
    SHARED.get_or_init(ShuffleSource::from_time)
}
