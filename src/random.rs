//! Random number helpers.
//!
//! All stochastic operations take an explicit `&mut R where R: Rng` so runs
//! are reproducible from a seed and independent runs never share state.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Creates a seeded RNG.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Picks `amount` items from `pool` uniformly at random without replacement.
///
/// Returns the whole pool (in its original order) when `amount >= pool.len()`.
pub fn sample<T: Clone, R: Rng + ?Sized>(pool: &[T], amount: usize, rng: &mut R) -> Vec<T> {
    if amount >= pool.len() {
        return pool.to_vec();
    }
    rand::seq::index::sample(rng, pool.len(), amount)
        .into_iter()
        .map(|i| pool[i].clone())
        .collect()
}
