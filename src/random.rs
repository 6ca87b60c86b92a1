//! Random number helpers shared by the stochastic engines.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Creates the engine RNG: seeded when `seed` is given, entropy-seeded
/// otherwise.
pub fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random()),
    }
}

/// Uniformly random permutation of `0..n`.
pub fn random_tour<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut tour: Vec<usize> = (0..n).collect();
    tour.shuffle(rng);
    tour
}

/// Two distinct positions drawn uniformly from `range`.
///
/// The range must hold at least two positions.
pub fn distinct_pair<R: Rng>(range: std::ops::Range<usize>, rng: &mut R) -> (usize, usize) {
    debug_assert!(range.len() >= 2);
    let first = rng.random_range(range.clone());
    loop {
        let second = rng.random_range(range.clone());
        if second != first {
            return (first, second);
        }
    }
}
