//! Random test-data generation for benches, fuzzing, and the probe binary.
//!
//! Generated data carries no correctness guarantees beyond alphabet
//! membership; callers seed their own RNG (`StdRng::seed_from_u64`) when
//! reproducibility matters.

use rand::Rng;

use crate::markers::MarkerSet;

/// The sequence alphabet.
pub const ALPHABET: &[u8] = b"ACGT";

/// A random sequence of `len` symbols over [`ALPHABET`].
pub fn random_sequence<R: Rng>(rng: &mut R, len: usize) -> Vec<u8> {
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())])
        .collect()
}

/// A marker set of `count` distinct random markers with lengths in
/// `1..=max_len`.
///
/// Draws until `count` distinct markers exist, so `count` must not exceed
/// the number of distinct strings of length ≤ `max_len` (4^1 + … + 4^k).
///
/// # Panics
/// Panics if `max_len == 0` and `count > 0`.
pub fn random_marker_set<R: Rng>(rng: &mut R, count: usize, max_len: usize) -> MarkerSet {
    assert!(
        max_len > 0 || count == 0,
        "cannot draw non-empty markers with max_len = 0"
    );
    let mut words = std::collections::HashSet::new();
    while words.len() < count {
        let len = rng.gen_range(1..=max_len);
        words.insert(random_sequence(rng, len));
    }
    MarkerSet::new(words).expect("generated markers have length >= 1")
}
