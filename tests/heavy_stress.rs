//! Large-input stress runs, gated behind the `heavy` feature.
//!
//! Run with: `cargo test --features heavy --release -- --ignored --nocapture`

#![cfg(feature = "heavy")]

use rand::rngs::StdRng;
use rand::SeedableRng;

use protseg::gen::{random_marker_set, random_sequence};
use protseg::solvers::{bottom_up, trie_dp};

#[test]
fn tabulating_solvers_agree_at_scale() {
    let mut rng = StdRng::seed_from_u64(1234);
    for &(n, marker_count, max_len) in &[(20_000usize, 500usize, 25usize), (50_000, 1000, 50)] {
        let seq = random_sequence(&mut rng, n);
        let markers = random_marker_set(&mut rng, marker_count, max_len);
        assert_eq!(
            bottom_up::solve(&seq, &markers),
            trie_dp::solve(&seq, &markers),
            "divergence at n={n}"
        );
    }
}

#[test]
fn single_symbol_dictionary_tiles_everything() {
    let mut rng = StdRng::seed_from_u64(99);
    let seq = random_sequence(&mut rng, 100_000);
    let markers = protseg::MarkerSet::new(["A", "C", "G", "T"]).unwrap();
    assert_eq!(
        trie_dp::solve(&seq, &markers),
        protseg::Segmentation::Count(100_000)
    );
}
