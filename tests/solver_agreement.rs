//! Fuzzed agreement of all four solvers, with brute force as the oracle.

use proptest::prelude::*;
use protseg::solvers::{bottom_up, brute_force, top_down, trie_dp};
use protseg::{MarkerSet, Segmentation};

fn marker_strategy() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[ACGT]{1,4}", 0..8)
}

proptest! {
    #[test]
    fn all_solvers_agree_with_the_oracle(
        seq in "[ACGT]{0,16}",
        raw_markers in marker_strategy(),
    ) {
        let markers = MarkerSet::new(&raw_markers).unwrap();
        let seq = seq.as_bytes();

        let oracle = brute_force::solve(seq, &markers);
        prop_assert_eq!(top_down::solve(seq, &markers), oracle);
        prop_assert_eq!(bottom_up::solve(seq, &markers), oracle);
        prop_assert_eq!(trie_dp::solve(seq, &markers), oracle);
    }

    #[test]
    fn empty_sequence_always_counts_zero(raw_markers in marker_strategy()) {
        let markers = MarkerSet::new(&raw_markers).unwrap();
        prop_assert_eq!(trie_dp::solve(b"", &markers), Segmentation::Count(0));
        prop_assert_eq!(brute_force::solve(b"", &markers), Segmentation::Count(0));
    }

    #[test]
    fn unreachable_leading_symbol_is_unsegmentable(
        seq in "[ACGT]{1,16}",
        raw_markers in proptest::collection::vec("[CGT]{1,4}", 0..8),
    ) {
        // Sequence starts with 'A' but no marker does, so position 0 never
        // advances.
        let mut seq = seq.into_bytes();
        seq[0] = b'A';
        let markers = MarkerSet::new(&raw_markers).unwrap();
        prop_assert_eq!(trie_dp::solve(&seq, &markers), Segmentation::Unsegmentable);
        prop_assert_eq!(bottom_up::solve(&seq, &markers), Segmentation::Unsegmentable);
    }

    #[test]
    fn a_reported_count_is_achievable_with_marker_lengths(
        seq in "[ACGT]{0,16}",
        raw_markers in marker_strategy(),
    ) {
        // Any Count(c) with c > 0 needs at least c symbols and at most
        // c * max_len symbols to tile.
        let markers = MarkerSet::new(&raw_markers).unwrap();
        let seq = seq.as_bytes();
        if let Segmentation::Count(c) = trie_dp::solve(seq, &markers) {
            prop_assert!(c <= seq.len());
            if !seq.is_empty() {
                prop_assert!(c >= 1);
                prop_assert!(c * markers.max_len() >= seq.len());
            }
        }
    }
}
