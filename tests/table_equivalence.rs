//! Per-position equivalence of the two tabulating solvers.
//!
//! The pull-scan and trie-push tabulations must agree not just on the final
//! answer but on every cell: a position reachable in one table must carry
//! the same count in the other, and an unreachable position must be
//! unreachable in both.

use proptest::prelude::*;
use protseg::solvers::{bottom_up, trie_dp};
use protseg::MarkerSet;

proptest! {
    #[test]
    fn tables_match_cell_for_cell(
        seq in "[ACGT]{0,40}",
        raw_markers in proptest::collection::vec("[ACGT]{1,5}", 0..12),
    ) {
        let markers = MarkerSet::new(&raw_markers).unwrap();
        let seq = seq.as_bytes();

        let pull = bottom_up::segmentation_table(seq, &markers);
        let push = trie_dp::segmentation_table(seq, &markers);

        prop_assert_eq!(pull.len(), seq.len() + 1);
        for (i, (a, b)) in pull.iter().zip(push.iter()).enumerate() {
            prop_assert_eq!(a, b, "tables diverge at position {}", i);
        }
    }

    #[test]
    fn base_cell_is_always_reachable(
        seq in "[ACGT]{0,40}",
        raw_markers in proptest::collection::vec("[ACGT]{1,5}", 0..12),
    ) {
        let markers = MarkerSet::new(&raw_markers).unwrap();
        prop_assert_eq!(trie_dp::segmentation_table(seq.as_bytes(), &markers)[0], Some(0));
    }
}
