//! Iterative tabulation accelerated by a prefix tree.
//!
//! The pull scan of the bottom-up solver pays O(|P|·k) per position because
//! every marker is checked independently. This solver inverts the direction:
//! from each *reachable* position `i`, one trie walk enumerates every marker
//! match in a single pass (markers with a shared prefix share the traversal),
//! and each discovered length `L` relaxes `table[i + L]` forward. The per-
//! position cost drops to O(k) and the total to O(N·k).
//!
//! The push direction is load-bearing: a backward lookback cannot share the
//! walk across markers, so it would not shed the `|P|` factor.

use crate::markers::MarkerSet;
use crate::outcome::Segmentation;
use crate::solvers::relax;
use crate::trie::MarkerTrie;

/// Maximum marker count tiling `seq` exactly, or `Unsegmentable`.
pub fn solve(seq: &[u8], markers: &MarkerSet) -> Segmentation {
    let table = segmentation_table(seq, markers);
    table[seq.len()].into()
}

/// The full DP table, identical in meaning to
/// [`bottom_up::segmentation_table`](crate::solvers::bottom_up::segmentation_table).
///
/// The trie is built from the marker set at the top of the call and dropped
/// with it; nothing is cached across invocations.
pub fn segmentation_table(seq: &[u8], markers: &MarkerSet) -> Vec<Option<usize>> {
    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("trie_dp", n = seq.len(), markers = markers.len());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let trie = MarkerTrie::from_markers(markers);
    let n = seq.len();
    let mut table = vec![None; n + 1];
    table[0] = Some(0);
    for i in 0..n {
        let Some(here) = table[i] else {
            continue;
        };
        for len in trie.matches_starting_at(seq, i) {
            relax(&mut table[i + len], here + 1);
        }
    }
    table
}
