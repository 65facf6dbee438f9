//! The four solver variants.
//!
//! All share one contract (`solve(seq, markers) -> Segmentation`) and one DP
//! interpretation: `table[i]` is the maximum number of markers that exactly
//! tile `seq[0..i]`, `None` if that prefix cannot be tiled, with
//! `table[0] = Some(0)` always reachable.
//!
//! - [`brute_force`]: exhaustive recursion, the reference oracle.
//! - [`top_down`]: the same recursion amortized by a memo table.
//! - [`bottom_up`]: tabulation that *pulls*: at each `i`, look back one
//!   marker length and compare substrings.
//! - [`trie_dp`]: tabulation that *pushes*: at each reachable `i`, a single
//!   trie walk discovers every match and relaxes forward.

pub mod bottom_up;
pub mod brute_force;
pub mod top_down;
pub mod trie_dp;

/// Relax a DP cell upward: keep the larger count, reach if unreached.
#[inline]
pub(crate) fn relax(cell: &mut Option<usize>, candidate: usize) {
    if cell.map_or(true, |best| candidate > best) {
        *cell = Some(candidate);
    }
}
