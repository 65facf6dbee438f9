//! Recursive search with per-position memoization.
//!
//! Identical branching to the brute-force solver, but each position's best
//! count is computed once and cached, bringing the cost to O(N·|P|·k):
//! each of the N positions scans the dictionary once, at O(k) per substring
//! comparison.
//!
//! Recursion depth can still reach N — one frame per position on a long run
//! of single-symbol markers — so the probe binary skips this variant above a
//! calibrated sequence length rather than growing the stack.

use crate::markers::MarkerSet;
use crate::outcome::Segmentation;

/// Memo cell: distinguishes "never visited" from "visited, suffix untileable".
#[derive(Clone, Copy)]
enum Memo {
    Unknown,
    Known(Option<usize>),
}

/// Maximum marker count tiling `seq` exactly, or `Unsegmentable`.
pub fn solve(seq: &[u8], markers: &MarkerSet) -> Segmentation {
    let mut memo = vec![Memo::Unknown; seq.len() + 1];
    best_from(seq, markers, &mut memo, 0).into()
}

fn best_from(seq: &[u8], markers: &MarkerSet, memo: &mut [Memo], pos: usize) -> Option<usize> {
    if pos == seq.len() {
        return Some(0);
    }
    if let Memo::Known(cached) = memo[pos] {
        return cached;
    }
    let mut best = None;
    for marker in markers.iter() {
        if seq[pos..].starts_with(marker) {
            if let Some(rest) = best_from(seq, markers, memo, pos + marker.len()) {
                let candidate = rest + 1;
                if best.map_or(true, |b| candidate > b) {
                    best = Some(candidate);
                }
            }
        }
    }
    memo[pos] = Memo::Known(best);
    best
}
