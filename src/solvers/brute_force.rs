//! Exhaustive recursive search.
//!
//! At each position, every marker that matches opens a branch; a branch
//! succeeds when it lands exactly on the end of the sequence. No memoization,
//! so identical subproblems are recomputed and the worst case is exponential
//! in `N` with branching factor up to `|P|`. This solver exists as the
//! reference oracle for the others — keep inputs small.

use crate::markers::MarkerSet;
use crate::outcome::Segmentation;

/// Maximum marker count tiling `seq` exactly, or `Unsegmentable`.
pub fn solve(seq: &[u8], markers: &MarkerSet) -> Segmentation {
    best_from(seq, markers, 0).into()
}

/// Best count tiling `seq[pos..]`, `None` if that suffix cannot be tiled.
fn best_from(seq: &[u8], markers: &MarkerSet, pos: usize) -> Option<usize> {
    if pos == seq.len() {
        return Some(0);
    }
    let mut best = None;
    for marker in markers.iter() {
        if seq[pos..].starts_with(marker) {
            if let Some(rest) = best_from(seq, markers, pos + marker.len()) {
                let candidate = rest + 1;
                if best.map_or(true, |b| candidate > b) {
                    best = Some(candidate);
                }
            }
        }
    }
    best
}
