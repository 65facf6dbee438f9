//! Iterative tabulation with a pull scan.
//!
//! Builds the table left to right; each cell `table[i]` looks *backward*:
//! for every marker of length `len <= i`, if `seq[i - len..i]` equals the
//! marker and `table[i - len]` is reachable, relax `table[i]`. Same
//! O(N·|P|·k) class as the memoized solver, but with no recursion and thus
//! no depth limit — viable at any sequence length.

use crate::markers::MarkerSet;
use crate::outcome::Segmentation;
use crate::solvers::relax;

/// Maximum marker count tiling `seq` exactly, or `Unsegmentable`.
pub fn solve(seq: &[u8], markers: &MarkerSet) -> Segmentation {
    let table = segmentation_table(seq, markers);
    table[seq.len()].into()
}

/// The full DP table: `table[i]` is the best count tiling `seq[0..i]`,
/// `None` where that prefix cannot be tiled. `table[0] = Some(0)`.
pub fn segmentation_table(seq: &[u8], markers: &MarkerSet) -> Vec<Option<usize>> {
    let n = seq.len();
    let mut table = vec![None; n + 1];
    table[0] = Some(0);
    for i in 1..=n {
        for marker in markers.iter() {
            let len = marker.len();
            if len > i {
                continue;
            }
            if let Some(prev) = table[i - len] {
                if &seq[i - len..i] == marker {
                    relax(&mut table[i], prev + 1);
                }
            }
        }
    }
    table
}
