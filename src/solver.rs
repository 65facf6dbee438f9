//! The common solver contract.
//!
//! All four solver variants are interchangeable behind [`SegmentSolver`]:
//! same inputs, same outcome, different cost profiles. The harness and the
//! probe binary iterate [`all_solvers`] so a new variant only has to be
//! registered in one place.

use crate::markers::MarkerSet;
use crate::outcome::Segmentation;
use crate::solvers::{bottom_up, brute_force, top_down, trie_dp};

/// A maximum-count segmentation solver.
///
/// Implementations must be pure: no shared state across calls, identical
/// results for identical inputs.
pub trait SegmentSolver {
    /// Stable identifier used in reports and divergence errors.
    fn name(&self) -> &'static str;

    /// Maximum number of markers tiling `seq` exactly, or
    /// [`Segmentation::Unsegmentable`].
    fn solve(&self, seq: &[u8], markers: &MarkerSet) -> Segmentation;
}

/// Exhaustive recursive search. Exponential; oracle use only.
pub struct BruteForce;

/// Recursive search with a per-position memo table.
pub struct TopDownDp;

/// Iterative tabulation, pull scan over the marker set.
pub struct BottomUpDp;

/// Iterative tabulation, push relax via prefix-tree walks.
pub struct TrieDp;

impl SegmentSolver for BruteForce {
    fn name(&self) -> &'static str {
        "brute_force"
    }
    fn solve(&self, seq: &[u8], markers: &MarkerSet) -> Segmentation {
        brute_force::solve(seq, markers)
    }
}

impl SegmentSolver for TopDownDp {
    fn name(&self) -> &'static str {
        "top_down_dp"
    }
    fn solve(&self, seq: &[u8], markers: &MarkerSet) -> Segmentation {
        top_down::solve(seq, markers)
    }
}

impl SegmentSolver for BottomUpDp {
    fn name(&self) -> &'static str {
        "bottom_up_dp"
    }
    fn solve(&self, seq: &[u8], markers: &MarkerSet) -> Segmentation {
        bottom_up::solve(seq, markers)
    }
}

impl SegmentSolver for TrieDp {
    fn name(&self) -> &'static str {
        "trie_dp"
    }
    fn solve(&self, seq: &[u8], markers: &MarkerSet) -> Segmentation {
        trie_dp::solve(seq, markers)
    }
}

/// Every solver variant, in oracle-first order.
pub fn all_solvers() -> Vec<Box<dyn SegmentSolver>> {
    vec![
        Box::new(BruteForce),
        Box::new(TopDownDp),
        Box::new(BottomUpDp),
        Box::new(TrieDp),
    ]
}
