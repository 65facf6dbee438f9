//! Protein-marker segmentation solvers.
//!
//! Given a sequence `S` over a fixed alphabet and a dictionary `P` of marker
//! strings, compute the maximum number of markers that tile `S` exactly —
//! contiguous, non-overlapping, no gaps from position 0 to `|S|` — or report
//! that no such tiling exists.
//!
//! ## Solver family
//! Four functionally-equivalent solvers share one contract
//! (`solve(sequence, markers) -> Segmentation`):
//! - [`solvers::brute_force`]: exhaustive recursion, the reference oracle.
//! - [`solvers::top_down`]: recursion with a per-position memo table.
//! - [`solvers::bottom_up`]: iterative tabulation, pull scan over markers.
//! - [`solvers::trie_dp`]: iterative tabulation, push relax driven by a
//!   single prefix-tree walk per position — O(N·k) instead of O(N·|P|·k).
//!
//! The trie walk is the headline optimization: all markers sharing a prefix
//! are enumerated in one traversal, so the per-position cost no longer scales
//! with the dictionary size.
//!
//! ## Quick start
//! ```
//! use protseg::{solvers::trie_dp, MarkerSet, Segmentation};
//!
//! let markers = MarkerSet::new(["AC", "GT"]).unwrap();
//! assert_eq!(trie_dp::solve(b"ACGT", &markers), Segmentation::Count(2));
//! assert_eq!(trie_dp::solve(b"ACGA", &markers), Segmentation::Unsegmentable);
//! ```
//!
//! The [`harness`] module cross-checks all solvers over a fixed case suite,
//! and the `seg_probe` binary adds a wall-clock benchmark matrix on top.

pub mod gen;
pub mod harness;
pub mod markers;
pub mod outcome;
pub mod solver;
pub mod solvers;
pub mod trie;

pub use crate::markers::{MarkerSet, MarkerSetError};
pub use crate::outcome::Segmentation;
pub use crate::solver::{all_solvers, SegmentSolver};
pub use crate::trie::MarkerTrie;
