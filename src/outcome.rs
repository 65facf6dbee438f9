//! The shared result type of every solver.

use std::fmt;

/// Outcome of segmenting one sequence against one marker set.
///
/// `Unsegmentable` is a domain outcome, not an error: it means no tiling of
/// the sequence by dictionary markers exists. It is deliberately distinct
/// from `Count(0)`, which is the (successful) segmentation of the empty
/// sequence into zero markers.
///
/// Ordering places `Unsegmentable` below every `Count`, so "adding markers
/// never makes the result worse" can be stated as `before <= after`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Segmentation {
    /// No full tiling of the sequence exists.
    Unsegmentable,
    /// Maximum number of markers in a full tiling.
    Count(usize),
}

impl Segmentation {
    /// The marker count, if the sequence was segmentable.
    pub fn count(self) -> Option<usize> {
        match self {
            Segmentation::Count(n) => Some(n),
            Segmentation::Unsegmentable => None,
        }
    }

    /// True unless the outcome is [`Segmentation::Unsegmentable`].
    pub fn is_segmentable(self) -> bool {
        matches!(self, Segmentation::Count(_))
    }
}

impl From<Option<usize>> for Segmentation {
    /// Lift a DP-table cell (`table[N]`) into the public outcome.
    fn from(cell: Option<usize>) -> Self {
        match cell {
            Some(n) => Segmentation::Count(n),
            None => Segmentation::Unsegmentable,
        }
    }
}

impl fmt::Display for Segmentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segmentation::Count(n) => write!(f, "{n}"),
            Segmentation::Unsegmentable => write!(f, "unsegmentable"),
        }
    }
}
