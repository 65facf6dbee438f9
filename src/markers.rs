//! Validated marker dictionaries.
//!
//! A [`MarkerSet`] is the `P` of the problem statement: a set of distinct,
//! non-empty marker strings. Construction is the single validation point for
//! the whole crate — an empty marker would let a segmentation consume zero
//! symbols per step and never terminate, so it is rejected up front rather
//! than left as undefined solver behavior.

use std::collections::HashSet;

use thiserror::Error;

/// Error raised while building a [`MarkerSet`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MarkerSetError {
    /// Empty markers are rejected: they would tile zero symbols forever.
    #[error("marker set must not contain the empty string")]
    EmptyMarker,
}

/// A dictionary of distinct, non-empty markers over a byte alphabet.
///
/// Duplicate inputs collapse silently; insertion order is irrelevant.
/// `max_len` (the `k` of the complexity bounds) is tracked at construction
/// so solvers never rescan the dictionary for it.
#[derive(Debug, Clone, Default)]
pub struct MarkerSet {
    words: HashSet<Vec<u8>>,
    max_len: usize,
}

impl MarkerSet {
    /// Build a marker set from anything byte-string-like.
    ///
    /// Returns [`MarkerSetError::EmptyMarker`] if any marker is empty.
    pub fn new<I, T>(markers: I) -> Result<Self, MarkerSetError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        let mut words = HashSet::new();
        let mut max_len = 0;
        for marker in markers {
            let marker = marker.as_ref();
            if marker.is_empty() {
                return Err(MarkerSetError::EmptyMarker);
            }
            max_len = max_len.max(marker.len());
            words.insert(marker.to_vec());
        }
        Ok(Self { words, max_len })
    }

    /// Exact membership test.
    pub fn contains(&self, word: &[u8]) -> bool {
        self.words.contains(word)
    }

    /// Length of the longest marker (`k`); 0 for an empty set.
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Number of distinct markers (`|P|`).
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True if the dictionary holds no markers.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the markers in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> {
        self.words.iter().map(Vec::as_slice)
    }
}
