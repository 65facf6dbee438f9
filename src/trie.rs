//! Prefix tree over marker strings.
//!
//! The trie exists for one query: "which markers start at position `i` of the
//! sequence?". A single root-to-leaf walk answers it for *all* markers at
//! once, which is what lets the trie-accelerated solver drop the `|P|` factor
//! from its per-position cost.
//!
//! Nodes live in a flat arena (`Vec<Node>`) linked by indices; each node maps
//! symbols to children through a small sorted vec, which beats a hash map at
//! the four-letter alphabet this crate is used with while still handling
//! arbitrary bytes.

use crate::markers::MarkerSet;

/// Index of the root node in the arena.
const ROOT: u32 = 0;

#[derive(Debug, Default)]
struct Node {
    /// Symbol-to-child links, sorted by symbol.
    children: Vec<(u8, u32)>,
    /// True if the path from the root to this node spells a whole marker.
    terminal: bool,
}

/// A trie over a marker dictionary.
///
/// Built once before a DP pass and read-only afterwards; the building solver
/// invocation owns it exclusively and drops it on return.
#[derive(Debug)]
pub struct MarkerTrie {
    nodes: Vec<Node>,
}

impl MarkerTrie {
    /// An empty trie: just the root, matching nothing.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
        }
    }

    /// Build a trie holding every marker in the set.
    pub fn from_markers(markers: &MarkerSet) -> Self {
        let mut trie = Self::new();
        for marker in markers.iter() {
            trie.insert(marker);
        }
        trie
    }

    /// Insert one marker, creating nodes as needed.
    ///
    /// Idempotent: re-inserting an existing marker changes nothing.
    pub fn insert(&mut self, marker: &[u8]) {
        let mut node = ROOT;
        for &sym in marker {
            node = match self.child(node, sym) {
                Some(next) => next,
                None => {
                    let next = self.nodes.len() as u32;
                    self.nodes.push(Node::default());
                    let links = &mut self.nodes[node as usize].children;
                    let slot = links.partition_point(|&(s, _)| s < sym);
                    links.insert(slot, (sym, next));
                    next
                }
            };
        }
        self.nodes[node as usize].terminal = true;
    }

    /// Lazily enumerate the lengths `L` such that `seq[pos..pos + L]` is a
    /// marker, in increasing order.
    ///
    /// Each call starts a fresh walk from the root; the walk consumes one
    /// symbol per edge and stops at the first symbol with no child, or at the
    /// end of the sequence. The trie is not mutated.
    pub fn matches_starting_at<'a>(&'a self, seq: &'a [u8], pos: usize) -> Matches<'a> {
        Matches {
            trie: self,
            seq,
            start: pos,
            cursor: pos,
            node: ROOT,
        }
    }

    /// Number of nodes in the arena, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn child(&self, node: u32, sym: u8) -> Option<u32> {
        let links = &self.nodes[node as usize].children;
        links
            .binary_search_by_key(&sym, |&(s, _)| s)
            .ok()
            .map(|idx| links[idx].1)
    }
}

impl Default for MarkerTrie {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over marker lengths matching at one starting position.
///
/// Yielded lengths are strictly increasing; the iterator is finite because
/// the walk ends at the trie's depth or the sequence's end, whichever comes
/// first.
pub struct Matches<'a> {
    trie: &'a MarkerTrie,
    seq: &'a [u8],
    start: usize,
    cursor: usize,
    node: u32,
}

impl Iterator for Matches<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while self.cursor < self.seq.len() {
            self.node = self.trie.child(self.node, self.seq[self.cursor])?;
            self.cursor += 1;
            if self.trie.nodes[self.node as usize].terminal {
                return Some(self.cursor - self.start);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::MarkerTrie;
    use crate::markers::MarkerSet;

    fn trie(markers: &[&str]) -> MarkerTrie {
        MarkerTrie::from_markers(&MarkerSet::new(markers).unwrap())
    }

    #[test]
    fn empty_trie_matches_nothing() {
        let t = MarkerTrie::new();
        assert_eq!(t.matches_starting_at(b"ACGT", 0).count(), 0);
    }

    #[test]
    fn yields_all_prefix_markers_in_order() {
        let t = trie(&["A", "AT", "ATGC", "TG"]);
        let lens: Vec<usize> = t.matches_starting_at(b"ATGC", 0).collect();
        assert_eq!(lens, vec![1, 2, 4]);
    }

    #[test]
    fn walk_stops_at_first_dead_symbol() {
        let t = trie(&["AC", "ACGT"]);
        // No marker continues with 'T' after "AC", so the walk ends there.
        let lens: Vec<usize> = t.matches_starting_at(b"ACTT", 0).collect();
        assert_eq!(lens, vec![2]);
    }

    #[test]
    fn respects_starting_position_and_sequence_end() {
        let t = trie(&["GT", "GTAC"]);
        let lens: Vec<usize> = t.matches_starting_at(b"ACGT", 2).collect();
        assert_eq!(lens, vec![2]); // "GTAC" would run past the end
        assert_eq!(t.matches_starting_at(b"ACGT", 4).count(), 0);
    }

    #[test]
    fn insert_is_idempotent() {
        let mut t = MarkerTrie::new();
        t.insert(b"ACG");
        let nodes = t.node_count();
        t.insert(b"ACG");
        assert_eq!(t.node_count(), nodes);
        assert_eq!(t.matches_starting_at(b"ACG", 0).collect::<Vec<_>>(), [3]);
    }

    #[test]
    fn shared_prefixes_share_nodes() {
        let mut t = MarkerTrie::new();
        t.insert(b"ACG");
        t.insert(b"ACT");
        // root + A + C + G + T
        assert_eq!(t.node_count(), 5);
    }

    #[test]
    fn restartable_walks() {
        let t = trie(&["A", "AA"]);
        let first: Vec<usize> = t.matches_starting_at(b"AAA", 0).collect();
        let second: Vec<usize> = t.matches_starting_at(b"AAA", 0).collect();
        assert_eq!(first, second);
        assert_eq!(first, vec![1, 2]);
    }
}
