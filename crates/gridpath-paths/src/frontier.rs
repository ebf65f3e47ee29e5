//! The open set: candidates ordered by `f`.

use std::collections::BinaryHeap;

use gridpath_core::Point;

/// One frontier entry. `f` is the priority at insertion time; a cell whose
/// cost changes later is simply pushed again.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FrontierEntry {
    pub pos: Point,
    pub f: i32,
    seq: u64,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse on `f` so BinaryHeap (max-heap) pops smallest f first.
        // Equal f: the later insertion wins.
        other
            .f
            .cmp(&self.f)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-`f` priority queue with a deterministic LIFO tie-break.
///
/// The same cell may be present several times. Deduplication is the
/// caller's job (see the visited check in the engine).
#[derive(Clone, Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    next_seq: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push `pos` with priority `f`. O(log n).
    pub fn insert(&mut self, pos: Point, f: i32) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(FrontierEntry { pos, f, seq });
    }

    /// Remove and return the entry with minimum `f`. O(log n).
    pub fn pop_min_f(&mut self) -> Option<FrontierEntry> {
        self.heap.pop()
    }

    pub fn peek(&self) -> Option<&FrontierEntry> {
        self.heap.peek()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of live entries, duplicates included.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// All entries in the order they would be popped.
    pub fn snapshot(&self) -> Vec<FrontierEntry> {
        let mut entries = self.heap.clone().into_sorted_vec();
        entries.reverse();
        entries
    }
}
