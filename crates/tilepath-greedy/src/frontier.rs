//! Bucketed frontier for greedy search.
//!
//! Priorities are small bounded integers (heuristic values), so the open set
//! is one FIFO bucket per priority plus a cursor to the lowest non-empty
//! bucket. Buckets are intrusive singly-linked lists threaded through a
//! per-cell `next` array, so pushing and popping never allocate.

const EMPTY: u32 = u32::MAX;

/// Coarse priority queue over cell ids.
///
/// Pops the lowest priority first; equal priorities pop in insertion order.
/// A cell id may be pushed at most once between two calls to
/// [`clear`](Frontier::clear).
pub(crate) struct Frontier {
    head: Vec<u32>,
    tail: Vec<u32>,
    next: Vec<u32>,
    lowest: usize,
    highest: usize,
    len: usize,
}

impl Frontier {
    /// Create a frontier for `cells` cell ids and priorities in
    /// `0..=max_priority`.
    pub(crate) fn new(cells: usize, max_priority: u32) -> Self {
        let buckets = max_priority as usize + 1;
        Self {
            head: vec![EMPTY; buckets],
            tail: vec![EMPTY; buckets],
            next: vec![EMPTY; cells],
            lowest: buckets,
            highest: 0,
            len: 0,
        }
    }

    /// Number of priority buckets.
    #[inline]
    pub(crate) fn buckets(&self) -> usize {
        self.head.len()
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drop every entry. Only the buckets touched since the last clear are
    /// reset.
    pub(crate) fn clear(&mut self) {
        if self.lowest <= self.highest {
            self.head[self.lowest..=self.highest].fill(EMPTY);
            self.tail[self.lowest..=self.highest].fill(EMPTY);
        }
        self.lowest = self.head.len();
        self.highest = 0;
        self.len = 0;
    }

    /// Append `id` to the bucket for `priority`. Priorities above the
    /// configured maximum share the last bucket.
    pub(crate) fn push(&mut self, id: usize, priority: u32) {
        let b = (priority as usize).min(self.head.len() - 1);
        let id32 = id as u32;
        self.next[id] = EMPTY;
        match self.tail[b] {
            EMPTY => self.head[b] = id32,
            t => self.next[t as usize] = id32,
        }
        self.tail[b] = id32;
        self.lowest = self.lowest.min(b);
        self.highest = self.highest.max(b);
        self.len += 1;
    }

    /// Remove and return the oldest entry of the lowest non-empty bucket.
    pub(crate) fn pop(&mut self) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        while self.head[self.lowest] == EMPTY {
            self.lowest += 1;
        }
        let b = self.lowest;
        let id = self.head[b];
        let next = self.next[id as usize];
        self.head[b] = next;
        if next == EMPTY {
            self.tail[b] = EMPTY;
        }
        self.len -= 1;
        Some(id as usize)
    }
}
