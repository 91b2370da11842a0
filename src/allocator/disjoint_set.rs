//! Disjoint-set "nearest free predecessor" allocator.
//!
//! # Algorithm
//!
//! Nodes `0..=capacity`, node 0 being a permanently occupied sentinel.
//! Each free slot is its own root. Occupying `s` links it to `s - 1`, so the
//! root reached from any `d` is the latest free slot `<= d` (or the
//! sentinel, meaning none). Roots always sit at the low end of their set,
//! which rules out union by rank; path compression alone gives amortized
//! O(log n) per operation.

use super::{clamp_query, FreeSlotIndex, SlotError};

/// Union-find slot allocator.
///
/// # Example
/// ```
/// use u_deadline::allocator::{FreeSlotIndex, SlotAllocator};
///
/// let mut slots = SlotAllocator::new(4);
/// assert_eq!(slots.find_latest_free(3), Some(3));
/// slots.occupy(3).unwrap();
/// assert_eq!(slots.find_latest_free(3), Some(2));
/// assert_eq!(slots.find_latest_free(0), None);
/// ```
#[derive(Debug, Clone)]
pub struct SlotAllocator {
    parent: Vec<usize>,
    occupied: usize,
}

impl SlotAllocator {
    /// Creates an allocator with all slots `1..=capacity` free.
    pub fn new(capacity: usize) -> Self {
        Self {
            parent: (0..=capacity).collect(),
            occupied: 0,
        }
    }

    /// Number of slots still free.
    pub fn free_count(&self) -> usize {
        self.parent.len() - 1 - self.occupied
    }

    /// Root of `node`, compressing the path behind it.
    fn root(&mut self, node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut cur = node;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        root
    }
}

impl FreeSlotIndex for SlotAllocator {
    fn capacity(&self) -> u64 {
        (self.parent.len() - 1) as u64
    }

    fn find_latest_free(&mut self, d: i64) -> Option<u64> {
        let start = clamp_query(d, self.capacity());
        match self.root(start) {
            0 => None,
            slot => Some(slot as u64),
        }
    }

    fn occupy(&mut self, slot: u64) -> Result<(), SlotError> {
        let capacity = self.capacity();
        if slot < 1 || slot > capacity {
            return Err(SlotError::OutOfRange { slot, capacity });
        }
        let s = slot as usize;
        if self.parent[s] != s {
            return Err(SlotError::AlreadyOccupied(slot));
        }
        let below = self.root(s - 1);
        self.parent[s] = below;
        self.occupied += 1;
        Ok(())
    }

    fn is_free(&self, slot: u64) -> bool {
        slot >= 1 && slot <= self.capacity() && self.parent[slot as usize] == slot as usize
    }
}
