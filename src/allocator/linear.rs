//! Backward-scan allocator.
//!
//! Keeps a plain occupancy bitmap and walks down from `d` on every query.
//! O(capacity) per query, so a full run costs O(n * max_deadline). Useful as
//! a reference for the disjoint-set allocator and for benchmarking it.

use super::{clamp_query, FreeSlotIndex, SlotError};

/// Occupancy-vector slot allocator.
#[derive(Debug, Clone)]
pub struct LinearSlotAllocator {
    // Index 0 unused.
    occupied: Vec<bool>,
}

impl LinearSlotAllocator {
    /// Creates an allocator with all slots `1..=capacity` free.
    pub fn new(capacity: usize) -> Self {
        Self {
            occupied: vec![false; capacity + 1],
        }
    }
}

impl FreeSlotIndex for LinearSlotAllocator {
    fn capacity(&self) -> u64 {
        (self.occupied.len() - 1) as u64
    }

    fn find_latest_free(&mut self, d: i64) -> Option<u64> {
        let start = clamp_query(d, self.capacity());
        (1..=start).rev().find(|&s| !self.occupied[s]).map(|s| s as u64)
    }

    fn occupy(&mut self, slot: u64) -> Result<(), SlotError> {
        let capacity = self.capacity();
        if slot < 1 || slot > capacity {
            return Err(SlotError::OutOfRange { slot, capacity });
        }
        let cell = &mut self.occupied[slot as usize];
        if *cell {
            return Err(SlotError::AlreadyOccupied(slot));
        }
        *cell = true;
        Ok(())
    }

    fn is_free(&self, slot: u64) -> bool {
        slot >= 1 && slot <= self.capacity() && !self.occupied[slot as usize]
    }
}
