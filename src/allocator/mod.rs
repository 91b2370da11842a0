//! Free-slot indices over the discrete slots `1..=capacity`.
//!
//! Answers two questions repeatedly during a scheduling run:
//! "what is the latest free slot at or before `d`?" and "mark slot `s`
//! occupied". Slots are never freed again within a run.
//!
//! # Implementations
//!
//! | Type | find | occupy | Notes |
//! |------|------|--------|-------|
//! | [`SlotAllocator`] | amortized O(log n) | amortized O(log n) | disjoint-set with path compression |
//! | [`LinearSlotAllocator`] | O(capacity) | O(1) | backward scan, O(n * capacity) per run |
//!
//! # Reference
//! Gabow & Tarjan (1985), "A linear-time algorithm for a special case of
//! disjoint set union"

mod disjoint_set;
mod linear;

pub use disjoint_set::SlotAllocator;
pub use linear::LinearSlotAllocator;

use thiserror::Error;

/// Contract violations on a slot index.
///
/// These indicate a bug in the caller, never bad input: the scheduler only
/// occupies slots it has just been told are free.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlotError {
    /// The slot was already occupied earlier in the run.
    #[error("slot {0} is already occupied")]
    AlreadyOccupied(u64),
    /// The slot lies outside `1..=capacity`.
    #[error("slot {slot} is outside 1..={capacity}")]
    OutOfRange { slot: u64, capacity: u64 },
}

/// Index of free slots supporting latest-fit queries.
pub trait FreeSlotIndex {
    /// Number of addressable slots (`1..=capacity`).
    fn capacity(&self) -> u64;

    /// Returns the greatest free slot `s <= d`, or `None` if all slots
    /// `1..=d` are occupied. Queries beyond `capacity` are clamped to it;
    /// `d < 1` always yields `None`.
    ///
    /// Takes `&mut self` so implementations may compress internal paths;
    /// the set of free slots is not changed.
    fn find_latest_free(&mut self, d: i64) -> Option<u64>;

    /// Marks a free slot occupied.
    ///
    /// # Errors
    /// [`SlotError::AlreadyOccupied`] or [`SlotError::OutOfRange`].
    fn occupy(&mut self, slot: u64) -> Result<(), SlotError>;

    /// Whether `slot` is currently free. Out-of-range slots are never free.
    fn is_free(&self, slot: u64) -> bool;
}

/// Clamps a deadline query into `0..=capacity` (0 means "no slot").
#[inline]
fn clamp_query(d: i64, capacity: u64) -> usize {
    if d < 1 {
        0
    } else {
        (d as u64).min(capacity) as usize
    }
}
