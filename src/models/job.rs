//! Job model.
//!
//! A job is a unit-time task: it occupies exactly one discrete slot and
//! must be placed in a slot no later than its deadline to count.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Problem 16-4

use serde::{Deserialize, Serialize};

/// A unit-time job with a deadline and a reward.
///
/// # Time Representation
/// Slots are 1-indexed. A job with `deadline = 3` may run in slot 1, 2 or 3.
/// Deadlines are signed so that malformed input (`deadline < 1`) can still be
/// represented and reported as rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Job {
    /// Identifier, unique within a job set. Never used for ordering.
    pub id: String,
    /// Latest slot (1-indexed) the job may occupy.
    pub deadline: i64,
    /// Value earned when the job is scheduled (higher = more important).
    pub reward: u64,
}

impl Job {
    /// Creates a new job.
    pub fn new(id: impl Into<String>, deadline: i64, reward: u64) -> Self {
        Self {
            id: id.into(),
            deadline,
            reward,
        }
    }

    /// Sets the deadline.
    pub fn with_deadline(mut self, deadline: i64) -> Self {
        self.deadline = deadline;
        self
    }

    /// Sets the reward.
    pub fn with_reward(mut self, reward: u64) -> Self {
        self.reward = reward;
        self
    }

    /// Whether the job can be placed in any slot at all (`deadline >= 1`).
    #[inline]
    pub fn has_valid_deadline(&self) -> bool {
        self.deadline >= 1
    }

    /// Whether running in `slot` meets this job's deadline.
    #[inline]
    pub fn fits_slot(&self, slot: u64) -> bool {
        slot >= 1 && i64::try_from(slot).is_ok_and(|s| s <= self.deadline)
    }
}
