//! Schedule result model.
//!
//! The outcome of one scheduling run: the admitted jobs with their slots,
//! the jobs that were dropped (and why), and the total reward earned.
//! `accepted` and `rejected` always partition the input job set.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Job;

/// Result of scheduling a job set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// Admitted jobs, ordered by increasing slot.
    pub accepted: Vec<SlotAssignment>,
    /// Dropped jobs, in the order they were rejected.
    pub rejected: Vec<Rejection>,
    /// Sum of rewards over `accepted`. Wider than a single reward so the
    /// total cannot overflow.
    pub total_reward: u128,
}

/// A job placed in a slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotAssignment {
    /// Execution slot (1-indexed).
    pub slot: u64,
    /// The admitted job.
    pub job: Job,
}

/// A job that was not admitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rejection {
    /// The dropped job.
    pub job: Job,
    /// Why it was dropped.
    pub reason: RejectionReason,
}

/// Classification of rejections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectionReason {
    /// `deadline < 1`: the job can never be placed.
    InvalidDeadline,
    /// Every slot up to the job's deadline was already taken by
    /// higher-reward jobs when its turn came.
    NoFreeSlot,
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDeadline => write!(f, "deadline before first slot"),
            Self::NoFreeSlot => write!(f, "no free slot before deadline"),
        }
    }
}

impl SlotAssignment {
    /// Creates a new assignment.
    pub fn new(slot: u64, job: Job) -> Self {
        Self { slot, job }
    }

    /// Slack between the slot and the job's deadline.
    #[inline]
    pub fn slack(&self) -> i64 {
        self.job.deadline - self.slot as i64
    }
}

impl Rejection {
    /// Creates a rejection for a job with a non-positive deadline.
    pub fn invalid_deadline(job: Job) -> Self {
        Self {
            job,
            reason: RejectionReason::InvalidDeadline,
        }
    }

    /// Creates a rejection for a job that lost its slots to higher rewards.
    pub fn no_free_slot(job: Job) -> Self {
        Self {
            job,
            reason: RejectionReason::NoFreeSlot,
        }
    }
}

impl ScheduleResult {
    /// Creates an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether neither accepted nor rejected jobs are present.
    pub fn is_empty(&self) -> bool {
        self.accepted.is_empty() && self.rejected.is_empty()
    }

    /// Number of admitted jobs.
    pub fn accepted_count(&self) -> usize {
        self.accepted.len()
    }

    /// Number of dropped jobs.
    pub fn rejected_count(&self) -> usize {
        self.rejected.len()
    }

    /// Finds the assignment for a given job id.
    pub fn assignment_for_job(&self, job_id: &str) -> Option<&SlotAssignment> {
        self.accepted.iter().find(|a| a.job.id == job_id)
    }

    /// Finds the rejection for a given job id.
    pub fn rejection_for_job(&self, job_id: &str) -> Option<&Rejection> {
        self.rejected.iter().find(|r| r.job.id == job_id)
    }

    /// Admitted jobs in slot order.
    pub fn accepted_jobs(&self) -> impl Iterator<Item = &Job> {
        self.accepted.iter().map(|a| &a.job)
    }

    /// Dropped jobs in rejection order.
    pub fn rejected_jobs(&self) -> impl Iterator<Item = &Job> {
        self.rejected.iter().map(|r| &r.job)
    }

    /// Last occupied slot (0 when nothing was admitted).
    pub fn makespan(&self) -> u64 {
        self.accepted.iter().map(|a| a.slot).max().unwrap_or(0)
    }
}
