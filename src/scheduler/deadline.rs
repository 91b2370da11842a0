//! Optimal latest-fit greedy for unit-time jobs with deadlines.
//!
//! # Algorithm
//!
//! 1. Reject jobs with `deadline < 1`.
//! 2. Sort the rest by reward descending (stable, so equal rewards keep
//!    input order unless another [`TieBreaker`] is chosen).
//! 3. For each job, reserve the latest free slot `<= deadline`; reject it
//!    if none is left.
//! 4. Renumber the reserved slots `1..=m` in increasing order.
//!
//! # Optimality
//!
//! Exchange argument: a job placed as late as possible only consumes a slot
//! that some later, lower-reward job could also have used, never one an
//! earlier, higher-reward job needed. The accepted set is therefore a
//! maximum-weight independent set of the scheduling matroid. Step 4 keeps
//! the set and only moves jobs earlier: the k-th smallest reserved slot is
//! at least k.
//!
//! # Complexity
//! O(n log n) with [`SlotSearch::DisjointSet`], O(n * min(n, max_deadline))
//! with [`SlotSearch::LinearScan`].
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 16.5

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::allocator::{FreeSlotIndex, LinearSlotAllocator, SlotAllocator};
use crate::models::{Job, Rejection, ScheduleResult, SlotAssignment};

/// Free-slot search structure used during assignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotSearch {
    /// Union-find with path compression (default).
    #[default]
    DisjointSet,
    /// Backward scan per query.
    LinearScan,
}

/// How jobs with equal reward are ordered.
///
/// Ties never change the optimal total reward, only which of the tied jobs
/// are admitted. Both policies are deterministic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TieBreaker {
    /// Keep input order (stable sort).
    #[default]
    InputOrder,
    /// Tighter deadline first, then input order.
    EarliestDeadline,
}

/// Maximum-reward scheduler for unit-time jobs.
///
/// Stateless between calls: every [`schedule`](Self::schedule) builds and
/// drops its own slot allocator, so one scheduler may be shared across
/// threads.
///
/// # Example
/// ```
/// use u_deadline::models::Job;
/// use u_deadline::scheduler::DeadlineScheduler;
///
/// let jobs = vec![Job::new("a", 1, 10), Job::new("b", 1, 30), Job::new("c", 2, 20)];
/// let result = DeadlineScheduler::new().schedule(&jobs);
///
/// assert_eq!(result.total_reward, 50);
/// assert_eq!(result.assignment_for_job("b").map(|a| a.slot), Some(1));
/// assert_eq!(result.assignment_for_job("c").map(|a| a.slot), Some(2));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DeadlineScheduler {
    slot_search: SlotSearch,
    tie_breaker: TieBreaker,
}

impl DeadlineScheduler {
    /// Creates a scheduler with the disjoint-set search and input-order ties.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the free-slot search structure.
    pub fn with_slot_search(mut self, slot_search: SlotSearch) -> Self {
        self.slot_search = slot_search;
        self
    }

    /// Sets the tie-breaking policy.
    pub fn with_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Configured free-slot search structure.
    pub fn slot_search(&self) -> SlotSearch {
        self.slot_search
    }

    /// Configured tie-breaking policy.
    pub fn tie_breaker(&self) -> TieBreaker {
        self.tie_breaker
    }

    /// Selects the maximum-reward feasible subset of `jobs` and assigns
    /// each admitted job a distinct slot within its deadline.
    ///
    /// Total over all inputs: malformed jobs are rejected, an empty input
    /// gives an empty result.
    pub fn schedule(&self, jobs: &[Job]) -> ScheduleResult {
        let mut rejected = Vec::new();
        let mut order: Vec<usize> = Vec::with_capacity(jobs.len());

        for (idx, job) in jobs.iter().enumerate() {
            if job.has_valid_deadline() {
                order.push(idx);
            } else {
                trace!(job = %job.id, deadline = job.deadline, "rejected: invalid deadline");
                rejected.push(Rejection::invalid_deadline(job.clone()));
            }
        }

        // At most `order.len()` jobs can be admitted, so later slots are
        // never needed once the schedule is compacted.
        let max_deadline = order.iter().map(|&i| jobs[i].deadline).max().unwrap_or(0);
        let horizon = (max_deadline as u64).min(order.len() as u64) as usize;

        self.sort_by_reward(jobs, &mut order);

        let reserved = match self.slot_search {
            SlotSearch::DisjointSet => {
                assign_latest_fit(jobs, &order, SlotAllocator::new(horizon), &mut rejected)
            }
            SlotSearch::LinearScan => assign_latest_fit(
                jobs,
                &order,
                LinearSlotAllocator::new(horizon),
                &mut rejected,
            ),
        };

        let result = compact(jobs, reserved, rejected);
        debug!(
            jobs = jobs.len(),
            horizon,
            accepted = result.accepted_count(),
            rejected = result.rejected_count(),
            total_reward = result.total_reward,
            "schedule complete"
        );
        result
    }

    /// Sorts job indices by reward descending, applying the tie-breaker.
    fn sort_by_reward(&self, jobs: &[Job], order: &mut [usize]) {
        // `sort_by` is stable: indices arrive in input order.
        match self.tie_breaker {
            TieBreaker::InputOrder => {
                order.sort_by(|&a, &b| jobs[b].reward.cmp(&jobs[a].reward));
            }
            TieBreaker::EarliestDeadline => {
                order.sort_by(|&a, &b| {
                    jobs[b]
                        .reward
                        .cmp(&jobs[a].reward)
                        .then(jobs[a].deadline.cmp(&jobs[b].deadline))
                });
            }
        }
    }
}

/// Schedules `jobs` with the default [`DeadlineScheduler`].
pub fn schedule(jobs: &[Job]) -> ScheduleResult {
    DeadlineScheduler::new().schedule(jobs)
}

/// Reserves the latest free slot for each job in `order`.
///
/// Returns `(reserved_slot, job_index)` pairs; jobs that find no slot are
/// pushed onto `rejected`.
fn assign_latest_fit<A: FreeSlotIndex>(
    jobs: &[Job],
    order: &[usize],
    mut slots: A,
    rejected: &mut Vec<Rejection>,
) -> Vec<(u64, usize)> {
    let mut reserved = Vec::with_capacity(order.len().min(slots.capacity() as usize));

    for &idx in order {
        let job = &jobs[idx];
        match slots.find_latest_free(job.deadline) {
            Some(slot) => {
                if let Err(err) = slots.occupy(slot) {
                    unreachable!("slot {slot} reported free but occupy failed: {err}");
                }
                trace!(job = %job.id, reward = job.reward, slot, "reserved");
                reserved.push((slot, idx));
            }
            None => {
                trace!(job = %job.id, reward = job.reward, "rejected: no free slot");
                rejected.push(Rejection::no_free_slot(job.clone()));
            }
        }
    }

    reserved
}

/// Orders reservations by slot and renumbers them `1..=m`.
fn compact(
    jobs: &[Job],
    mut reserved: Vec<(u64, usize)>,
    rejected: Vec<Rejection>,
) -> ScheduleResult {
    reserved.sort_unstable_by_key(|&(slot, _)| slot);

    let accepted: Vec<SlotAssignment> = reserved
        .into_iter()
        .enumerate()
        .map(|(k, (_, idx))| SlotAssignment::new(k as u64 + 1, jobs[idx].clone()))
        .collect();
    let total_reward = accepted.iter().map(|a| u128::from(a.job.reward)).sum();

    ScheduleResult {
        accepted,
        rejected,
        total_reward,
    }
}
