//! Property-based invariant tests for the deadline scheduler.
//!
//! For arbitrary small job sets (including malformed deadlines):
//!
//! 1. Accepted and rejected partition the input exactly.
//! 2. Every accepted job meets its deadline.
//! 3. Assigned slots are distinct and positive.
//! 4. Total reward equals the exhaustive-search optimum (up to 12 jobs).
//! 5. Scheduling twice gives the same result.
//! 6. `verify` and `check_schedule` accept every produced schedule.
//! 7. Disjoint-set and linear-scan searches agree.
//! 8. Tie-breaking never changes the total reward.

use proptest::prelude::*;
use std::collections::HashSet;

use u_deadline::allocator::{FreeSlotIndex, LinearSlotAllocator, SlotAllocator};
use u_deadline::scheduler::{DeadlineScheduler, SlotSearch, TieBreaker};
use u_deadline::validation::check_schedule;
use u_deadline::{schedule, verify, Job};

// ── Helpers ─────────────────────────────────────────────────────────────

/// Mostly small deadlines, with some far beyond the job count.
fn deadline_strategy() -> impl Strategy<Value = i64> {
    prop_oneof![
        6 => -1i64..=14,
        2 => 15i64..=i64::MAX,
        1 => Just(i64::MAX),
    ]
}

/// Mostly small rewards, with the occasional maximum to stress the totals.
fn reward_strategy() -> impl Strategy<Value = u64> {
    prop_oneof![
        9 => 0u64..=50,
        1 => Just(u64::MAX),
    ]
}

fn jobs_strategy(max_len: usize) -> impl Strategy<Value = Vec<Job>> {
    let job = (deadline_strategy(), reward_strategy());
    prop::collection::vec(job, 0..=max_len).prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(i, (deadline, reward))| Job::new(format!("J{i}"), deadline, reward))
            .collect()
    })
}

/// A subset is feasible iff, sorted by deadline, the k-th job has deadline >= k.
fn feasible(subset: &[&Job]) -> bool {
    let mut deadlines: Vec<i64> = subset.iter().map(|j| j.deadline).collect();
    deadlines.sort_unstable();
    deadlines.iter().zip(1i64..).all(|(&d, k)| d >= k)
}

/// Best total reward over all 2^n subsets.
fn exhaustive_optimum(jobs: &[Job]) -> u128 {
    let n = jobs.len();
    let mut best = 0;
    for mask in 0u32..(1 << n) {
        let subset: Vec<&Job> = (0..n)
            .filter(|&i| mask & (1 << i) != 0)
            .map(|i| &jobs[i])
            .collect();
        if feasible(&subset) {
            best = best.max(subset.iter().map(|j| u128::from(j.reward)).sum::<u128>());
        }
    }
    best
}

// ═════════════════════════════════════════════════════════════════════════
// 1-3. Partition, deadline safety, slot uniqueness
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn accepted_and_rejected_partition_input(jobs in jobs_strategy(20)) {
        let result = schedule(&jobs);
        let mut seen: Vec<&str> = result
            .accepted_jobs()
            .chain(result.rejected_jobs())
            .map(|j| j.id.as_str())
            .collect();
        seen.sort_unstable();
        let mut expected: Vec<&str> = jobs.iter().map(|j| j.id.as_str()).collect();
        expected.sort_unstable();
        prop_assert_eq!(seen, expected);
    }

    #[test]
    fn accepted_jobs_meet_deadlines(jobs in jobs_strategy(20)) {
        let result = schedule(&jobs);
        for a in &result.accepted {
            prop_assert!(a.slot >= 1);
            prop_assert!((a.slot as i64) <= a.job.deadline, "{:?} misses deadline", a);
        }
    }

    #[test]
    fn slots_are_distinct(jobs in jobs_strategy(20)) {
        let result = schedule(&jobs);
        let slots: HashSet<u64> = result.accepted.iter().map(|a| a.slot).collect();
        prop_assert_eq!(slots.len(), result.accepted_count());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Optimality against exhaustive search
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn total_reward_is_optimal(jobs in jobs_strategy(12)) {
        let result = schedule(&jobs);
        prop_assert_eq!(result.total_reward, exhaustive_optimum(&jobs));
        let sum: u128 = result.accepted_jobs().map(|j| u128::from(j.reward)).sum();
        prop_assert_eq!(result.total_reward, sum);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5-6. Idempotence and verification
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn scheduling_is_idempotent(jobs in jobs_strategy(20)) {
        prop_assert_eq!(schedule(&jobs), schedule(&jobs));
    }

    #[test]
    fn produced_schedules_verify(jobs in jobs_strategy(20)) {
        let result = schedule(&jobs);
        prop_assert!(verify(&result));
        prop_assert!(check_schedule(&result).is_ok());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7-8. Strategy and tie-break independence
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn slot_searches_agree(jobs in jobs_strategy(20)) {
        let fast = DeadlineScheduler::new().schedule(&jobs);
        let slow = DeadlineScheduler::new()
            .with_slot_search(SlotSearch::LinearScan)
            .schedule(&jobs);
        prop_assert_eq!(fast, slow);
    }

    #[test]
    fn tie_breaker_keeps_total(jobs in jobs_strategy(20)) {
        let a = DeadlineScheduler::new().schedule(&jobs);
        let b = DeadlineScheduler::new()
            .with_tie_breaker(TieBreaker::EarliestDeadline)
            .schedule(&jobs);
        prop_assert_eq!(a.total_reward, b.total_reward);
        prop_assert_eq!(a.accepted_count(), b.accepted_count());
    }

    #[test]
    fn allocators_agree_on_query_sequence(
        capacity in 0usize..=16,
        queries in prop::collection::vec(-2i64..=20, 0..40),
    ) {
        let mut fast = SlotAllocator::new(capacity);
        let mut slow = LinearSlotAllocator::new(capacity);
        for d in queries {
            let found = fast.find_latest_free(d);
            prop_assert_eq!(found, slow.find_latest_free(d));
            if let Some(slot) = found {
                prop_assert!((slot as i64) <= d);
                fast.occupy(slot).unwrap();
                slow.occupy(slot).unwrap();
                prop_assert!(!fast.is_free(slot));
            }
        }
    }
}
