//! Schedule quality metrics (KPIs).
//!
//! Computes admission-control indicators from a schedule result and the
//! job set it was produced from.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Acceptance Rate | accepted / offered jobs |
//! | Reward Capture | accepted reward / offered reward |
//! | Makespan | Last occupied slot |
//! | Slot Utilization | accepted / min(max deadline, offered jobs) |
//! | Avg Slack | Mean(deadline - slot) over accepted jobs |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use serde::{Deserialize, Serialize};

use crate::models::{Job, RejectionReason, ScheduleResult};

/// Schedule performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Jobs offered to the scheduler.
    pub offered_jobs: usize,
    /// Jobs admitted.
    pub accepted_jobs: usize,
    /// Jobs dropped because their slots were taken.
    pub dropped_for_capacity: usize,
    /// Jobs dropped because their deadline was below 1.
    pub dropped_invalid: usize,
    /// Sum of rewards of admitted jobs.
    pub total_reward: u128,
    /// Sum of rewards over all offered jobs.
    pub offered_reward: u128,
    /// accepted / offered (1.0 when nothing was offered).
    pub acceptance_rate: f64,
    /// total_reward / offered_reward (1.0 when nothing was offered).
    pub reward_capture: f64,
    /// Last occupied slot.
    pub makespan: u64,
    /// Fraction of usable slots that are occupied (0.0..1.0).
    pub slot_utilization: f64,
    /// Mean deadline slack of admitted jobs (slots).
    pub avg_slack: f64,
}

impl ScheduleKpi {
    /// Computes KPIs from a result and its input jobs.
    ///
    /// # Arguments
    /// * `result` - The schedule produced for `jobs`.
    /// * `jobs` - The offered job set (for offered reward and horizon).
    pub fn calculate(result: &ScheduleResult, jobs: &[Job]) -> Self {
        let offered_jobs = jobs.len();
        let accepted_jobs = result.accepted_count();
        let offered_reward: u128 = jobs.iter().map(|j| u128::from(j.reward)).sum();

        let mut dropped_for_capacity = 0;
        let mut dropped_invalid = 0;
        for r in &result.rejected {
            match r.reason {
                RejectionReason::NoFreeSlot => dropped_for_capacity += 1,
                RejectionReason::InvalidDeadline => dropped_invalid += 1,
            }
        }

        let valid: Vec<&Job> = jobs.iter().filter(|j| j.has_valid_deadline()).collect();
        let max_deadline = valid.iter().map(|j| j.deadline).max().unwrap_or(0);
        let usable_slots = (max_deadline as u64).min(valid.len() as u64);

        let acceptance_rate = if offered_jobs == 0 {
            1.0
        } else {
            accepted_jobs as f64 / offered_jobs as f64
        };

        let reward_capture = if offered_reward == 0 {
            1.0
        } else {
            result.total_reward as f64 / offered_reward as f64
        };

        let slot_utilization = if usable_slots == 0 {
            0.0
        } else {
            accepted_jobs as f64 / usable_slots as f64
        };

        let avg_slack = if accepted_jobs == 0 {
            0.0
        } else {
            let total: i64 = result.accepted.iter().map(|a| a.slack()).sum();
            total as f64 / accepted_jobs as f64
        };

        Self {
            offered_jobs,
            accepted_jobs,
            dropped_for_capacity,
            dropped_invalid,
            total_reward: result.total_reward,
            offered_reward,
            acceptance_rate,
            reward_capture,
            makespan: result.makespan(),
            slot_utilization,
            avg_slack,
        }
    }

    /// Whether the schedule meets the given quality thresholds.
    pub fn meets_thresholds(&self, min_acceptance: f64, min_reward_capture: f64) -> bool {
        self.acceptance_rate >= min_acceptance && self.reward_capture >= min_reward_capture
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::schedule;

    fn sample_jobs() -> Vec<Job> {
        vec![
            Job::new("J0", 1, 30),
            Job::new("J1", 1, 10),
            Job::new("J2", 3, 20),
            Job::new("J3", 0, 40),
        ]
    }

    #[test]
    fn test_kpi_counts() {
        let jobs = sample_jobs();
        let result = schedule(&jobs);
        let kpi = ScheduleKpi::calculate(&result, &jobs);

        assert_eq!(kpi.offered_jobs, 4);
        assert_eq!(kpi.accepted_jobs, 2);
        assert_eq!(kpi.dropped_for_capacity, 1);
        assert_eq!(kpi.dropped_invalid, 1);
        assert_eq!(kpi.total_reward, 50);
        assert_eq!(kpi.offered_reward, 100);
        assert_eq!(kpi.makespan, 2);
    }

    #[test]
    fn test_kpi_rates() {
        let jobs = sample_jobs();
        let result = schedule(&jobs);
        let kpi = ScheduleKpi::calculate(&result, &jobs);

        assert!((kpi.acceptance_rate - 0.5).abs() < 1e-10);
        assert!((kpi.reward_capture - 0.5).abs() < 1e-10);
        // Usable slots: min(max deadline 3, 3 valid jobs) = 3.
        assert!((kpi.slot_utilization - 2.0 / 3.0).abs() < 1e-10);
        // J0 in slot 1 (slack 0), J2 in slot 2 (slack 1).
        assert!((kpi.avg_slack - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_empty() {
        let result = schedule(&[]);
        let kpi = ScheduleKpi::calculate(&result, &[]);
        assert_eq!(kpi.offered_jobs, 0);
        assert!((kpi.acceptance_rate - 1.0).abs() < 1e-10);
        assert!((kpi.reward_capture - 1.0).abs() < 1e-10);
        assert_eq!(kpi.slot_utilization, 0.0);
        assert_eq!(kpi.makespan, 0);
    }

    #[test]
    fn test_meets_thresholds() {
        let jobs = sample_jobs();
        let kpi = ScheduleKpi::calculate(&schedule(&jobs), &jobs);
        assert!(kpi.meets_thresholds(0.5, 0.5));
        assert!(!kpi.meets_thresholds(0.9, 0.5));
    }

    #[test]
    fn test_kpi_max_rewards() {
        let jobs = vec![Job::new("a", 1, u64::MAX), Job::new("b", 1, 1)];
        let result = schedule(&jobs);
        let kpi = ScheduleKpi::calculate(&result, &jobs);
        assert_eq!(kpi.total_reward, u128::from(u64::MAX));
        assert_eq!(kpi.offered_reward, u128::from(u64::MAX) + 1);
        assert!(kpi.reward_capture > 0.999);
    }
}
