//! Scaling experiments over random workloads.
//!
//! Runs the scheduler on seeded workloads of increasing size, timing each
//! run and checking the result with [`verify`]. Reports are serializable so
//! the binary can emit them as JSON.
//!
//! Trial `t` (0-based) of size `n` uses seed `t * n + base_seed`.

use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::info;

use crate::scheduler::{DeadlineScheduler, SlotSearch};
use crate::validation::verify;
use crate::workload::{generate_jobs, WorkloadConfig};

/// Experiment parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    /// Input sizes to run.
    pub sizes: Vec<usize>,
    /// Trials per size.
    pub trials: usize,
    /// Added to every trial seed.
    pub base_seed: u64,
    /// Free-slot search used by the scheduler.
    pub slot_search: SlotSearch,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            sizes: vec![10, 50, 100, 500, 1000, 2000, 5000, 10000],
            trials: 5,
            base_seed: 0,
            slot_search: SlotSearch::DisjointSet,
        }
    }
}

/// Outcome of one trial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialResult {
    /// 1-based trial number.
    pub trial: usize,
    /// Jobs generated for the trial.
    pub total_jobs: usize,
    /// Jobs admitted by the scheduler.
    pub scheduled_jobs: usize,
    /// Sum of rewards of admitted jobs.
    pub total_reward: u128,
    /// Wall-clock time of the scheduling call alone (ms).
    pub execution_time_ms: f64,
    /// Whether [`verify`] accepted the schedule.
    pub valid: bool,
}

/// All trials of one input size with their averages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeResult {
    /// Jobs per trial.
    pub input_size: usize,
    /// Per-trial outcomes, in trial order.
    pub trials: Vec<TrialResult>,
    /// Mean of `execution_time_ms` (0.0 without trials).
    pub average_execution_time_ms: f64,
    /// Mean of `scheduled_jobs` (0.0 without trials).
    pub average_scheduled_jobs: f64,
    /// Mean of `total_reward` (0.0 without trials).
    pub average_total_reward: f64,
}

/// Full experiment report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentReport {
    /// Algorithm label.
    pub algorithm: String,
    /// Asymptotic cost of the configured slot search.
    pub complexity: String,
    /// One entry per configured size, in configuration order.
    pub experiments: Vec<SizeResult>,
}

impl ExperimentReport {
    /// Whether every trial produced a verified schedule.
    pub fn all_valid(&self) -> bool {
        self.experiments
            .iter()
            .flat_map(|e| e.trials.iter())
            .all(|t| t.valid)
    }
}

/// Runs every configured size for `config.trials` trials.
pub fn run_experiments(config: &ExperimentConfig) -> ExperimentReport {
    let scheduler = DeadlineScheduler::new().with_slot_search(config.slot_search);
    let complexity = match config.slot_search {
        SlotSearch::DisjointSet => "O(n log n)",
        SlotSearch::LinearScan => "O(n * max_deadline)",
    };

    let experiments = config
        .sizes
        .iter()
        .map(|&n| run_size(&scheduler, n, config.trials, config.base_seed))
        .collect();

    ExperimentReport {
        algorithm: "Latest-Fit Greedy Deadline Scheduling".to_string(),
        complexity: complexity.to_string(),
        experiments,
    }
}

fn run_size(
    scheduler: &DeadlineScheduler,
    n: usize,
    trials: usize,
    base_seed: u64,
) -> SizeResult {
    let trials: Vec<TrialResult> = (0..trials)
        .map(|t| {
            let seed = (t as u64) * (n as u64) + base_seed;
            let jobs = generate_jobs(&WorkloadConfig::new(n).with_seed(seed));

            let start = Instant::now();
            let result = scheduler.schedule(&jobs);
            let elapsed = start.elapsed();

            TrialResult {
                trial: t + 1,
                total_jobs: n,
                scheduled_jobs: result.accepted_count(),
                total_reward: result.total_reward,
                execution_time_ms: elapsed.as_secs_f64() * 1000.0,
                valid: verify(&result),
            }
        })
        .collect();

    let count = trials.len().max(1) as f64;
    let average_execution_time_ms =
        trials.iter().map(|t| t.execution_time_ms).sum::<f64>() / count;
    let average_scheduled_jobs =
        trials.iter().map(|t| t.scheduled_jobs as f64).sum::<f64>() / count;
    let average_total_reward =
        trials.iter().map(|t| t.total_reward as f64).sum::<f64>() / count;

    info!(
        input_size = n,
        avg_ms = average_execution_time_ms,
        avg_scheduled = average_scheduled_jobs,
        "size complete"
    );

    SizeResult {
        input_size: n,
        trials,
        average_execution_time_ms,
        average_scheduled_jobs,
        average_total_reward,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> ExperimentConfig {
        ExperimentConfig {
            sizes: vec![0, 5, 40],
            trials: 3,
            ..ExperimentConfig::default()
        }
    }

    #[test]
    fn test_report_shape() {
        let report = run_experiments(&small_config());
        assert_eq!(report.experiments.len(), 3);
        assert_eq!(report.complexity, "O(n log n)");
        for size in &report.experiments {
            assert_eq!(size.trials.len(), 3);
            assert_eq!(size.trials[0].trial, 1);
            assert!(size.trials.iter().all(|t| t.total_jobs == size.input_size));
            assert!(size
                .trials
                .iter()
                .all(|t| t.scheduled_jobs <= t.total_jobs));
        }
        assert!(report.all_valid());
    }

    #[test]
    fn test_strategies_agree_on_reward() {
        let fast = run_experiments(&small_config());
        let slow = run_experiments(&ExperimentConfig {
            slot_search: SlotSearch::LinearScan,
            ..small_config()
        });
        for (a, b) in fast.experiments.iter().zip(&slow.experiments) {
            for (ta, tb) in a.trials.iter().zip(&b.trials) {
                assert_eq!(ta.total_reward, tb.total_reward);
                assert_eq!(ta.scheduled_jobs, tb.scheduled_jobs);
            }
        }
        assert_eq!(slow.complexity, "O(n * max_deadline)");
    }

    #[test]
    fn test_zero_trials() {
        let report = run_experiments(&ExperimentConfig {
            sizes: vec![10],
            trials: 0,
            ..ExperimentConfig::default()
        });
        assert!(report.experiments[0].trials.is_empty());
        assert_eq!(report.experiments[0].average_scheduled_jobs, 0.0);
    }

    #[test]
    fn test_report_serializes() {
        let report = run_experiments(&ExperimentConfig {
            sizes: vec![4],
            trials: 1,
            ..ExperimentConfig::default()
        });
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["experiments"][0]["input_size"], 4);
        assert!(json["experiments"][0]["trials"][0]["valid"].as_bool().unwrap());
    }
}
