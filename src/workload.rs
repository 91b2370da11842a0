//! Seeded random job-set generation.
//!
//! Produces reproducible workloads for experiments and tests: the same
//! [`WorkloadConfig`] always yields the same jobs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::models::Job;

/// Parameters of a random workload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadConfig {
    /// Number of jobs to generate.
    pub job_count: usize,
    /// Largest deadline drawn. `None` = `2 * job_count`.
    pub max_deadline: Option<i64>,
    /// Largest reward drawn (rewards are uniform in `1..=max_reward`).
    pub max_reward: u64,
    /// RNG seed.
    pub seed: u64,
}

impl WorkloadConfig {
    /// Creates a config for `job_count` jobs with default bounds and seed 0.
    pub fn new(job_count: usize) -> Self {
        Self {
            job_count,
            max_deadline: None,
            max_reward: 100,
            seed: 0,
        }
    }

    /// Sets the largest deadline.
    pub fn with_max_deadline(mut self, max_deadline: i64) -> Self {
        self.max_deadline = Some(max_deadline);
        self
    }

    /// Sets the largest reward.
    pub fn with_max_reward(mut self, max_reward: u64) -> Self {
        self.max_reward = max_reward;
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Effective deadline bound (at least 1).
    pub fn effective_max_deadline(&self) -> i64 {
        self.max_deadline
            .unwrap_or(2 * self.job_count as i64)
            .max(1)
    }
}

/// Generates jobs `J0..J{n-1}` with deadlines uniform in
/// `1..=max_deadline` and rewards uniform in `1..=max_reward`.
pub fn generate_jobs(config: &WorkloadConfig) -> Vec<Job> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let max_deadline = config.effective_max_deadline();
    let max_reward = config.max_reward.max(1);

    (0..config.job_count)
        .map(|i| {
            let deadline = rng.random_range(1..=max_deadline);
            let reward = rng.random_range(1..=max_reward);
            Job::new(format!("J{i}"), deadline, reward)
        })
        .collect()
}
