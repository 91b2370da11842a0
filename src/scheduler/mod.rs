//! Deadline scheduler and KPI evaluation.
//!
//! # Algorithm
//!
//! `DeadlineScheduler` runs the latest-fit greedy over unit-time jobs:
//! highest reward first, each job in the latest free slot within its
//! deadline. It is optimal in total reward.
//!
//! # KPI
//!
//! `ScheduleKpi` computes admission metrics: acceptance rate, reward
//! capture, makespan, slot utilization and slack.
//!
//! # References
//!
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 16.5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

mod deadline;
mod kpi;

pub use deadline::{schedule, DeadlineScheduler, SlotSearch, TieBreaker};
pub use kpi::ScheduleKpi;
