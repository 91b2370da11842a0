//! Optimal unit-time deadline scheduling for the U-Engine ecosystem.
//!
//! Selects, from jobs that each take one time slot and carry a deadline and
//! a reward, the maximum-reward subset that can run one at a time without a
//! deadline miss, and assigns each admitted job its slot. Typical use is
//! admission control for fixed-size control-plane frames sharing a
//! unit-capacity channel.
//!
//! # Modules
//!
//! - **`models`**: `Job`, `ScheduleResult`, `SlotAssignment`, `Rejection`
//! - **`allocator`**: latest-free-slot indices (disjoint-set and linear scan)
//! - **`scheduler`**: `DeadlineScheduler` (latest-fit greedy) and `ScheduleKpi`
//! - **`validation`**: job-set validation and schedule verification
//! - **`workload`**: seeded random job sets
//! - **`experiment`**: timed scaling runs with serializable reports
//!
//! # Example
//!
//! ```
//! use u_deadline::{schedule, verify, Job};
//!
//! let jobs = vec![Job::new("hello", 2, 40), Job::new("route", 1, 30), Job::new("ka", 1, 10)];
//! let result = schedule(&jobs);
//!
//! assert_eq!(result.total_reward, 70);
//! assert_eq!(result.rejected_count(), 1);
//! assert!(verify(&result));
//! ```
//!
//! # References
//!
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 16.5
//! - Gabow & Tarjan (1985), "A linear-time algorithm for a special case of
//!   disjoint set union"

pub mod allocator;
pub mod experiment;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use models::{Job, Rejection, RejectionReason, ScheduleResult, SlotAssignment};
pub use scheduler::{schedule, DeadlineScheduler};
pub use validation::verify;
