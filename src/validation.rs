//! Input validation and schedule verification.
//!
//! Two independent checks:
//! - [`validate_jobs`] inspects a job set before scheduling (duplicate IDs,
//!   non-positive deadlines). The scheduler tolerates both; this is for
//!   callers that want to surface them.
//! - [`verify`] / [`check_schedule`] inspect a finished schedule without any
//!   knowledge of how it was produced.

use crate::models::{Job, ScheduleResult};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two jobs share the same ID.
    DuplicateId,
    /// A job's deadline is below the first slot.
    InvalidDeadline,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a job set.
///
/// Checks:
/// 1. No duplicate job IDs
/// 2. Every deadline is at least 1
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_jobs(jobs: &[Job]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for job in jobs {
        if !ids.insert(job.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate job ID: {}", job.id),
            ));
        }
        if !job.has_valid_deadline() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidDeadline,
                format!("Job '{}' has deadline {} < 1", job.id, job.deadline),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// A defect found in a finished schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleViolation {
    /// The k-th accepted job (1-indexed) is not in slot k.
    SlotGap { position: u64, slot: u64 },
    /// A job sits in a slot after its deadline.
    DeadlineMiss { job_id: String, slot: u64, deadline: i64 },
    /// The same job ID appears more than once across accepted and rejected.
    DuplicateJob { job_id: String },
    /// `total_reward` differs from the sum over accepted jobs.
    RewardMismatch { reported: u128, actual: u128 },
}

/// Sanity check of a schedule's slot assignment.
///
/// True iff, reading `accepted` in order, the k-th job occupies slot k and
/// no job's slot exceeds its deadline.
pub fn verify(result: &ScheduleResult) -> bool {
    result
        .accepted
        .iter()
        .zip(1u64..)
        .all(|(a, k)| a.slot == k && a.job.fits_slot(a.slot))
}

/// Full consistency check of a schedule.
///
/// Extends [`verify`] with the partition and reward bookkeeping.
///
/// # Returns
/// `Ok(())` if the schedule is consistent, `Err(violations)` otherwise.
pub fn check_schedule(result: &ScheduleResult) -> Result<(), Vec<ScheduleViolation>> {
    let mut violations = Vec::new();

    for (a, k) in result.accepted.iter().zip(1u64..) {
        if a.slot != k {
            violations.push(ScheduleViolation::SlotGap {
                position: k,
                slot: a.slot,
            });
        }
        if !a.job.fits_slot(a.slot) {
            violations.push(ScheduleViolation::DeadlineMiss {
                job_id: a.job.id.clone(),
                slot: a.slot,
                deadline: a.job.deadline,
            });
        }
    }

    let mut seen = HashSet::new();
    for job in result.accepted_jobs().chain(result.rejected_jobs()) {
        if !seen.insert(job.id.as_str()) {
            violations.push(ScheduleViolation::DuplicateJob {
                job_id: job.id.clone(),
            });
        }
    }

    let actual: u128 = result.accepted_jobs().map(|j| u128::from(j.reward)).sum();
    if actual != result.total_reward {
        violations.push(ScheduleViolation::RewardMismatch {
            reported: result.total_reward,
            actual,
        });
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}
