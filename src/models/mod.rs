//! Scheduling domain models.
//!
//! Plain immutable records passed into and out of the scheduler.
//!
//! # Domain Mappings
//!
//! | u-deadline | Control plane | Batch processing |
//! |------------|---------------|------------------|
//! | Job | Keepalive / routing frame | Unit job |
//! | Slot | Channel time slot | Machine tick |
//! | Reward | Message priority | Profit |

mod job;
mod schedule;

pub use job::Job;
pub use schedule::{Rejection, RejectionReason, ScheduleResult, SlotAssignment};
