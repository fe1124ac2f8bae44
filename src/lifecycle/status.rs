//! Pull request status machine.
//!
//! Two states: OPEN (initial) and MERGED (absorbing). The transition function
//! is pure; callers apply the outcome to the stored PR.

use crate::database::models::PrStatus;
use crate::error::ReviewError;

/// Operations that consult the status before touching a PR.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusEvent {
    Merge,
    Reassign,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// The PR moves to a new status and the caller must persist it.
    Moved(PrStatus),
    /// The event is allowed but leaves the status as is.
    Unchanged(PrStatus),
    /// The event is forbidden in the current status.
    Rejected(ReviewError),
}

pub fn transition(current: PrStatus, event: StatusEvent) -> Transition {
    match (current, event) {
        (PrStatus::Open, StatusEvent::Merge) => Transition::Moved(PrStatus::Merged),
        (PrStatus::Open, StatusEvent::Reassign) => Transition::Unchanged(PrStatus::Open),
        // Merging twice is a no-op.
        (PrStatus::Merged, StatusEvent::Merge) => Transition::Unchanged(PrStatus::Merged),
        (PrStatus::Merged, StatusEvent::Reassign) => Transition::Rejected(ReviewError::PrMerged),
    }
}
