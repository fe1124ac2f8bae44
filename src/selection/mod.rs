//! Reviewer selection
//!
//! Candidate filtering over the store plus the random picking policies used on
//! PR creation and on reassignment.

pub mod selector;

pub use selector::{ReviewerSelector, MAX_REVIEWERS};
