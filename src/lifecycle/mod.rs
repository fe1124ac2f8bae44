//! Write paths over the store: team registration and the PR lifecycle
//! (create, merge, reassign).

pub mod pull_request;
pub mod status;
pub mod team;

pub use pull_request::{PullRequestLifecycle, Reassignment};
pub use status::{transition, StatusEvent, Transition};
pub use team::TeamRegistration;
