use std::collections::HashSet;

use chrono::{DateTime, Utc};
use rand::Rng;
use tracing::{info, warn};

use super::status::{transition, StatusEvent, Transition};
use crate::database::models::{PrStatus, PullRequest};
use crate::database::Store;
use crate::error::ReviewError;
use crate::selection::ReviewerSelector;

/// Outcome of a successful reviewer swap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reassignment {
    pub pull_request: PullRequest,
    pub replaced_by: String,
}

pub struct PullRequestLifecycle;

impl PullRequestLifecycle {
    /// Open a PR and assign up to two active teammates of the author.
    pub fn create<R: Rng + ?Sized>(
        store: &mut Store,
        rng: &mut R,
        pr_id: &str,
        pr_name: &str,
        author_id: &str,
        now: DateTime<Utc>,
    ) -> Result<PullRequest, ReviewError> {
        if store.contains_pull_request(pr_id) {
            warn!("Rejected PR {}: id already exists", pr_id);
            return Err(ReviewError::PrExists);
        }

        let author = store
            .get_user(author_id)
            .ok_or_else(|| {
                warn!("Rejected PR {}: author {} not found", pr_id, author_id);
                ReviewError::author_not_found()
            })?;

        if !store.team_exists(&author.team_name) {
            warn!(
                "Rejected PR {}: author {} points at unregistered team {}",
                pr_id, author_id, author.team_name
            );
            return Err(ReviewError::author_team_not_found());
        }

        let exclude: HashSet<&str> = [author_id].into_iter().collect();
        let candidates = ReviewerSelector::select_candidates(store, &author.team_name, &exclude);
        let assigned_reviewers = ReviewerSelector::pick_initial_reviewers(candidates, rng);

        let pr = PullRequest {
            pull_request_id: pr_id.to_string(),
            pull_request_name: pr_name.to_string(),
            author_id: author_id.to_string(),
            status: PrStatus::Open,
            assigned_reviewers,
            created_at: now,
            merged_at: None,
        };

        store.put_pull_request(pr.clone());
        info!(
            "PR {} created by {} with {} reviewer(s)",
            pr_id,
            author_id,
            pr.assigned_reviewers.len()
        );
        Ok(pr)
    }

    /// Merge an OPEN PR. Merging an already MERGED PR returns it unchanged.
    pub fn merge(
        store: &mut Store,
        pr_id: &str,
        now: DateTime<Utc>,
    ) -> Result<PullRequest, ReviewError> {
        let mut pr = store
            .get_pull_request(pr_id)
            .cloned()
            .ok_or_else(|| {
                warn!("Rejected merge of PR {}: not found", pr_id);
                ReviewError::pull_request_not_found()
            })?;

        match transition(pr.status, StatusEvent::Merge) {
            Transition::Moved(status) => {
                pr.status = status;
                pr.merged_at = Some(now);
                store.put_pull_request(pr.clone());
                info!("PR {} merged", pr_id);
                Ok(pr)
            }
            Transition::Unchanged(status) => {
                info!("PR {} already {:?}, merge is a no-op", pr_id, status);
                Ok(pr)
            }
            Transition::Rejected(err) => Err(err),
        }
    }

    /// Replace `old_user_id` with a random active teammate of theirs.
    ///
    /// The replacement is never the author, the outgoing reviewer or anyone already assigned.
    pub fn reassign<R: Rng + ?Sized>(
        store: &mut Store,
        rng: &mut R,
        pr_id: &str,
        old_user_id: &str,
    ) -> Result<Reassignment, ReviewError> {
        let mut pr = store
            .get_pull_request(pr_id)
            .cloned()
            .ok_or_else(|| {
                warn!("Rejected reassignment on PR {}: not found", pr_id);
                ReviewError::pull_request_not_found()
            })?;

        let old_user = store.get_user(old_user_id).ok_or_else(|| {
            warn!(
                "Rejected reassignment on PR {}: user {} not found",
                pr_id, old_user_id
            );
            ReviewError::user_not_found()
        })?;

        if let Transition::Rejected(err) = transition(pr.status, StatusEvent::Reassign) {
            warn!("Rejected reassignment on PR {}: {}", pr_id, err);
            return Err(err);
        }

        let position = pr
            .assigned_reviewers
            .iter()
            .position(|r| r == old_user_id)
            .ok_or_else(|| {
                warn!(
                    "Rejected reassignment on PR {}: {} is not assigned",
                    pr_id, old_user_id
                );
                ReviewError::NotAssigned
            })?;

        let mut exclude: HashSet<&str> = pr.assigned_reviewers.iter().map(String::as_str).collect();
        exclude.insert(old_user_id);
        exclude.insert(pr.author_id.as_str());

        let candidates = ReviewerSelector::select_candidates(store, &old_user.team_name, &exclude);
        let replaced_by = match ReviewerSelector::pick_replacement(&candidates, rng) {
            Some(id) => id,
            None => {
                warn!(
                    "No replacement for {} on PR {} in team {}",
                    old_user_id, pr_id, old_user.team_name
                );
                return Err(ReviewError::NoCandidate);
            }
        };

        pr.assigned_reviewers[position] = replaced_by.clone();
        store.put_pull_request(pr.clone());

        info!(
            "PR {}: reviewer {} replaced by {}",
            pr_id, old_user_id, replaced_by
        );
        Ok(Reassignment {
            pull_request: pr,
            replaced_by,
        })
    }
}
