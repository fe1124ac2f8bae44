use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::database::Store;

/// Upper bound on reviewers assigned to a single PR.
pub const MAX_REVIEWERS: usize = 2;

pub struct ReviewerSelector;

impl ReviewerSelector {
    /// Active members of `team_name` whose id is not in `exclude`, in store order.
    pub fn select_candidates(store: &Store, team_name: &str, exclude: &HashSet<&str>) -> Vec<String> {
        store
            .list_users_by_team(team_name)
            .filter(|u| u.is_active && !exclude.contains(u.user_id.as_str()))
            .map(|u| u.user_id.clone())
            .collect()
    }

    /// Uniform permutation of the pool, truncated to `MAX_REVIEWERS`.
    ///
    /// Returns fewer than two reviewers when the pool is smaller; that is not an error.
    pub fn pick_initial_reviewers<R: Rng + ?Sized>(
        mut candidates: Vec<String>,
        rng: &mut R,
    ) -> Vec<String> {
        candidates.shuffle(rng);
        candidates.truncate(MAX_REVIEWERS);
        candidates
    }

    /// One candidate chosen uniformly, or None for an empty pool.
    pub fn pick_replacement<R: Rng + ?Sized>(candidates: &[String], rng: &mut R) -> Option<String> {
        candidates.choose(rng).cloned()
    }
}
