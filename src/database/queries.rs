use tracing::{info, warn};

use crate::database::models::*;
use crate::database::Store;
use crate::error::ReviewError;

pub struct Queries;

impl Queries {
    /// Team roster, derived by scanning users that point at `team_name`.
    pub fn get_team(store: &Store, team_name: &str) -> Result<Team, ReviewError> {
        if !store.team_exists(team_name) {
            warn!("Rejected team lookup: {} not found", team_name);
            return Err(ReviewError::team_not_found());
        }

        Ok(Team {
            team_name: team_name.to_string(),
            members: store
                .list_users_by_team(team_name)
                .map(User::as_member)
                .collect(),
        })
    }

    /// Every PR that currently lists `user_id` as a reviewer, in any status.
    pub fn get_user_reviews(
        store: &Store,
        user_id: &str,
    ) -> Result<Vec<PullRequestShort>, ReviewError> {
        if store.get_user(user_id).is_none() {
            warn!("Rejected review lookup: user {} not found", user_id);
            return Err(ReviewError::user_not_found());
        }

        Ok(store
            .pull_requests()
            .filter(|pr| pr.is_assigned(user_id))
            .map(PullRequest::to_short)
            .collect())
    }

    /// Flips the activation flag. Existing assignments are left untouched.
    pub fn set_is_active(
        store: &mut Store,
        user_id: &str,
        is_active: bool,
    ) -> Result<User, ReviewError> {
        let user = store
            .get_user_mut(user_id)
            .ok_or_else(|| {
                warn!("Rejected activation change: user {} not found", user_id);
                ReviewError::user_not_found()
            })?;
        user.is_active = is_active;

        info!("User {} is_active set to {}", user_id, is_active);
        Ok(user.clone())
    }
}
