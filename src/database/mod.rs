pub mod models;
pub mod queries;

use std::collections::{BTreeMap, BTreeSet};

use models::{PrStatus, PullRequest, StoreStats, User};

/// In-memory state for teams, users and pull requests.
///
/// Enforces key uniqueness only. Business rules (author must exist, reviewers
/// must be active, ...) belong to the callers. Maps are ordered by key so that
/// candidate scans are reproducible under a seeded RNG.
#[derive(Debug, Default)]
pub struct Store {
    teams: BTreeSet<String>,
    users: BTreeMap<String, User>,
    pull_requests: BTreeMap<String, PullRequest>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a team name as registered. Returns false if it already was.
    pub fn register_team(&mut self, team_name: &str) -> bool {
        self.teams.insert(team_name.to_string())
    }

    pub fn team_exists(&self, team_name: &str) -> bool {
        self.teams.contains(team_name)
    }

    /// Inserts or replaces a user by id. Replacing may move the user to another team.
    pub fn upsert_user(&mut self, user: User) {
        self.users.insert(user.user_id.clone(), user);
    }

    pub fn get_user(&self, user_id: &str) -> Option<&User> {
        self.users.get(user_id)
    }

    pub fn get_user_mut(&mut self, user_id: &str) -> Option<&mut User> {
        self.users.get_mut(user_id)
    }

    /// Users whose `team_name` currently points at the given team.
    pub fn list_users_by_team<'a>(&'a self, team_name: &'a str) -> impl Iterator<Item = &'a User> {
        self.users.values().filter(move |u| u.team_name == team_name)
    }

    pub fn get_pull_request(&self, pr_id: &str) -> Option<&PullRequest> {
        self.pull_requests.get(pr_id)
    }

    pub fn contains_pull_request(&self, pr_id: &str) -> bool {
        self.pull_requests.contains_key(pr_id)
    }

    pub fn put_pull_request(&mut self, pr: PullRequest) {
        self.pull_requests.insert(pr.pull_request_id.clone(), pr);
    }

    pub fn pull_requests(&self) -> impl Iterator<Item = &PullRequest> {
        self.pull_requests.values()
    }

    pub fn stats(&self) -> StoreStats {
        StoreStats {
            teams: self.teams.len(),
            users: self.users.len(),
            pull_requests: self.pull_requests.len(),
            open_pull_requests: self
                .pull_requests
                .values()
                .filter(|pr| pr.status == PrStatus::Open)
                .count(),
        }
    }
}
