//! Shared handle over the store.
//!
//! Every operation takes the single global lock for its whole read-modify-write,
//! so concurrent requests observe a serial order.

use std::sync::Arc;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::Mutex;
use tracing::debug;

use crate::database::models::{PullRequest, PullRequestShort, StoreStats, Team, User};
use crate::database::queries::Queries;
use crate::database::Store;
use crate::error::ReviewError;
use crate::lifecycle::{PullRequestLifecycle, Reassignment, TeamRegistration};

struct ServiceState {
    store: Store,
    rng: StdRng,
}

#[derive(Clone)]
pub struct ReviewService {
    state: Arc<Mutex<ServiceState>>,
}

impl ReviewService {
    /// A service over an empty store. `rng_seed` makes reviewer picks reproducible.
    pub fn new(rng_seed: Option<u64>) -> Self {
        let rng = match rng_seed {
            Some(seed) => {
                debug!("Reviewer selection seeded with {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };
        Self::with_store(Store::new(), rng)
    }

    pub fn with_store(store: Store, rng: StdRng) -> Self {
        Self {
            state: Arc::new(Mutex::new(ServiceState { store, rng })),
        }
    }

    pub async fn register_team(&self, team: &Team) -> Result<(), ReviewError> {
        let mut state = self.state.lock().await;
        TeamRegistration::register(&mut state.store, team)
    }

    pub async fn get_team(&self, team_name: &str) -> Result<Team, ReviewError> {
        let state = self.state.lock().await;
        Queries::get_team(&state.store, team_name)
    }

    pub async fn set_is_active(&self, user_id: &str, is_active: bool) -> Result<User, ReviewError> {
        let mut state = self.state.lock().await;
        Queries::set_is_active(&mut state.store, user_id, is_active)
    }

    pub async fn get_user_reviews(&self, user_id: &str) -> Result<Vec<PullRequestShort>, ReviewError> {
        let state = self.state.lock().await;
        Queries::get_user_reviews(&state.store, user_id)
    }

    pub async fn create_pull_request(
        &self,
        pr_id: &str,
        pr_name: &str,
        author_id: &str,
    ) -> Result<PullRequest, ReviewError> {
        let mut guard = self.state.lock().await;
        let ServiceState { store, rng } = &mut *guard;
        PullRequestLifecycle::create(store, rng, pr_id, pr_name, author_id, Utc::now())
    }

    pub async fn merge_pull_request(&self, pr_id: &str) -> Result<PullRequest, ReviewError> {
        let mut state = self.state.lock().await;
        PullRequestLifecycle::merge(&mut state.store, pr_id, Utc::now())
    }

    pub async fn reassign_reviewer(
        &self,
        pr_id: &str,
        old_user_id: &str,
    ) -> Result<Reassignment, ReviewError> {
        let mut guard = self.state.lock().await;
        let ServiceState { store, rng } = &mut *guard;
        PullRequestLifecycle::reassign(store, rng, pr_id, old_user_id)
    }

    pub async fn stats(&self) -> StoreStats {
        self.state.lock().await.store.stats()
    }
}
