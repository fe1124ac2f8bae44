use tracing::{info, warn};

use crate::database::models::{Team, User};
use crate::database::Store;
use crate::error::ReviewError;

pub struct TeamRegistration;

impl TeamRegistration {
    /// Register `team` and upsert each of its members under it.
    ///
    /// A member that already exists is moved to this team and takes the payload's
    /// username and activation flag.
    pub fn register(store: &mut Store, team: &Team) -> Result<(), ReviewError> {
        if !store.register_team(&team.team_name) {
            warn!("Rejected team {}: already exists", team.team_name);
            return Err(ReviewError::TeamExists);
        }

        for member in &team.members {
            if let Some(existing) = store.get_user(&member.user_id) {
                if existing.team_name != team.team_name {
                    info!(
                        "User {} moves from team {} to {}",
                        member.user_id, existing.team_name, team.team_name
                    );
                }
            }
            store.upsert_user(User::from_member(member, &team.team_name));
        }

        info!(
            "Team {} registered with {} member(s)",
            team.team_name,
            team.members.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::models::TeamMember;

    fn member(id: &str, active: bool) -> TeamMember {
        TeamMember {
            user_id: id.to_string(),
            username: format!("name-{}", id),
            is_active: active,
        }
    }

    #[test]
    fn test_register_twice_leaves_state_unchanged() {
        let mut store = Store::new();
        let team = Team {
            team_name: "backend".to_string(),
            members: vec![member("u1", true)],
        };
        TeamRegistration::register(&mut store, &team).unwrap();

        let again = Team {
            team_name: "backend".to_string(),
            members: vec![member("u1", false), member("u2", true)],
        };
        let err = TeamRegistration::register(&mut store, &again).unwrap_err();

        assert_eq!(err, ReviewError::TeamExists);
        assert!(store.get_user("u1").unwrap().is_active);
        assert!(store.get_user("u2").is_none());
    }

    #[test]
    fn test_readding_member_moves_team() {
        let mut store = Store::new();
        TeamRegistration::register(
            &mut store,
            &Team {
                team_name: "backend".to_string(),
                members: vec![member("u1", true)],
            },
        )
        .unwrap();
        TeamRegistration::register(
            &mut store,
            &Team {
                team_name: "frontend".to_string(),
                members: vec![member("u1", false)],
            },
        )
        .unwrap();

        let user = store.get_user("u1").unwrap();
        assert_eq!(user.team_name, "frontend");
        assert!(!user.is_active);
        assert_eq!(store.list_users_by_team("backend").count(), 0);
    }
}
