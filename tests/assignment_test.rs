//! Reviewer assignment properties exercised through `ReviewService`

use reviewer_assignment::database::models::PrStatus;
use reviewer_assignment::ReviewError;
use std::collections::HashSet;

mod common;
use common::*;

#[tokio::test]
async fn test_duplicate_team_leaves_state_unchanged() {
    let service = seeded_service();
    service
        .register_team(&team("backend", &[("u1", true), ("u2", true)]))
        .await
        .unwrap();

    let err = service
        .register_team(&team("backend", &[("u1", false), ("u9", true)]))
        .await
        .unwrap_err();
    assert_eq!(err, ReviewError::TeamExists);

    let roster = service.get_team("backend").await.unwrap();
    assert_eq!(roster.members.len(), 2);
    assert!(roster.members.iter().all(|m| m.is_active));
    assert_eq!(service.stats().await.users, 2);
}

#[tokio::test]
async fn test_create_never_assigns_author_or_more_than_two() {
    let service = seeded_service();
    let members: Vec<(String, bool)> = (0..8).map(|i| (format!("u{}", i), i % 3 != 0)).collect();
    let refs: Vec<(&str, bool)> = members.iter().map(|(id, a)| (id.as_str(), *a)).collect();
    service.register_team(&team("backend", &refs)).await.unwrap();

    for (i, (author, _)) in members.iter().enumerate() {
        let pr = service
            .create_pull_request(&format!("pr-{}", i), "x", author)
            .await
            .unwrap();

        let unique: HashSet<&String> = pr.assigned_reviewers.iter().collect();
        assert!(pr.assigned_reviewers.len() <= 2);
        assert_eq!(unique.len(), pr.assigned_reviewers.len());
        assert!(!pr.is_assigned(author));
        for reviewer in &pr.assigned_reviewers {
            let index: usize = reviewer[1..].parse().unwrap();
            assert!(index % 3 != 0, "inactive {} assigned", reviewer);
        }
    }
}

#[tokio::test]
async fn test_example_team_with_inactive_member() {
    let service = seeded_service();
    service
        .register_team(&team("A", &[("u1", true), ("u2", true), ("u3", false)]))
        .await
        .unwrap();

    let pr = service.create_pull_request("pr1", "x", "u1").await.unwrap();
    assert_eq!(pr.assigned_reviewers, vec!["u2".to_string()]);

    let err = service.reassign_reviewer("pr1", "u2").await.unwrap_err();
    assert_eq!(err, ReviewError::NoCandidate);

    let reviews = service.get_user_reviews("u2").await.unwrap();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].pull_request_id, "pr1");
}

#[tokio::test]
async fn test_reassign_to_other_team_of_outgoing_reviewer() {
    let service = seeded_service();
    service
        .register_team(&team("backend", &[("u1", true), ("u2", true)]))
        .await
        .unwrap();
    service.create_pull_request("pr-1", "x", "u1").await.unwrap();

    // u2 moves to a new team; replacements come from u2's current team.
    service
        .register_team(&team("platform", &[("u2", true), ("p1", true)]))
        .await
        .unwrap();

    let result = service.reassign_reviewer("pr-1", "u2").await.unwrap();
    assert_eq!(result.replaced_by, "p1");
    assert_eq!(result.pull_request.assigned_reviewers, vec!["p1".to_string()]);

    assert!(service.get_user_reviews("u2").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_deactivated_reviewer_keeps_assignment_until_reassigned() {
    let service = seeded_service();
    service
        .register_team(&team("backend", &[("u1", true), ("u2", true), ("u3", true), ("u4", true)]))
        .await
        .unwrap();
    let pr = service.create_pull_request("pr-1", "x", "u1").await.unwrap();
    let outgoing = pr.assigned_reviewers[0].clone();

    service.set_is_active(&outgoing, false).await.unwrap();
    let reviews = service.get_user_reviews(&outgoing).await.unwrap();
    assert_eq!(reviews.len(), 1);

    let result = service.reassign_reviewer("pr-1", &outgoing).await.unwrap();
    assert_eq!(result.pull_request.assigned_reviewers.len(), 2);
    assert!(!result.pull_request.is_assigned(&outgoing));
    assert!(service.get_user_reviews(&outgoing).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_merge_then_reassign_rejected() {
    let service = seeded_service();
    service
        .register_team(&team("backend", &[("u1", true), ("u2", true), ("u3", true)]))
        .await
        .unwrap();
    service.create_pull_request("pr-1", "x", "u1").await.unwrap();

    let merged = service.merge_pull_request("pr-1").await.unwrap();
    assert_eq!(merged.status, PrStatus::Merged);
    assert_eq!(service.merge_pull_request("pr-1").await.unwrap(), merged);

    for user in ["u1", "u2", "u3"] {
        let err = service.reassign_reviewer("pr-1", user).await.unwrap_err();
        assert_eq!(err, ReviewError::PrMerged);
    }
    assert_eq!(service.stats().await.open_pull_requests, 0);
}
