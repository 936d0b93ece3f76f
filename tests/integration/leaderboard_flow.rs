use std::sync::Arc;

use peerly_core::models::leaderboard::Medal;
use peerly_core::models::profile::Role;
use peerly_core::services::leaderboard_service::LeaderboardService;

mod support;

use support::{cohort_member, MemoryRepository};

#[tokio::test]
async fn cohort_truncates_to_ten_and_keeps_true_self_rank() {
    let repo = Arc::new(MemoryRepository::new());
    repo.insert_user(support::user("viewer", "Vi", Role::Student, 250));

    let mut members: Vec<_> = (0..10)
        .map(|index| cohort_member(&format!("u{index}"), 1200 - index * 100))
        .collect();
    members.push(cohort_member("u10", 200));
    members.push(cohort_member("viewer", 250));
    repo.set_cohort("7", members);

    let service = LeaderboardService::new(repo.clone());
    let view = service.load_leaderboard("viewer").await.expect("view");

    assert_eq!(view.grade, "7");
    assert_eq!(view.entries.len(), 10);
    assert_eq!(view.cohort_size, 12);
    assert_eq!(view.self_rank, Some(11));
    assert!(view.entries.iter().all(|entry| !entry.is_self));

    assert_eq!(view.entries[0].medal, Some(Medal::Gold));
    assert_eq!(view.entries[1].medal, Some(Medal::Silver));
    assert_eq!(view.entries[2].medal, Some(Medal::Bronze));
    assert!(view.entries[3..].iter().all(|entry| entry.medal.is_none()));
}

#[tokio::test]
async fn tied_points_keep_backend_fetch_order() {
    let repo = Arc::new(MemoryRepository::new());
    repo.insert_user(support::user("b", "Bea", Role::Student, 50));
    repo.set_cohort(
        "7",
        vec![
            cohort_member("a", 50),
            cohort_member("b", 50),
            cohort_member("c", 30),
        ],
    );

    let service = LeaderboardService::new(repo.clone());
    let view = service.load_leaderboard("b").await.expect("view");

    let ids: Vec<&str> = view
        .entries
        .iter()
        .map(|entry| entry.user_id.as_str())
        .collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
    assert_eq!(view.entries[1].rank, 2);
    assert!(view.entries[1].is_self);
    assert_eq!(view.self_rank, Some(2));
}

#[tokio::test]
async fn empty_cohort_yields_an_empty_board() {
    let repo = Arc::new(MemoryRepository::new());
    repo.insert_user(support::user("solo", "Sol", Role::Student, 10));

    let service = LeaderboardService::new(repo.clone());
    let view = service.load_leaderboard("solo").await.expect("view");

    assert!(view.entries.is_empty());
    assert_eq!(view.self_rank, None);
    assert_eq!(view.cohort_size, 0);
}

#[tokio::test]
async fn viewer_without_grade_is_rejected() {
    let repo = Arc::new(MemoryRepository::new());
    let mut user = support::user("nograde", "Nat", Role::Student, 10);
    user.grade = None;
    repo.insert_user(user);

    let service = LeaderboardService::new(repo.clone());
    let err = service
        .load_leaderboard("nograde")
        .await
        .expect_err("missing grade must be rejected");
    assert!(err.is_invalid_input());
}
