use std::sync::Arc;

use peerly_core::models::profile::ProfileFieldsUpdate;
use peerly_core::services::profile_service::ProfileService;

mod support;

use support::MemoryRepository;

#[tokio::test]
async fn update_persists_trimmed_fields() {
    let repo = Arc::new(MemoryRepository::new());

    let service = ProfileService::new(repo.clone());
    service
        .update_profile(
            "s-1",
            ProfileFieldsUpdate {
                display_name: Some("  Maya Chen ".to_string()),
                grade: Some(" 8 ".to_string()),
                avatar_ref: Some("avatars/s-1.png".to_string()),
                child_email: None,
            },
        )
        .await
        .expect("update");

    let writes = repo.profile_writes.lock().expect("profile writes lock");
    assert_eq!(writes.len(), 1);

    let (user_id, fields) = &writes[0];
    assert_eq!(user_id, "s-1");
    assert_eq!(fields.display_name.as_deref(), Some("Maya Chen"));
    assert_eq!(fields.grade.as_deref(), Some("8"));
    assert_eq!(fields.avatar_ref.as_deref(), Some("avatars/s-1.png"));
}

#[tokio::test]
async fn invalid_updates_never_reach_the_repository() {
    let repo = Arc::new(MemoryRepository::new());
    let service = ProfileService::new(repo.clone());

    let invalid = [
        ProfileFieldsUpdate::default(),
        ProfileFieldsUpdate {
            display_name: Some("   ".to_string()),
            ..Default::default()
        },
        ProfileFieldsUpdate {
            child_email: Some("not-an-email".to_string()),
            ..Default::default()
        },
    ];

    for update in invalid {
        let err = service
            .update_profile("s-1", update)
            .await
            .expect_err("invalid update must be rejected");
        assert!(err.is_invalid_input());
    }

    assert!(repo
        .profile_writes
        .lock()
        .expect("profile writes lock")
        .is_empty());
}
