//! Ownership gating and role-based listing over the in-memory adapter.

use super::helpers::{Services, services};
use eisenhower::task::{
    domain::{Caller, CallerRole, OwnerId, TaskPatch},
    services::{CreateTaskRequest, TaskServiceError},
};
use rstest::rstest;

fn user() -> Caller {
    Caller::new(OwnerId::new(), CallerRole::User)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn users_see_their_own_and_unowned_tasks_only(services: Services) {
    let alice = user();
    let bob = user();

    services
        .lifecycle
        .create(CreateTaskRequest::new("Alice's errand", false), Some(&alice))
        .await
        .expect("creation should succeed");
    services
        .lifecycle
        .create(CreateTaskRequest::new("Bob's errand", false), Some(&bob))
        .await
        .expect("creation should succeed");
    services
        .lifecycle
        .create(CreateTaskRequest::new("Team chore", false), None)
        .await
        .expect("creation should succeed");

    let for_alice = services
        .lifecycle
        .list(Some(&alice))
        .await
        .expect("listing should succeed");
    let titles: Vec<&str> = for_alice.iter().map(|view| view.title.as_str()).collect();
    assert_eq!(titles, vec!["Alice's errand", "Team chore"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn admins_see_every_task(services: Services) {
    let alice = user();
    let admin = Caller::new(OwnerId::new(), CallerRole::Admin);

    services
        .lifecycle
        .create(CreateTaskRequest::new("Alice's errand", false), Some(&alice))
        .await
        .expect("creation should succeed");
    services
        .lifecycle
        .create(CreateTaskRequest::new("Unowned chore", false), None)
        .await
        .expect("creation should succeed");

    let listed = services
        .lifecycle
        .list(Some(&admin))
        .await
        .expect("listing should succeed");
    assert_eq!(listed.len(), 2);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn mutating_someone_elses_task_is_forbidden(services: Services) {
    let alice = user();
    let bob = user();

    let created = services
        .lifecycle
        .create(CreateTaskRequest::new("Alice's draft", true), Some(&alice))
        .await
        .expect("creation should succeed");

    let update = services
        .lifecycle
        .update(
            created.id,
            TaskPatch {
                is_important: Some(false),
                ..TaskPatch::default()
            },
            Some(&bob),
        )
        .await;
    assert!(matches!(update, Err(TaskServiceError::Forbidden(_))));

    let complete = services.lifecycle.complete(created.id, Some(&bob)).await;
    assert!(matches!(complete, Err(TaskServiceError::Forbidden(_))));

    let delete = services.lifecycle.delete(created.id, Some(&bob)).await;
    assert!(matches!(delete, Err(TaskServiceError::Forbidden(_))));

    // The owner can still see the task untouched.
    let fetched = services
        .lifecycle
        .get(created.id, Some(&alice))
        .await
        .expect("owner lookup should succeed");
    assert!(fetched.is_important);
    assert!(!fetched.completed);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn without_caller_identity_ownership_checks_are_skipped(services: Services) {
    let alice = user();

    let created = services
        .lifecycle
        .create(CreateTaskRequest::new("Owned task", false), Some(&alice))
        .await
        .expect("creation should succeed");

    // Single-user deployments pass no caller and bypass gating entirely.
    let fetched = services
        .lifecycle
        .get(created.id, None)
        .await
        .expect("lookup should succeed");
    assert_eq!(fetched.id, created.id);
}
