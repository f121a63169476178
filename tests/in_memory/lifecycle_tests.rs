//! End-to-end lifecycle flows over the in-memory adapter.

use super::helpers::{Services, days_from_now, services};
use eisenhower::task::{
    domain::{PatchField, Quadrant, TaskDomainError, TaskPatch},
    services::{CreateTaskRequest, TaskServiceError},
};
use rstest::rstest;

/// Asserts a service result carries the expected quadrant and urgency.
///
/// # Errors
///
/// Returns an error when either derived field differs.
fn assert_classification(
    view: &eisenhower::task::services::TaskView,
    quadrant: Quadrant,
    urgent: bool,
) -> Result<(), eyre::Report> {
    eyre::ensure!(
        view.quadrant == quadrant,
        "expected {quadrant}, got {}",
        view.quadrant
    );
    eyre::ensure!(view.is_urgent == urgent, "urgency mismatch");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn important_task_due_yesterday_lands_in_q1(services: Services) {
    let created = services
        .lifecycle
        .create(
            CreateTaskRequest::new("Hand in the project", true).with_deadline(days_from_now(-1)),
            None,
        )
        .await
        .expect("creation should succeed");

    assert_classification(&created, Quadrant::Q1, true).expect("classification should match");
    assert_eq!(created.status_message.as_deref(), Some("overdue"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unimportant_task_without_deadline_lands_in_q4(services: Services) {
    let created = services
        .lifecycle
        .create(CreateTaskRequest::new("Watch the new season", false), None)
        .await
        .expect("creation should succeed");

    assert_classification(&created, Quadrant::Q4, false).expect("classification should match");
    assert_eq!(created.days_until_deadline, None);
    assert_eq!(created.status_message, None);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn full_update_complete_delete_round_trip(services: Services) {
    let created = services
        .lifecycle
        .create(
            CreateTaskRequest::new("Study SQLAlchemy", false)
                .with_description("Read the documentation"),
            None,
        )
        .await
        .expect("creation should succeed");
    assert_classification(&created, Quadrant::Q4, false).expect("classification should match");

    // Promote to important with a deadline three days out: urgency stays
    // false, quadrant becomes Q2.
    let patch = TaskPatch {
        is_important: Some(true),
        deadline_at: PatchField::Set(days_from_now(3)),
        ..TaskPatch::default()
    };
    let updated = services
        .lifecycle
        .update(created.id, patch, None)
        .await
        .expect("update should succeed");
    assert_classification(&updated, Quadrant::Q2, false).expect("classification should match");
    assert_eq!(updated.days_until_deadline, Some(3));
    assert_eq!(updated.description.as_deref(), Some("Read the documentation"));

    let completed = services
        .lifecycle
        .complete(updated.id, None)
        .await
        .expect("completion should succeed");
    assert!(completed.completed);
    assert!(completed.completed_at.is_some());
    // Completion does not reclassify.
    assert_eq!(completed.quadrant, Quadrant::Q2);

    services
        .lifecycle
        .delete(completed.id, None)
        .await
        .expect("deletion should succeed");
    let missing = services.lifecycle.get(created.id, None).await;
    assert!(matches!(missing, Err(TaskServiceError::NotFound(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_returns_tasks_in_creation_order(services: Services) {
    for title in ["first", "second", "third"] {
        services
            .lifecycle
            .create(CreateTaskRequest::new(title, false), None)
            .await
            .expect("creation should succeed");
    }

    let listed = services
        .lifecycle
        .list(None)
        .await
        .expect("listing should succeed");
    let titles: Vec<&str> = listed.iter().map(|view| view.title.as_str()).collect();
    assert_eq!(titles, vec!["first", "second", "third"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn search_spans_titles_and_descriptions(services: Services) {
    services
        .lifecycle
        .create(
            CreateTaskRequest::new("Attend the lecture", false)
                .with_description("Bring the printed handouts"),
            None,
        )
        .await
        .expect("creation should succeed");
    services
        .lifecycle
        .create(CreateTaskRequest::new("Grocery run", false), None)
        .await
        .expect("creation should succeed");

    let hits = services
        .lifecycle
        .search("handout", None)
        .await
        .expect("search should succeed");
    assert_eq!(hits.len(), 1);
    assert_eq!(
        hits.first().map(|view| view.title.as_str()),
        Some("Attend the lecture")
    );

    let too_short = services.lifecycle.search("h", None).await;
    assert!(matches!(
        too_short,
        Err(TaskServiceError::Domain(
            TaskDomainError::SearchQueryTooShort { .. }
        ))
    ));
}
