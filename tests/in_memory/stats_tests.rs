//! Statistics flows over the in-memory adapter.

use super::helpers::{Services, days_from_now, services};
use eisenhower::task::services::CreateTaskRequest;
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn quadrant_stats_track_the_full_matrix(services: Services) {
    let requests = [
        CreateTaskRequest::new("Q1 task", true).with_deadline(days_from_now(-1)),
        CreateTaskRequest::new("Q2 task", true).with_deadline(days_from_now(14)),
        CreateTaskRequest::new("Q3 task", false).with_deadline(days_from_now(0)),
        CreateTaskRequest::new("Q4 task", false),
    ];
    for request in requests {
        services
            .lifecycle
            .create(request, None)
            .await
            .expect("creation should succeed");
    }

    let stats = services
        .stats
        .quadrant_stats(None)
        .await
        .expect("stats should succeed");

    assert_eq!(stats.total_tasks, 4);
    assert_eq!(stats.by_quadrant.q1, 1);
    assert_eq!(stats.by_quadrant.q2, 1);
    assert_eq!(stats.by_quadrant.q3, 1);
    assert_eq!(stats.by_quadrant.q4, 1);
    assert_eq!(stats.by_status.pending, 4);
    assert_eq!(stats.by_status.completed, 0);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn timing_stats_follow_completion_against_deadlines(services: Services) {
    let early = services
        .lifecycle
        .create(
            CreateTaskRequest::new("Done ahead of plan", true).with_deadline(days_from_now(7)),
            None,
        )
        .await
        .expect("creation should succeed");
    services
        .lifecycle
        .complete(early.id, None)
        .await
        .expect("completion should succeed");

    services
        .lifecycle
        .create(
            CreateTaskRequest::new("Slipping already", false).with_deadline(days_from_now(-2)),
            None,
        )
        .await
        .expect("creation should succeed");

    let stats = services
        .stats
        .timing_stats(None)
        .await
        .expect("stats should succeed");

    assert_eq!(stats.completed_on_time, 1);
    assert_eq!(stats.completed_late, 0);
    assert_eq!(stats.on_plan_pending, 0);
    assert_eq!(stats.overtime_pending, 1);
}
