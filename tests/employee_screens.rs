use entity::{LeaveStatus, TaskAction, TaskStatus};
use portal::{AnnouncementBoard, BackendHealth, EmployeeDashboard, EmployeeTaskView};
use portal_tests::{MockBackend, today};

#[tokio::test]
async fn dashboard_combines_leaves_attendance_team_and_announcements() {
    let mock = MockBackend::seeded().await;
    let client = mock.client();

    let mut view = EmployeeDashboard::new(1, today());
    view.load(&client).await;

    assert!(!view.state.loading);
    assert_eq!(view.state.error, None);
    let data = &view.data;
    assert_eq!(data.pending_leaves, 3);
    let recent: Vec<i64> = data.recent_leaves.iter().map(|l| l.id).collect();
    assert_eq!(recent, vec![70, 72]);
    assert!(data.recent_leaves.iter().all(|l| l.status == LeaveStatus::Pending));
    // April's mark is outside the requested month.
    assert_eq!(data.attendance.present, 2);
    assert_eq!(data.attendance.absent, 1);
    assert_eq!(data.attendance.total_marked, 3);
    assert!((data.attendance.percentage - 200.0 / 3.0).abs() < 1e-9);
    assert_eq!(data.team_members, 2);
    assert_eq!(data.announcements.len(), 1);

    let stats = view.quick_stats();
    assert_eq!(stats[0].value, "3");
    assert_eq!(stats[1].value, "2/3");
    assert_eq!(stats[3].value, "2");

    let requests = mock.requests();
    assert!(requests.contains(&"GET /api/attendance/employee/1/month".to_string()));
    assert!(requests.contains(&"GET /api/employees/byManager/10".to_string()));
}

#[tokio::test]
async fn dashboard_failure_resets_data_and_stops_loading() {
    let mock = MockBackend::seeded().await;
    mock.fail("/api/leave-requests");
    let client = mock.client();

    let mut view = EmployeeDashboard::new(1, today());
    view.load(&client).await;

    assert!(!view.state.loading);
    assert_eq!(
        view.state.error.as_deref(),
        Some("Failed to fetch dashboard data. Please check the network and API server.")
    );
    assert_eq!(view.data.pending_leaves, 0);
    assert!(view.data.announcements.is_empty());
}

#[tokio::test]
async fn null_list_bodies_render_as_empty() {
    let mock = MockBackend::seeded().await;
    mock.backend().null_lists = true;
    let client = mock.client();

    let mut dashboard = EmployeeDashboard::new(1, today());
    dashboard.load(&client).await;
    assert_eq!(dashboard.state.error, None);
    assert_eq!(dashboard.data.pending_leaves, 0);
    assert_eq!(dashboard.data.attendance.total_marked, 0);
    assert_eq!(dashboard.data.attendance.percentage, 0.0);
    assert_eq!(dashboard.data.team_members, 0);

    let mut tasks = EmployeeTaskView::new(1);
    tasks.load(&client).await;
    assert_eq!(tasks.state.error, None);
    assert!(tasks.tasks.is_empty());
}

#[tokio::test]
async fn starting_a_task_updates_status_and_refetches() {
    let mock = MockBackend::seeded().await;
    let client = mock.client();

    let mut view = EmployeeTaskView::new(1);
    view.load(&client).await;
    assert_eq!(view.tasks.len(), 2);
    mock.clear_requests();

    view.apply(&client, 50, TaskAction::Start).await;

    assert_eq!(
        view.state.success.as_deref(),
        Some("Task status updated to IN_PROGRESS.")
    );
    assert_eq!(view.task(50).map(|t| t.status), Some(TaskStatus::InProgress));
    assert_eq!(
        mock.requests(),
        vec!["PUT /api/tasks/50/status", "GET /api/tasks/employee/1"]
    );
}

#[tokio::test]
async fn task_list_failure_stops_loading() {
    let mock = MockBackend::seeded().await;
    mock.fail("/api/tasks/employee");
    let mut view = EmployeeTaskView::new(1);
    view.load(&mock.client()).await;

    assert!(!view.state.loading);
    assert!(view.tasks.is_empty());
    assert_eq!(
        view.state.error.as_deref(),
        Some("Failed to fetch tasks. Please check the API server.")
    );
}

#[tokio::test]
async fn completed_tasks_offer_no_transition() {
    let mock = MockBackend::seeded().await;
    let client = mock.client();

    let mut view = EmployeeTaskView::new(2);
    view.load(&client).await;
    mock.clear_requests();

    view.apply(&client, 52, TaskAction::Start).await;

    assert!(view.state.has_error());
    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn failed_status_update_shows_fallback() {
    let mock = MockBackend::seeded().await;
    let client = mock.client();

    let mut view = EmployeeTaskView::new(1);
    view.load(&client).await;
    mock.fail("/api/tasks/51");

    view.apply(&client, 51, TaskAction::Complete).await;

    assert_eq!(view.state.error.as_deref(), Some("Failed to update task status."));
    assert_eq!(view.state.success, None);
}

#[tokio::test]
async fn announcements_list_for_everyone() {
    let mock = MockBackend::seeded().await;
    let mut board = AnnouncementBoard::new();
    board.load(&mock.client()).await;

    assert!(!board.state.loading);
    assert_eq!(board.announcements.len(), 1);
    assert_eq!(board.announcements[0].title, "Office closed");
}

#[tokio::test]
async fn backend_health_reports_reply_or_fixed_error() {
    let mock = MockBackend::seeded().await;
    let up = BackendHealth::check(&mock.client()).await;
    assert!(up.reachable);
    assert_eq!(up.message, "Backend is running");

    mock.fail("/api/employees/docker");
    let down = BackendHealth::check(&mock.client()).await;
    assert!(!down.reachable);
    assert_eq!(down.message, "Error fetching backend!");
}
