use entity::{AccountStatus, NewEmployee, NewManager};
use portal::{AnnouncementBoard, EmployeeManagement};
use portal_tests::MockBackend;

#[tokio::test]
async fn every_manager_comes_with_their_employees() {
    let mock = MockBackend::seeded().await;
    let mut view = EmployeeManagement::new();
    view.load(&mock.client()).await;

    assert!(!view.state.loading);
    let teams: Vec<(&str, usize)> = view
        .teams
        .iter()
        .map(|t| (t.manager.name.as_str(), t.employees.len()))
        .collect();
    assert_eq!(teams, vec![("Priya Shah", 2), ("Rahul Rao", 1)]);
    let pending: Vec<i64> = view.pending().map(|e| e.id).collect();
    assert_eq!(pending, vec![3]);
}

#[tokio::test]
async fn deactivating_shows_the_server_reply_and_refetches() {
    let mock = MockBackend::seeded().await;
    let client = mock.client();
    let mut view = EmployeeManagement::new();
    view.load(&client).await;
    mock.clear_requests();

    view.deactivate(&client, 2).await;

    assert_eq!(
        view.state.success.as_deref(),
        Some("Employee status updated to DEACTIVATED")
    );
    assert_eq!(
        view.find_employee(2).and_then(|e| e.status),
        Some(AccountStatus::Deactivated)
    );
    let requests = mock.requests();
    assert_eq!(requests[0], "POST /superadmin/updateEmployeeStatus/2");
    assert_eq!(requests[1], "GET /manager/allManagers");
}

#[tokio::test]
async fn approving_a_pending_account_accepts_it() {
    let mock = MockBackend::seeded().await;
    let client = mock.client();
    let mut view = EmployeeManagement::new();
    view.load(&client).await;

    view.approve(&client, 3).await;

    assert_eq!(view.pending().count(), 0);
    assert_eq!(
        view.find_employee(3).and_then(|e| e.status),
        Some(AccountStatus::Accepted)
    );
}

#[tokio::test]
async fn status_change_for_unknown_employee_fails() {
    let mock = MockBackend::seeded().await;
    let client = mock.client();
    let mut view = EmployeeManagement::new();
    view.load(&client).await;

    view.deactivate(&client, 404).await;

    assert_eq!(view.state.error.as_deref(), Some("Employee not found"));
    assert_eq!(view.state.success, None);
}

#[tokio::test]
async fn manager_list_failure_stops_loading() {
    let mock = MockBackend::seeded().await;
    mock.fail("/manager/allManagers");
    let mut view = EmployeeManagement::new();
    view.load(&mock.client()).await;

    assert!(!view.state.loading);
    assert!(view.teams.is_empty());
    assert_eq!(
        view.state.error.as_deref(),
        Some("Failed to fetch data. Please check the API server.")
    );
}

#[tokio::test]
async fn one_managers_team_failure_fails_the_load() {
    let mock = MockBackend::seeded().await;
    mock.fail("/api/employees/byManager/11");
    let mut view = EmployeeManagement::new();
    view.load(&mock.client()).await;

    assert!(!view.state.loading);
    assert!(view.teams.is_empty());
    assert_eq!(
        view.state.error.as_deref(),
        Some("Failed to fetch data. Please check the API server.")
    );
}

#[tokio::test]
async fn deactivation_stands_when_the_reload_fails() {
    let mock = MockBackend::seeded().await;
    let client = mock.client();
    let mut view = EmployeeManagement::new();
    view.load(&client).await;
    mock.fail("/manager/allManagers");

    view.deactivate(&client, 2).await;

    assert_eq!(
        view.state.success.as_deref(),
        Some("Employee status updated to DEACTIVATED")
    );
    assert!(view.state.refresh_failed());
    assert_eq!(
        mock.backend().employees[1].status,
        Some(AccountStatus::Deactivated)
    );
}

#[tokio::test]
async fn announcement_list_failure_stops_loading() {
    let mock = MockBackend::seeded().await;
    mock.fail("/api/announcements");
    let mut board = AnnouncementBoard::new();
    board.load(&mock.client()).await;

    assert!(!board.state.loading);
    assert!(board.announcements.is_empty());
    assert_eq!(
        board.state.error.as_deref(),
        Some("Failed to fetch announcements. Please check the API server.")
    );
}

#[tokio::test]
async fn new_people_appear_after_refetch() {
    let mock = MockBackend::seeded().await;
    let client = mock.client();
    let mut view = EmployeeManagement::new();
    view.load(&client).await;

    view.add_manager(
        &client,
        NewManager {
            name: "Sana Iqbal".into(),
            email: "sana@acme.test".into(),
            password: "pw".into(),
            org: Some("Acme".into()),
        },
    )
    .await;
    assert_eq!(view.state.success.as_deref(), Some("Manager added successfully!"));
    assert_eq!(view.teams.len(), 3);

    view.add_employee(
        &client,
        10,
        NewEmployee {
            name: "Meera".into(),
            email: "meera@acme.test".into(),
            password: "pw".into(),
            status: None,
        },
    )
    .await;
    assert_eq!(
        view.state.success.as_deref(),
        Some("Employee added successfully with PENDING status")
    );
    assert_eq!(view.teams[0].employees.len(), 3);
    assert_eq!(view.pending().count(), 2);
}

#[tokio::test]
async fn blank_required_fields_never_reach_the_api() {
    let mock = MockBackend::seeded().await;
    let client = mock.client();
    let mut view = EmployeeManagement::new();
    view.load(&client).await;
    mock.clear_requests();

    view.add_employee(
        &client,
        10,
        NewEmployee {
            name: "Meera".into(),
            email: " ".into(),
            password: "pw".into(),
            status: None,
        },
    )
    .await;

    assert_eq!(view.state.error.as_deref(), Some("Email is required."));
    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn publishing_clears_the_form_and_lists_the_new_announcement() {
    let mock = MockBackend::seeded().await;
    let client = mock.client();
    let mut board = AnnouncementBoard::new();
    board.form.title = "Holiday".into();
    board.form.content = "Office closed on Monday.".into();

    board.publish(&client).await;

    assert_eq!(
        board.state.success.as_deref(),
        Some("Announcement created successfully")
    );
    assert_eq!(board.form.title, "");
    assert_eq!(board.announcements.len(), 2);
    let backend = mock.backend();
    let (_, body) = &backend.bodies[0];
    assert_eq!(body["title"], "Holiday");
}

#[tokio::test]
async fn publishing_failure_uses_the_generic_message() {
    let mock = MockBackend::seeded().await;
    mock.fail("/api/announcements/create");
    let mut board = AnnouncementBoard::new();
    board.form.title = "Holiday".into();
    board.form.content = "Office closed on Monday.".into();

    board.publish(&mock.client()).await;

    assert_eq!(
        board.state.error.as_deref(),
        Some("An unexpected error occurred.")
    );
    assert_eq!(board.form.title, "Holiday");
}
