use entity::Role;
use platform_api::ApiError;
use platform_authz::Screen;
use platform_session::{SessionKey, SessionStore};
use portal::{ProfilePage, Shell, ShellError, logout};
use portal_tests::MockBackend;

fn store() -> (tempfile::TempDir, SessionStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = SessionStore::open(dir.path().join("session.json")).unwrap();
    (dir, store)
}

#[tokio::test]
async fn login_records_the_session_and_opens_the_home_screen() {
    let mock = MockBackend::seeded().await;
    let (_dir, mut store) = store();

    let identity = mock
        .client()
        .login("priya.shah@acme.test", "secret")
        .await
        .unwrap();
    store.record_login(&identity).unwrap();

    assert_eq!(store.get(SessionKey::Role), Some("MANAGER"));
    assert_eq!(store.get(SessionKey::ManagerId), Some("10"));
    assert_eq!(store.get(SessionKey::EmployeeId), None);
    let shell = Shell::enter(&store, Screen::ManagerAttendance).unwrap();
    assert_eq!(shell.portal_id(), 10);
    assert_eq!(shell.portal_title(), "Manager Portal");
    assert!(matches!(
        Shell::enter(&store, Screen::EmployeeDashboard),
        Err(ShellError::Denied(_))
    ));
}

#[tokio::test]
async fn rejected_login_carries_the_server_text() {
    let mock = MockBackend::seeded().await;

    let err = mock
        .client()
        .login("arjun@acme.test", "wrong")
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Rejected { .. }));
    assert_eq!(err.user_message("Login failed."), "Invalid email or password");
}

#[tokio::test]
async fn logout_clears_every_key() {
    let mock = MockBackend::seeded().await;
    let (_dir, mut store) = store();
    let identity = mock.client().login("arjun@acme.test", "secret").await.unwrap();
    store.record_login(&identity).unwrap();

    logout(&mut store).unwrap();

    assert!(SessionKey::ALL.iter().all(|key| store.get(*key).is_none()));
    assert!(!store.path().exists());
    assert!(matches!(
        Shell::enter(&store, Screen::EmployeeDashboard),
        Err(ShellError::LoginRequired)
    ));
}

#[tokio::test]
async fn saving_the_profile_renames_the_session_user() {
    let mock = MockBackend::seeded().await;
    let client = mock.client();
    let (_dir, mut store) = store();
    let identity = client.login("arjun@acme.test", "secret").await.unwrap();
    store.record_login(&identity).unwrap();

    let mut page = ProfilePage::new(1, Role::Employee);
    page.load(&client).await;
    assert_eq!(page.form.name, "Arjun");
    assert_eq!(page.form.org, "Acme");
    assert_eq!(page.form.password, "");

    page.form.name = "Arjun Mehta".into();
    page.form.password = "new-secret".into();
    page.save(&client, &mut store).await;

    assert_eq!(
        page.state.success.as_deref(),
        Some("Profile updated successfully!")
    );
    assert_eq!(page.form.password, "");
    assert!(!page.saving);
    assert_eq!(store.get(SessionKey::UserName), Some("Arjun Mehta"));
    let reopened = SessionStore::open(store.path()).unwrap();
    assert_eq!(reopened.get(SessionKey::UserName), Some("Arjun Mehta"));
    let backend = mock.backend();
    let (_, body) = backend
        .bodies
        .iter()
        .find(|(path, _)| path == "/api/employees/profile/1")
        .expect("profile body");
    assert_eq!(body["password"], "new-secret");
}

#[tokio::test]
async fn manager_profile_uses_manager_endpoint_and_omits_blank_password() {
    let mock = MockBackend::seeded().await;
    let client = mock.client();
    let (_dir, mut store) = store();

    let mut page = ProfilePage::new(10, Role::Manager);
    page.load(&client).await;
    assert_eq!(page.form.email, "priya.shah@acme.test");

    page.save(&client, &mut store).await;

    assert_eq!(page.state.error, None);
    let backend = mock.backend();
    let (_, body) = backend
        .bodies
        .iter()
        .find(|(path, _)| path == "/manager/profile/10")
        .expect("profile body");
    assert!(body.get("password").is_none());
}

#[tokio::test]
async fn unreachable_profile_reports_fallback() {
    let mock = MockBackend::seeded().await;
    mock.fail("/api/employees/profile");

    let mut page = ProfilePage::new(1, Role::Employee);
    page.load(&mock.client()).await;

    assert!(!page.state.loading);
    assert_eq!(page.state.error.as_deref(), Some("Failed to fetch profile data."));
}

#[tokio::test]
async fn missing_profile_shows_the_server_message() {
    let mock = MockBackend::seeded().await;

    let mut page = ProfilePage::new(404, Role::Employee);
    page.load(&mock.client()).await;

    assert!(!page.state.loading);
    assert_eq!(page.state.error.as_deref(), Some("Employee not found"));
}
