//! One handler per CLI command: open the screen, act, render, report.

use std::io::{self, BufRead, Write};

use anyhow::{Result, anyhow, bail};
use chrono::{Local, NaiveDate};
use entity::{AttendanceStatus, NewEmployee, NewManager, TaskAction};
use hr_client::HrClient;
use platform_authz::{Screen, home_screen};
use platform_session::SessionStore;
use portal::{
    AnnouncementBoard, BackendHealth, EmployeeDashboard, EmployeeManagement, EmployeeTaskView,
    ManagerAttendance, ManagerTaskAssignment, ProfilePage, Shell, ShellError, ViewState,
};
use tracing::debug;

use crate::{config::AppConfig, render};

pub struct Portal {
    client: HrClient,
    store: SessionStore,
    today: NaiveDate,
}

/// Report the screen's outcome: success banner on stdout, error as the
/// command's failure. A failed reload after a successful action is only a
/// warning; the action itself went through.
fn settle(state: &ViewState) -> Result<()> {
    render::success(state);
    match &state.error {
        Some(error) if state.refresh_failed() => {
            render::stale(error);
            Ok(())
        }
        Some(error) => Err(anyhow!("{error}")),
        None => Ok(()),
    }
}

fn confirm(prompt: &str, assume_yes: bool) -> Result<bool> {
    if assume_yes {
        return Ok(true);
    }
    print!("{prompt} [y/N] ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

impl Portal {
    pub fn open(config: &AppConfig) -> Result<Self> {
        let client = HrClient::new(config.client_config())
            .map_err(|err| anyhow!(err.user_message("invalid API configuration")))?;
        let store = SessionStore::open(&config.session_file)?;
        debug!(api = client.base_url(), session = %store.path().display(), "portal opened");
        Ok(Self {
            client,
            store,
            today: Local::now().date_naive(),
        })
    }

    fn enter(&self, screen: Screen) -> Result<Shell> {
        let shell = Shell::enter(&self.store, screen).map_err(|err| match err {
            ShellError::LoginRequired => anyhow!("no active session; run `hr-portal login` first"),
            other => anyhow!(other),
        })?;
        render::header(&shell, self.today);
        Ok(shell)
    }

    pub async fn login(&mut self, email: &str, password: &str) -> Result<()> {
        let identity = self
            .client
            .login(email, password)
            .await
            .map_err(|err| anyhow!(err.user_message("Login failed. Please check the API server.")))?;
        self.store.record_login(&identity)?;
        let home = home_screen(identity.role);
        println!(
            "Welcome, {} ({}). Home screen: {}",
            identity.name,
            identity.role.title(),
            home.title()
        );
        Ok(())
    }

    pub fn logout(&mut self) -> Result<()> {
        portal::logout(&mut self.store)?;
        println!("Logged out.");
        Ok(())
    }

    pub fn whoami(&self) -> Result<()> {
        let session = self
            .store
            .session()
            .ok_or_else(|| anyhow!("not logged in"))?;
        let shell = self.enter(home_screen(session.role))?;
        render::sidebar(&shell);
        Ok(())
    }

    pub async fn ping(&self) -> Result<()> {
        let health = BackendHealth::check(&self.client).await;
        if !health.reachable {
            bail!("{}", health.message);
        }
        render::health(&health);
        Ok(())
    }

    pub async fn dashboard(&self) -> Result<()> {
        let shell = self.enter(Screen::EmployeeDashboard)?;
        let mut view = EmployeeDashboard::new(shell.portal_id(), self.today);
        view.load(&self.client).await;
        render::dashboard(&view);
        settle(&view.state)
    }

    pub async fn tasks(&self, action: Option<(i64, TaskAction)>) -> Result<()> {
        let shell = self.enter(Screen::EmployeeTasks)?;
        let mut view = EmployeeTaskView::new(shell.portal_id());
        view.load(&self.client).await;
        if let Some((task_id, action)) = action {
            if !view.state.has_error() {
                view.apply(&self.client, task_id, action).await;
            }
        }
        render::employee_tasks(&view);
        settle(&view.state)
    }

    pub async fn attendance(
        &self,
        date: Option<NaiveDate>,
        mark: Option<(i64, AttendanceStatus)>,
    ) -> Result<()> {
        let shell = self.enter(Screen::ManagerAttendance)?;
        let mut view = ManagerAttendance::new(shell.portal_id(), date.unwrap_or(self.today));
        view.load(&self.client).await;
        if let Some((employee_id, status)) = mark {
            if !view.state.has_error() {
                view.mark(&self.client, employee_id, status).await;
            }
        }
        render::team_attendance(&view);
        settle(&view.state)
    }

    async fn open_board(&self) -> Result<ManagerTaskAssignment> {
        let shell = self.enter(Screen::ManagerTasks)?;
        let mut view = ManagerTaskAssignment::new(shell.portal_id(), self.today);
        view.load(&self.client).await;
        Ok(view)
    }

    pub async fn task_board(&self) -> Result<()> {
        let view = self.open_board().await?;
        render::task_board(&view);
        settle(&view.state)
    }

    pub async fn assign_task(
        &self,
        employee_id: i64,
        title: String,
        description: String,
        due: Option<NaiveDate>,
    ) -> Result<()> {
        let mut view = self.open_board().await?;
        if !view.state.has_error() {
            view.form.employee_id = Some(employee_id);
            view.form.title = title;
            view.form.description = description;
            if let Some(due) = due {
                view.form.due_date = due;
            }
            view.assign(&self.client).await;
        }
        render::task_board(&view);
        settle(&view.state)
    }

    pub async fn delete_task(&self, task_id: i64, assume_yes: bool) -> Result<()> {
        let mut view = self.open_board().await?;
        settle(&view.state)?;
        if !view.tasks.iter().any(|t| t.task.id == task_id) {
            bail!("Task #{task_id} is not assigned to your team.");
        }
        if !confirm("Are you sure you want to delete this task?", assume_yes)? {
            println!("Cancelled.");
            return Ok(());
        }
        view.delete(&self.client, task_id).await;
        render::task_board(&view);
        settle(&view.state)
    }

    pub async fn profile(&mut self, name: Option<String>, password: Option<String>) -> Result<()> {
        let shell = self.enter(Screen::Profile)?;
        let mut view = ProfilePage::new(shell.portal_id(), shell.session().role);
        view.load(&self.client).await;
        if name.is_some() || password.is_some() {
            settle(&view.state)?;
            if let Some(name) = name {
                view.form.name = name;
            }
            if let Some(password) = password {
                view.form.password = password;
            }
            view.save(&self.client, &mut self.store).await;
        }
        render::profile(&view);
        settle(&view.state)
    }

    async fn open_management(&self) -> Result<EmployeeManagement> {
        self.enter(Screen::EmployeeManagement)?;
        let mut view = EmployeeManagement::new();
        view.load(&self.client).await;
        Ok(view)
    }

    pub async fn employees(&self) -> Result<()> {
        let view = self.open_management().await?;
        render::employee_management(&view);
        let pending = view.pending().count();
        if pending > 0 {
            println!("\n{pending} account(s) awaiting approval.");
        }
        settle(&view.state)
    }

    pub async fn deactivate(&self, employee_id: i64, assume_yes: bool) -> Result<()> {
        let mut view = self.open_management().await?;
        settle(&view.state)?;
        let Some(employee) = view.find_employee(employee_id) else {
            bail!("Employee #{employee_id} not found.");
        };
        let prompt = format!(
            "Are you sure you want to deactivate {}? They will no longer be able to log in.",
            employee.name
        );
        if !confirm(&prompt, assume_yes)? {
            println!("Cancelled.");
            return Ok(());
        }
        view.deactivate(&self.client, employee_id).await;
        render::employee_management(&view);
        settle(&view.state)
    }

    pub async fn approve(&self, employee_id: i64) -> Result<()> {
        let mut view = self.open_management().await?;
        settle(&view.state)?;
        if view.find_employee(employee_id).is_none() {
            bail!("Employee #{employee_id} not found.");
        }
        view.approve(&self.client, employee_id).await;
        render::employee_management(&view);
        settle(&view.state)
    }

    pub async fn add_employee(
        &self,
        manager_id: i64,
        name: String,
        email: String,
        password: String,
    ) -> Result<()> {
        let mut view = self.open_management().await?;
        let employee = NewEmployee {
            name,
            email,
            password,
            status: None,
        };
        view.add_employee(&self.client, manager_id, employee).await;
        render::employee_management(&view);
        settle(&view.state)
    }

    pub async fn add_manager(
        &self,
        name: String,
        email: String,
        password: String,
        org: Option<String>,
    ) -> Result<()> {
        let mut view = self.open_management().await?;
        let manager = NewManager {
            name,
            email,
            password,
            org,
        };
        view.add_manager(&self.client, manager).await;
        render::employee_management(&view);
        settle(&view.state)
    }

    pub async fn announcements(&self) -> Result<()> {
        self.enter(Screen::Announcements)?;
        let mut view = AnnouncementBoard::new();
        view.load(&self.client).await;
        render::announcement_board(&view);
        settle(&view.state)
    }

    pub async fn publish_announcement(&self, title: String, content: String) -> Result<()> {
        self.enter(Screen::AnnouncementManagement)?;
        let mut view = AnnouncementBoard::new();
        view.form.title = title;
        view.form.content = content;
        view.publish(&self.client).await;
        render::announcement_board(&view);
        settle(&view.state)
    }
}
