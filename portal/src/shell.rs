//! Navigation chrome shared by the screens of one portal.

use entity::Role;
use platform_authz::{AuthzError, PolicyEngine, Screen};
use platform_session::{Session, SessionError, SessionStore};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("no active session; log in first")]
    LoginRequired,
    #[error(transparent)]
    Denied(#[from] AuthzError),
    #[error(transparent)]
    Session(#[from] SessionError),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub route: &'static str,
    /// `None` for links into screens this client does not render.
    pub screen: Option<Screen>,
    pub active: bool,
}

const fn link(label: &'static str, route: &'static str, screen: Option<Screen>) -> NavItem {
    NavItem {
        label,
        route,
        screen,
        active: false,
    }
}

fn sidebar_for(role: Role) -> Vec<NavItem> {
    match role {
        Role::Employee => vec![
            link("Dashboard", "/employeedashboard", Some(Screen::EmployeeDashboard)),
            link("Leave Management", "/leave", None),
            link("Attendance", "/attendance", None),
            link("Payroll", "/payroll", None),
            link("My Tasks", "/tasks", Some(Screen::EmployeeTasks)),
            link("Profile", "/profile", Some(Screen::Profile)),
            link("Documents", "/documents", None),
        ],
        Role::Manager => vec![
            link("Dashboard", "/managerdashboard", None),
            link("Leave Approvals", "/leave/approvals", None),
            link("Attendance", "/attendance/manage", Some(Screen::ManagerAttendance)),
            link("Task Management", "/manager/tasks", Some(Screen::ManagerTasks)),
            link("Team Management", "/manager/team", None),
            link("Profile", "/profile", Some(Screen::Profile)),
        ],
        Role::SuperAdmin => vec![
            link("Manager Management", "/superadmindashboard", None),
            link(
                "Employee Management",
                "/superadmin/employees",
                Some(Screen::EmployeeManagement),
            ),
            link(
                "Announcements",
                "/superadmin/announcements",
                Some(Screen::AnnouncementManagement),
            ),
        ],
    }
}

/// The sidebar and identity block around a screen.
#[derive(Clone, Debug)]
pub struct Shell {
    session: Session,
    screen: Screen,
    sidebar: Vec<NavItem>,
}

impl Shell {
    /// Open `screen` for whoever is in the session store. A missing session
    /// sends the user back to login; a role mismatch is refused.
    pub fn enter(store: &SessionStore, screen: Screen) -> Result<Self, ShellError> {
        let session = store.session().ok_or(ShellError::LoginRequired)?;
        PolicyEngine.check(session.role, screen)?;
        let portal_id = match session.role {
            Role::Employee => session.employee_id,
            Role::Manager => session.manager_id,
            Role::SuperAdmin => Some(session.id),
        };
        if portal_id.is_none() {
            return Err(ShellError::LoginRequired);
        }
        let sidebar = sidebar_for(session.role)
            .into_iter()
            .map(|mut item| {
                item.active = item.screen == Some(screen);
                item
            })
            .collect();
        Ok(Self {
            session,
            screen,
            sidebar,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn sidebar(&self) -> &[NavItem] {
        &self.sidebar
    }

    pub fn portal_title(&self) -> &'static str {
        match self.session.role {
            Role::Employee => "HR Portal",
            Role::Manager => "Manager Portal",
            Role::SuperAdmin => "Super Admin Portal",
        }
    }

    /// Id under which the API knows the user in their own portal.
    pub fn portal_id(&self) -> i64 {
        match self.session.role {
            Role::Employee => self.session.employee_id.unwrap_or(self.session.id),
            Role::Manager => self.session.manager_id.unwrap_or(self.session.id),
            Role::SuperAdmin => self.session.id,
        }
    }
}

pub fn logout(store: &mut SessionStore) -> Result<(), ShellError> {
    store.clear()?;
    info!("logged out");
    Ok(())
}
