//! Which role may open which screen.

use entity::Role;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("{role} accounts cannot open {screen}")]
    Denied { role: Role, screen: &'static str },
}

/// Every screen the portal can render.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    EmployeeDashboard,
    EmployeeTasks,
    ManagerAttendance,
    ManagerTasks,
    Profile,
    EmployeeManagement,
    AnnouncementManagement,
    Announcements,
    BackendHealth,
}

impl Screen {
    pub fn route(self) -> &'static str {
        match self {
            Screen::EmployeeDashboard => "/employeedashboard",
            Screen::EmployeeTasks => "/tasks",
            Screen::ManagerAttendance => "/attendance/manage",
            Screen::ManagerTasks => "/manager/tasks",
            Screen::Profile => "/profile",
            Screen::EmployeeManagement => "/superadmin/employees",
            Screen::AnnouncementManagement => "/superadmin/announcements",
            Screen::Announcements => "/announcements",
            Screen::BackendHealth => "/health",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Screen::EmployeeDashboard => "Dashboard",
            Screen::EmployeeTasks => "My Tasks",
            Screen::ManagerAttendance => "Attendance",
            Screen::ManagerTasks => "Task Management",
            Screen::Profile => "Profile",
            Screen::EmployeeManagement => "Employee Management",
            Screen::AnnouncementManagement => "Announcements",
            Screen::Announcements => "Company Announcements",
            Screen::BackendHealth => "Backend Status",
        }
    }

    /// Screens reachable without a session.
    pub fn is_public(self) -> bool {
        matches!(self, Screen::BackendHealth)
    }
}

/// Landing screen after login for each role.
pub fn home_screen(role: Role) -> Screen {
    match role {
        Role::Employee => Screen::EmployeeDashboard,
        Role::Manager => Screen::ManagerTasks,
        Role::SuperAdmin => Screen::EmployeeManagement,
    }
}

#[derive(Default, Debug)]
pub struct PolicyEngine;

impl PolicyEngine {
    pub fn allows(&self, role: Role, screen: Screen) -> bool {
        if screen.is_public() || screen == Screen::Announcements {
            return true;
        }
        match role {
            Role::Employee => matches!(
                screen,
                Screen::EmployeeDashboard | Screen::EmployeeTasks | Screen::Profile
            ),
            Role::Manager => matches!(
                screen,
                Screen::ManagerAttendance | Screen::ManagerTasks | Screen::Profile
            ),
            Role::SuperAdmin => matches!(
                screen,
                Screen::EmployeeManagement | Screen::AnnouncementManagement
            ),
        }
    }

    pub fn check(&self, role: Role, screen: Screen) -> Result<(), AuthzError> {
        if self.allows(role, screen) {
            Ok(())
        } else {
            Err(AuthzError::Denied {
                role,
                screen: screen.title(),
            })
        }
    }
}
