//! Screens of the employee, manager and super-admin portals.
//!
//! Each screen owns its data plus a [`ViewState`]. Opening a screen fetches
//! from the API; actions send a mutation and then refetch. Failures never
//! escape a screen: they become the screen's error text.

pub mod admin;
pub mod announcements;
pub mod assignment;
pub mod attendance;
pub mod dashboard;
pub mod health;
pub mod profile;
pub mod shell;
pub mod tasks;
pub mod view;

pub use admin::{EmployeeManagement, ManagerTeam};
pub use announcements::{AnnouncementBoard, AnnouncementForm};
pub use assignment::{AssignedTask, ManagerTaskAssignment, TaskForm};
pub use attendance::{ManagerAttendance, MarkForm, TeamAttendanceRow};
pub use dashboard::{AttendanceSummary, DashboardData, EmployeeDashboard, QuickStat};
pub use health::BackendHealth;
pub use profile::{ProfileForm, ProfilePage};
pub use shell::{NavItem, Shell, ShellError, logout};
pub use tasks::EmployeeTaskView;
pub use view::ViewState;
