//! Records exchanged with the HR API.
//!
//! The API owns these payloads. Only the fields the portal reads are typed;
//! everything else rides along in a flattened `extra` map so a record can be
//! sent back without losing fields.

pub mod announcement;
pub mod attendance;
pub mod identity;
pub mod leave;
pub mod people;
pub mod task;

pub use announcement::{Announcement, NewAnnouncement};
pub use attendance::{AttendanceRecord, AttendanceStatus};
pub use identity::{Identity, LoginResponse, Role};
pub use leave::{LeaveRequest, LeaveStatus};
pub use people::{AccountStatus, Employee, Manager, NewEmployee, NewManager, ProfileUpdate};
pub use task::{NewTask, Task, TaskAction, TaskStatus};

use thiserror::Error;

/// Raised when a status or role string from the command line is not recognised.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown {kind} `{value}`")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseEnumError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Normalise user input such as `in-progress` or `In Progress` to `IN_PROGRESS`.
pub(crate) fn normalize_token(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| match c {
            '-' | ' ' => '_',
            other => other.to_ascii_uppercase(),
        })
        .collect()
}
