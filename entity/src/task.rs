use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{ParseEnumError, normalize_token};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

/// Buttons offered next to a task on the employee's task list.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TaskAction {
    Complete,
    Start,
}

impl TaskAction {
    pub fn target(self) -> TaskStatus {
        match self {
            TaskAction::Complete => TaskStatus::Completed,
            TaskAction::Start => TaskStatus::InProgress,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TaskAction::Complete => "Complete",
            TaskAction::Start => "Start",
        }
    }
}

impl TaskStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::NotStarted => "NOT_STARTED",
            TaskStatus::InProgress => "IN_PROGRESS",
            TaskStatus::Completed => "COMPLETED",
        }
    }

    pub fn actions(self) -> &'static [TaskAction] {
        match self {
            TaskStatus::NotStarted => &[TaskAction::Complete, TaskAction::Start],
            TaskStatus::InProgress => &[TaskAction::Complete],
            TaskStatus::Completed => &[],
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "NOT_STARTED" => Ok(TaskStatus::NotStarted),
            "IN_PROGRESS" => Ok(TaskStatus::InProgress),
            "COMPLETED" => Ok(TaskStatus::Completed),
            _ => Err(ParseEnumError::new("task status", s)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body of `POST /api/tasks/create/{employeeId}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub due_date: NaiveDate,
}
