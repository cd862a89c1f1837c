//! Manager's task board: every team member's tasks plus the assign form.

use chrono::NaiveDate;
use entity::{Employee, NewTask, Task};
use futures::future::try_join_all;
use hr_client::HrClient;
use platform_api::{ApiError, ApiResult};

use crate::view::ViewState;

const LOAD_FAILED: &str = "Failed to fetch data. Please check the API server.";
const ASSIGN_FAILED: &str = "Failed to assign task.";
const DELETE_FAILED: &str = "Failed to delete task.";

#[derive(Clone, Debug, PartialEq)]
pub struct AssignedTask {
    pub task: Task,
    pub employee_id: i64,
    pub employee_name: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub due_date: NaiveDate,
    pub employee_id: Option<i64>,
}

impl TaskForm {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            due_date: today,
            employee_id: None,
        }
    }

    /// Required-field check, then the request body for the chosen employee.
    pub fn validate(&self) -> ApiResult<(i64, NewTask)> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ApiError::invalid("Task title is required."));
        }
        let description = self.description.trim();
        if description.is_empty() {
            return Err(ApiError::invalid("Task description is required."));
        }
        let employee_id = self
            .employee_id
            .ok_or_else(|| ApiError::invalid("Please select an employee."))?;
        Ok((
            employee_id,
            NewTask {
                title: title.to_string(),
                description: description.to_string(),
                due_date: self.due_date,
            },
        ))
    }
}

#[derive(Clone, Debug)]
pub struct ManagerTaskAssignment {
    manager_id: i64,
    today: NaiveDate,
    pub employees: Vec<Employee>,
    pub tasks: Vec<AssignedTask>,
    pub form: TaskForm,
    pub state: ViewState,
}

impl ManagerTaskAssignment {
    pub fn new(manager_id: i64, today: NaiveDate) -> Self {
        Self {
            manager_id,
            today,
            employees: Vec::new(),
            tasks: Vec::new(),
            form: TaskForm::new(today),
            state: ViewState::default(),
        }
    }

    pub async fn load(&mut self, client: &HrClient) {
        self.state.begin();
        match fetch(client, self.manager_id).await {
            Ok((employees, tasks)) => {
                self.employees = employees;
                self.tasks = tasks;
            }
            Err(err) => self.state.fail(&err, LOAD_FAILED),
        }
        self.state.finish();
    }

    pub fn tasks_of(&self, employee_id: i64) -> impl Iterator<Item = &AssignedTask> {
        self.tasks.iter().filter(move |t| t.employee_id == employee_id)
    }

    pub async fn assign(&mut self, client: &HrClient) {
        self.state.clear_messages();
        let (employee_id, task) = match self.form.validate() {
            Ok(parts) => parts,
            Err(err) => {
                self.state.fail(&err, ASSIGN_FAILED);
                return;
            }
        };
        if !self.employees.iter().any(|e| e.id == employee_id) {
            let err = ApiError::invalid(format!("Employee #{employee_id} is not in your team."));
            self.state.fail(&err, ASSIGN_FAILED);
            return;
        }
        match client.assign_task(employee_id, &task).await {
            Ok(_) => {
                self.load(client).await;
                self.form = TaskForm::new(self.today);
                self.state.succeed("Task assigned successfully!");
            }
            Err(err) => self.state.fail(&err, ASSIGN_FAILED),
        }
    }

    /// Delete after the caller has confirmed with the user.
    pub async fn delete(&mut self, client: &HrClient, task_id: i64) {
        self.state.clear_messages();
        match client.delete_task(task_id).await {
            Ok(()) => {
                self.load(client).await;
                self.state.succeed("Task deleted successfully!");
            }
            Err(err) => self.state.fail(&err, DELETE_FAILED),
        }
    }
}

/// Team first, then each member's tasks concurrently, kept in team order.
async fn fetch(client: &HrClient, manager_id: i64) -> ApiResult<(Vec<Employee>, Vec<AssignedTask>)> {
    let employees = client.employees_by_manager(manager_id).await?;
    let per_member = try_join_all(employees.iter().map(|employee| async move {
        let tasks = client.tasks_for(employee.id).await?;
        Ok::<_, ApiError>(
            tasks
                .into_iter()
                .map(|task| AssignedTask {
                    task,
                    employee_id: employee.id,
                    employee_name: employee.name.clone(),
                })
                .collect::<Vec<_>>(),
        )
    }))
    .await?;
    Ok((employees, per_member.into_iter().flatten().collect()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()
    }

    #[test]
    fn blank_form_is_refused() {
        let form = TaskForm::new(today());
        let err = form.validate().unwrap_err();
        assert_eq!(err.user_message(ASSIGN_FAILED), "Task title is required.");
    }

    #[test]
    fn employee_must_be_chosen() {
        let form = TaskForm {
            title: "Audit".into(),
            description: "Check ledgers".into(),
            ..TaskForm::new(today())
        };
        let err = form.validate().unwrap_err();
        assert_eq!(err.server_message(), Some("Please select an employee."));
    }

    #[test]
    fn valid_form_trims_fields_and_defaults_due_date() {
        let form = TaskForm {
            title: "  Audit ".into(),
            description: "Check ledgers".into(),
            employee_id: Some(4),
            ..TaskForm::new(today())
        };
        let (employee_id, task) = form.validate().unwrap();
        assert_eq!(employee_id, 4);
        assert_eq!(task.title, "Audit");
        assert_eq!(task.due_date, today());
    }
}
