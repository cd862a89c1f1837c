//! Employee's own task list.

use entity::{Task, TaskAction, TaskStatus};
use hr_client::HrClient;
use platform_api::ApiError;

use crate::view::ViewState;

const LOAD_FAILED: &str = "Failed to fetch tasks. Please check the API server.";
const UPDATE_FAILED: &str = "Failed to update task status.";

#[derive(Clone, Debug)]
pub struct EmployeeTaskView {
    employee_id: i64,
    pub tasks: Vec<Task>,
    pub state: ViewState,
}

impl EmployeeTaskView {
    pub fn new(employee_id: i64) -> Self {
        Self {
            employee_id,
            tasks: Vec::new(),
            state: ViewState::default(),
        }
    }

    pub async fn load(&mut self, client: &HrClient) {
        self.state.begin();
        match client.tasks_for(self.employee_id).await {
            Ok(tasks) => self.tasks = tasks,
            Err(err) => self.state.fail(&err, LOAD_FAILED),
        }
        self.state.finish();
    }

    pub fn task(&self, task_id: i64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == task_id)
    }

    /// Press one of the buttons shown next to a loaded task.
    pub async fn apply(&mut self, client: &HrClient, task_id: i64, action: TaskAction) {
        let offered = match self.task(task_id) {
            Some(task) => task.status.actions().contains(&action),
            None => {
                let err = ApiError::invalid(format!("Task #{task_id} is not assigned to you."));
                self.state.fail(&err, UPDATE_FAILED);
                return;
            }
        };
        if !offered {
            let err = ApiError::invalid(format!(
                "Task #{task_id} cannot be moved with \"{}\".",
                action.label()
            ));
            self.state.fail(&err, UPDATE_FAILED);
            return;
        }
        self.update_status(client, task_id, action.target()).await;
    }

    pub async fn update_status(&mut self, client: &HrClient, task_id: i64, status: TaskStatus) {
        self.state.clear_messages();
        match client.update_task_status(task_id, status).await {
            Ok(_) => {
                self.load(client).await;
                self.state.succeed(format!("Task status updated to {status}."));
            }
            Err(err) => self.state.fail(&err, UPDATE_FAILED),
        }
    }
}
