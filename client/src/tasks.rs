use entity::{NewTask, Task, TaskStatus};
use platform_api::ApiResult;
use reqwest::Method;
use tracing::info;

use crate::HrClient;

impl HrClient {
    pub async fn tasks_for(&self, employee_id: i64) -> ApiResult<Vec<Task>> {
        self.get_list(&format!("/api/tasks/employee/{employee_id}"))
            .await
    }

    pub async fn assign_task(&self, employee_id: i64, task: &NewTask) -> ApiResult<Task> {
        let path = format!("/api/tasks/create/{employee_id}");
        let response = self.send(Method::POST, &path, |req| req.json(task)).await?;
        let created: Task = Self::json(response).await?;
        info!(employee_id, task_id = created.id, "task assigned");
        Ok(created)
    }

    pub async fn update_task_status(&self, task_id: i64, status: TaskStatus) -> ApiResult<Task> {
        let path = format!("/api/tasks/{task_id}/status");
        let response = self
            .send(Method::PUT, &path, |req| {
                req.query(&[("status", status.as_str())])
            })
            .await?;
        Self::json(response).await
    }

    pub async fn delete_task(&self, task_id: i64) -> ApiResult<()> {
        self.send(Method::DELETE, &format!("/api/tasks/{task_id}"), |req| req)
            .await?;
        info!(task_id, "task deleted");
        Ok(())
    }
}
