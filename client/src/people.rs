use entity::{AccountStatus, Employee, Manager, NewEmployee, NewManager, ProfileUpdate};
use platform_api::ApiResult;
use reqwest::Method;

use crate::HrClient;

impl HrClient {
    pub async fn employee_profile(&self, employee_id: i64) -> ApiResult<Employee> {
        let path = format!("/api/employees/profile/{employee_id}");
        let response = self.send(Method::GET, &path, |req| req).await?;
        Self::json(response).await
    }

    pub async fn update_employee_profile(
        &self,
        employee_id: i64,
        update: &ProfileUpdate,
    ) -> ApiResult<Employee> {
        let path = format!("/api/employees/profile/{employee_id}");
        let response = self.send(Method::PUT, &path, |req| req.json(update)).await?;
        Self::json(response).await
    }

    pub async fn employees_by_manager(&self, manager_id: i64) -> ApiResult<Vec<Employee>> {
        self.get_list(&format!("/api/employees/byManager/{manager_id}"))
            .await
    }

    /// Returns the API's confirmation sentence.
    pub async fn add_employee(&self, manager_id: i64, employee: &NewEmployee) -> ApiResult<String> {
        let response = self
            .send(Method::POST, "/api/employees/addEmployee", |req| {
                req.query(&[("managerId", manager_id)]).json(employee)
            })
            .await?;
        Self::text(response).await
    }

    /// Super-admin status change; returns the API's confirmation sentence.
    pub async fn set_employee_status(
        &self,
        employee_id: i64,
        status: AccountStatus,
    ) -> ApiResult<String> {
        let path = format!("/superadmin/updateEmployeeStatus/{employee_id}");
        let response = self
            .send(Method::POST, &path, |req| {
                req.query(&[("status", status.as_str())])
            })
            .await?;
        Self::text(response).await
    }

    pub async fn managers(&self) -> ApiResult<Vec<Manager>> {
        self.get_list("/manager/allManagers").await
    }

    pub async fn add_manager(&self, manager: &NewManager) -> ApiResult<()> {
        self.send(Method::POST, "/manager/addManager", |req| req.json(manager))
            .await?;
        Ok(())
    }

    pub async fn manager_profile(&self, manager_id: i64) -> ApiResult<Manager> {
        let path = format!("/manager/profile/{manager_id}");
        let response = self.send(Method::GET, &path, |req| req).await?;
        Self::json(response).await
    }

    pub async fn update_manager_profile(
        &self,
        manager_id: i64,
        update: &ProfileUpdate,
    ) -> ApiResult<()> {
        let path = format!("/manager/profile/{manager_id}");
        self.send(Method::PUT, &path, |req| req.json(update)).await?;
        Ok(())
    }
}
