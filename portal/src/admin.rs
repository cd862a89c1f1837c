//! Super-admin view of every manager and their employees.

use entity::{AccountStatus, Employee, Manager, NewEmployee, NewManager};
use futures::future::try_join_all;
use hr_client::HrClient;
use platform_api::{ApiError, ApiResult};

use crate::view::ViewState;

const LOAD_FAILED: &str = "Failed to fetch data. Please check the API server.";
const DEACTIVATE_FAILED: &str = "Failed to deactivate employee.";
const STATUS_FAILED: &str = "Failed to update employee status.";
const ADD_EMPLOYEE_FAILED: &str = "Failed to add employee.";
const ADD_MANAGER_FAILED: &str = "Failed to add manager.";

#[derive(Clone, Debug, PartialEq)]
pub struct ManagerTeam {
    pub manager: Manager,
    pub employees: Vec<Employee>,
}

#[derive(Clone, Debug, Default)]
pub struct EmployeeManagement {
    pub teams: Vec<ManagerTeam>,
    pub state: ViewState,
}

impl EmployeeManagement {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn load(&mut self, client: &HrClient) {
        self.state.begin();
        match fetch(client).await {
            Ok(teams) => self.teams = teams,
            Err(err) => self.state.fail(&err, LOAD_FAILED),
        }
        self.state.finish();
    }

    pub fn find_employee(&self, employee_id: i64) -> Option<&Employee> {
        self.teams
            .iter()
            .flat_map(|team| team.employees.iter())
            .find(|e| e.id == employee_id)
    }

    pub fn pending(&self) -> impl Iterator<Item = &Employee> {
        self.teams
            .iter()
            .flat_map(|team| team.employees.iter())
            .filter(|e| e.status == Some(AccountStatus::Pending))
    }

    /// Deactivate after the caller has confirmed; the account can no longer log in.
    pub async fn deactivate(&mut self, client: &HrClient, employee_id: i64) {
        self.set_status(client, employee_id, AccountStatus::Deactivated)
            .await;
    }

    pub async fn approve(&mut self, client: &HrClient, employee_id: i64) {
        self.set_status(client, employee_id, AccountStatus::Accepted)
            .await;
    }

    pub async fn set_status(&mut self, client: &HrClient, employee_id: i64, status: AccountStatus) {
        self.state.clear_messages();
        let fallback = if status == AccountStatus::Deactivated {
            DEACTIVATE_FAILED
        } else {
            STATUS_FAILED
        };
        match client.set_employee_status(employee_id, status).await {
            Ok(reply) => {
                self.load(client).await;
                self.state.succeed(reply_or(
                    reply,
                    format!("Employee status updated to {status}."),
                ));
            }
            Err(err) => self.state.fail(&err, fallback),
        }
    }

    pub async fn add_employee(&mut self, client: &HrClient, manager_id: i64, employee: NewEmployee) {
        self.state.clear_messages();
        if let Err(err) = require(&[
            ("Name", &employee.name),
            ("Email", &employee.email),
            ("Password", &employee.password),
        ]) {
            self.state.fail(&err, ADD_EMPLOYEE_FAILED);
            return;
        }
        match client.add_employee(manager_id, &employee).await {
            Ok(reply) => {
                self.load(client).await;
                self.state
                    .succeed(reply_or(reply, "Employee added successfully!".into()));
            }
            Err(err) => self.state.fail(&err, ADD_EMPLOYEE_FAILED),
        }
    }

    pub async fn add_manager(&mut self, client: &HrClient, manager: NewManager) {
        self.state.clear_messages();
        if let Err(err) = require(&[
            ("Name", &manager.name),
            ("Email", &manager.email),
            ("Password", &manager.password),
        ]) {
            self.state.fail(&err, ADD_MANAGER_FAILED);
            return;
        }
        match client.add_manager(&manager).await {
            Ok(()) => {
                self.load(client).await;
                self.state.succeed("Manager added successfully!");
            }
            Err(err) => self.state.fail(&err, ADD_MANAGER_FAILED),
        }
    }
}

fn reply_or(reply: String, fallback: String) -> String {
    if reply.trim().is_empty() {
        fallback
    } else {
        reply.trim().to_string()
    }
}

fn require(fields: &[(&str, &String)]) -> ApiResult<()> {
    match fields.iter().find(|(_, value)| value.trim().is_empty()) {
        Some((label, _)) => Err(ApiError::invalid(format!("{label} is required."))),
        None => Ok(()),
    }
}

async fn fetch(client: &HrClient) -> ApiResult<Vec<ManagerTeam>> {
    let managers = client.managers().await?;
    try_join_all(managers.into_iter().map(|manager| async move {
        let employees = client.employees_by_manager(manager.id).await?;
        Ok::<_, ApiError>(ManagerTeam { manager, employees })
    }))
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_missing_field_is_reported() {
        let name = "Asha".to_string();
        let blank = "  ".to_string();
        let err = require(&[("Name", &name), ("Email", &blank), ("Password", &blank)]).unwrap_err();
        assert_eq!(err.server_message(), Some("Email is required."));
    }

    #[test]
    fn pending_accounts_are_listed() {
        let mut screen = EmployeeManagement::new();
        screen.teams.push(ManagerTeam {
            manager: Manager {
                id: 1,
                ..Manager::default()
            },
            employees: vec![
                Employee {
                    id: 2,
                    status: Some(AccountStatus::Pending),
                    ..Employee::default()
                },
                Employee {
                    id: 3,
                    status: Some(AccountStatus::Accepted),
                    ..Employee::default()
                },
            ],
        });
        let pending: Vec<_> = screen.pending().map(|e| e.id).collect();
        assert_eq!(pending, vec![2]);
        assert!(screen.find_employee(3).is_some());
        assert!(screen.find_employee(4).is_none());
    }
}
