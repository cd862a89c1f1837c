//! Manager's daily attendance sheet for their team.

use std::collections::HashMap;

use chrono::NaiveDate;
use entity::{AttendanceRecord, AttendanceStatus, Employee};
use hr_client::HrClient;
use platform_api::ApiError;

use crate::view::ViewState;

const TEAM_FAILED: &str = "Failed to fetch employee list.";
const RECORDS_FAILED: &str = "Failed to fetch attendance records.";
const MARK_FAILED: &str = "Failed to mark attendance";
const UPDATE_FAILED: &str = "Failed to update attendance";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamAttendanceRow {
    pub record: AttendanceRecord,
    pub employee_name: String,
}

impl TeamAttendanceRow {
    /// Statuses the row can still be switched to.
    pub fn alternatives(&self) -> impl Iterator<Item = AttendanceStatus> + '_ {
        AttendanceStatus::ALL
            .into_iter()
            .filter(|s| *s != self.record.status)
    }
}

/// The "mark attendance" dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkForm {
    pub employee_id: Option<i64>,
    pub status: AttendanceStatus,
}

impl Default for MarkForm {
    fn default() -> Self {
        Self {
            employee_id: None,
            status: AttendanceStatus::Present,
        }
    }
}

/// Keep the day's records that belong to the team and attach names.
pub fn team_rows(employees: &[Employee], records: Vec<AttendanceRecord>) -> Vec<TeamAttendanceRow> {
    let names: HashMap<i64, &str> = employees
        .iter()
        .map(|e| (e.id, e.name.as_str()))
        .collect();
    records
        .into_iter()
        .filter_map(|record| {
            let name = names.get(&record.employee_id)?;
            let employee_name = if name.trim().is_empty() {
                format!("Employee #{}", record.employee_id)
            } else {
                name.to_string()
            };
            Some(TeamAttendanceRow {
                record,
                employee_name,
            })
        })
        .collect()
}

#[derive(Clone, Debug)]
pub struct ManagerAttendance {
    manager_id: i64,
    date: NaiveDate,
    pub employees: Vec<Employee>,
    pub rows: Vec<TeamAttendanceRow>,
    pub form: MarkForm,
    pub state: ViewState,
}

impl ManagerAttendance {
    pub fn new(manager_id: i64, date: NaiveDate) -> Self {
        Self {
            manager_id,
            date,
            employees: Vec::new(),
            rows: Vec::new(),
            form: MarkForm::default(),
            state: ViewState::default(),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub async fn select_date(&mut self, client: &HrClient, date: NaiveDate) {
        self.date = date;
        self.load(client).await;
    }

    pub async fn load(&mut self, client: &HrClient) {
        self.state.begin();
        let (team, records) = tokio::join!(
            client.employees_by_manager(self.manager_id),
            client.attendance_on(self.date),
        );
        match team {
            Ok(team) => self.employees = team,
            Err(err) => {
                self.state.fail(&err, TEAM_FAILED);
                self.employees.clear();
            }
        }
        match records {
            Ok(records) => self.rows = team_rows(&self.employees, records),
            Err(err) => {
                self.state.fail(&err, RECORDS_FAILED);
                self.rows.clear();
            }
        }
        self.state.finish();
    }

    /// Mark `employee_id` for the selected date: the row buttons when the
    /// employee already has a mark, the dialog otherwise.
    pub async fn mark(&mut self, client: &HrClient, employee_id: i64, status: AttendanceStatus) {
        if !self.employees.iter().any(|e| e.id == employee_id) {
            self.state.clear_messages();
            let err = ApiError::invalid(format!("Employee #{employee_id} is not in your team."));
            self.state.fail(&err, MARK_FAILED);
            return;
        }
        if self.rows.iter().any(|r| r.record.employee_id == employee_id) {
            self.update_status(client, employee_id, status).await;
        } else {
            self.form = MarkForm {
                employee_id: Some(employee_id),
                status,
            };
            self.submit_mark(client).await;
        }
    }

    /// Submit the dialog for the selected date.
    pub async fn submit_mark(&mut self, client: &HrClient) {
        self.state.clear_messages();
        let Some(employee_id) = self.form.employee_id else {
            self.state
                .fail(&ApiError::invalid("Please select an employee."), MARK_FAILED);
            return;
        };
        match client
            .mark_attendance(employee_id, self.date, self.form.status)
            .await
        {
            Ok(()) => {
                self.form = MarkForm::default();
                self.load(client).await;
                self.state.succeed("Attendance marked successfully!");
            }
            Err(err) => self.state.fail(&err, MARK_FAILED),
        }
    }

    /// One of the per-row status buttons.
    pub async fn update_status(
        &mut self,
        client: &HrClient,
        employee_id: i64,
        status: AttendanceStatus,
    ) {
        self.state.clear_messages();
        match client.mark_attendance(employee_id, self.date, status).await {
            Ok(()) => {
                self.load(client).await;
                self.state
                    .succeed(format!("Attendance status updated to {status}"));
            }
            Err(err) => self.state.fail(&err, UPDATE_FAILED),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(id: i64, name: &str) -> Employee {
        Employee {
            id,
            name: name.into(),
            ..Employee::default()
        }
    }

    fn record(employee_id: i64, status: AttendanceStatus) -> AttendanceRecord {
        AttendanceRecord {
            id: Some(employee_id * 10),
            employee_id,
            date: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
            status,
        }
    }

    #[test]
    fn other_teams_are_filtered_out() {
        let team = [employee(1, "Asha"), employee(2, "")];
        let rows = team_rows(
            &team,
            vec![
                record(1, AttendanceStatus::Present),
                record(3, AttendanceStatus::Absent),
                record(2, AttendanceStatus::Leave),
            ],
        );
        let names: Vec<_> = rows.iter().map(|r| r.employee_name.as_str()).collect();
        assert_eq!(names, vec!["Asha", "Employee #2"]);
    }

    #[test]
    fn current_status_is_not_offered_again() {
        let row = TeamAttendanceRow {
            record: record(1, AttendanceStatus::Absent),
            employee_name: "Asha".into(),
        };
        let offered: Vec<_> = row.alternatives().collect();
        assert_eq!(offered, vec![AttendanceStatus::Present, AttendanceStatus::Leave]);
    }
}
