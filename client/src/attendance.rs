use chrono::NaiveDate;
use entity::{AttendanceRecord, AttendanceStatus};
use platform_api::ApiResult;
use reqwest::Method;
use tracing::info;

use crate::HrClient;

impl HrClient {
    /// One employee's marks for a calendar month (`month` is 1-based).
    pub async fn attendance_for_month(
        &self,
        employee_id: i64,
        year: i32,
        month: u32,
    ) -> ApiResult<Vec<AttendanceRecord>> {
        let path = format!("/api/attendance/employee/{employee_id}/month");
        let response = self
            .send(Method::GET, &path, |req| {
                req.query(&[("year", year.to_string()), ("month", month.to_string())])
            })
            .await?;
        Self::json_list(response).await
    }

    /// Every mark recorded on `date`, across all teams.
    pub async fn attendance_on(&self, date: NaiveDate) -> ApiResult<Vec<AttendanceRecord>> {
        self.get_list(&format!("/api/attendance/date/{}", date.format("%Y-%m-%d")))
            .await
    }

    /// Create or overwrite the mark for one employee and day.
    pub async fn mark_attendance(
        &self,
        employee_id: i64,
        date: NaiveDate,
        status: AttendanceStatus,
    ) -> ApiResult<()> {
        self.send(Method::POST, "/api/attendance", |req| {
            req.query(&[
                ("employeeId", employee_id.to_string()),
                ("date", date.format("%Y-%m-%d").to_string()),
                ("status", status.as_str().to_string()),
            ])
        })
        .await?;
        info!(employee_id, %date, %status, "attendance marked");
        Ok(())
    }
}
