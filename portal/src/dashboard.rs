//! Employee landing screen.

use chrono::{Datelike, NaiveDate};
use entity::{Announcement, AttendanceRecord, AttendanceStatus, LeaveRequest};
use hr_client::HrClient;
use platform_api::ApiResult;

use crate::view::ViewState;

const LOAD_FAILED: &str = "Failed to fetch dashboard data. Please check the network and API server.";
const RECENT_LEAVES: usize = 2;

/// This month's marks folded into counts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttendanceSummary {
    pub present: usize,
    pub absent: usize,
    pub leave: usize,
    pub total_marked: usize,
    /// Share of marked days that were present, 0.0 when nothing is marked.
    pub percentage: f64,
}

impl AttendanceSummary {
    pub fn from_records(records: &[AttendanceRecord]) -> Self {
        let count = |status: AttendanceStatus| {
            records.iter().filter(|r| r.status == status).count()
        };
        let present = count(AttendanceStatus::Present);
        let absent = count(AttendanceStatus::Absent);
        let leave = count(AttendanceStatus::Leave);
        let total_marked = present + absent + leave;
        let percentage = if total_marked > 0 {
            present as f64 / total_marked as f64 * 100.0
        } else {
            0.0
        };
        Self {
            present,
            absent,
            leave,
            total_marked,
            percentage,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardData {
    pub pending_leaves: usize,
    pub attendance: AttendanceSummary,
    pub recent_leaves: Vec<LeaveRequest>,
    pub team_members: usize,
    pub announcements: Vec<Announcement>,
}

impl DashboardData {
    fn assemble(
        leaves: Vec<LeaveRequest>,
        attendance: &[AttendanceRecord],
        team_members: usize,
        announcements: Vec<Announcement>,
    ) -> Self {
        let pending: Vec<_> = leaves.into_iter().filter(LeaveRequest::is_pending).collect();
        Self {
            pending_leaves: pending.len(),
            attendance: AttendanceSummary::from_records(attendance),
            recent_leaves: pending.into_iter().take(RECENT_LEAVES).collect(),
            team_members,
            announcements,
        }
    }
}

/// One card in the stats row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuickStat {
    pub title: &'static str,
    pub value: String,
    pub route: &'static str,
}

#[derive(Clone, Debug)]
pub struct EmployeeDashboard {
    employee_id: i64,
    today: NaiveDate,
    pub data: DashboardData,
    pub state: ViewState,
}

impl EmployeeDashboard {
    pub fn new(employee_id: i64, today: NaiveDate) -> Self {
        Self {
            employee_id,
            today,
            data: DashboardData::default(),
            state: ViewState::default(),
        }
    }

    pub async fn load(&mut self, client: &HrClient) {
        self.state.begin();
        match fetch(client, self.employee_id, self.today).await {
            Ok(data) => self.data = data,
            Err(err) => {
                self.state.fail(&err, LOAD_FAILED);
                self.data = DashboardData::default();
            }
        }
        self.state.finish();
    }

    pub fn quick_stats(&self) -> Vec<QuickStat> {
        let summary = &self.data.attendance;
        vec![
            QuickStat {
                title: "Pending Leaves",
                value: self.data.pending_leaves.to_string(),
                route: "/leave",
            },
            QuickStat {
                title: "Attendance This Month",
                value: format!("{}/{}", summary.present, summary.total_marked),
                route: "/attendance",
            },
            QuickStat {
                title: "Upcoming Holidays",
                value: "N/A".to_string(),
                route: "#",
            },
            QuickStat {
                title: "Team Members",
                value: self.data.team_members.to_string(),
                route: "#",
            },
        ]
    }
}

async fn fetch(client: &HrClient, employee_id: i64, today: NaiveDate) -> ApiResult<DashboardData> {
    let (leaves, attendance, profile, announcements) = tokio::try_join!(
        client.leave_requests_for(employee_id),
        client.attendance_for_month(employee_id, today.year(), today.month()),
        client.employee_profile(employee_id),
        client.announcements(),
    )?;

    let team_members = match profile.manager_id() {
        Some(manager_id) => client.employees_by_manager(manager_id).await?.len(),
        None => 0,
    };

    Ok(DashboardData::assemble(
        leaves,
        &attendance,
        team_members,
        announcements,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn mark(day: u32, status: AttendanceStatus) -> AttendanceRecord {
        AttendanceRecord {
            id: None,
            employee_id: 1,
            date: NaiveDate::from_ymd_opt(2024, 5, day).unwrap(),
            status,
        }
    }

    #[test]
    fn summary_of_nothing_is_zero_percent() {
        let summary = AttendanceSummary::from_records(&[]);
        assert_eq!(summary, AttendanceSummary::default());
    }

    #[test]
    fn summary_counts_each_status() {
        let records = [
            mark(1, AttendanceStatus::Present),
            mark(2, AttendanceStatus::Present),
            mark(3, AttendanceStatus::Present),
            mark(6, AttendanceStatus::Absent),
        ];
        let summary = AttendanceSummary::from_records(&records);
        assert_eq!((summary.present, summary.absent, summary.leave), (3, 1, 0));
        assert_eq!(summary.total_marked, 4);
        assert!((summary.percentage - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn only_two_pending_leaves_are_recent() {
        let leaves: Vec<LeaveRequest> = serde_json::from_value(json!([
            { "id": 1, "status": "PENDING" },
            { "id": 2, "status": "APPROVED" },
            { "id": 3, "status": "PENDING" },
            { "id": 4, "status": "PENDING" }
        ]))
        .unwrap();
        let data = DashboardData::assemble(leaves, &[], 0, Vec::new());
        assert_eq!(data.pending_leaves, 3);
        let ids: Vec<_> = data.recent_leaves.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn quick_stats_show_marked_days() {
        let mut dashboard =
            EmployeeDashboard::new(1, NaiveDate::from_ymd_opt(2024, 5, 20).unwrap());
        dashboard.data.attendance = AttendanceSummary::from_records(&[
            mark(1, AttendanceStatus::Present),
            mark(2, AttendanceStatus::Leave),
        ]);
        dashboard.data.team_members = 5;
        let stats = dashboard.quick_stats();
        assert_eq!(stats[1].value, "1/2");
        assert_eq!(stats[2].value, "N/A");
        assert_eq!(stats[3].value, "5");
    }
}
