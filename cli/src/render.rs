//! Plain-text rendering of the portal screens.

use chrono::NaiveDate;
use entity::{Announcement, LeaveRequest, Task};
use portal::{
    AnnouncementBoard, AssignedTask, BackendHealth, EmployeeDashboard, EmployeeManagement,
    EmployeeTaskView, ManagerAttendance, ManagerTaskAssignment, ProfilePage, Shell, ViewState,
};

/// Column-aligned table. Cells are padded to the widest entry of their column.
pub fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }
    let line = |cells: &[&str]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };
    let rules: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let mut out = Vec::with_capacity(rows.len() + 2);
    out.push(line(headers));
    out.push(line(&rules.iter().map(String::as_str).collect::<Vec<_>>()));
    for row in rows {
        out.push(line(&row.iter().map(String::as_str).collect::<Vec<_>>()));
    }
    out.join("\n")
}

fn short_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| "-".into())
}

pub fn success(state: &ViewState) {
    if let Some(message) = &state.success {
        println!("[ok] {message}");
    }
}

pub fn stale(error: &str) {
    eprintln!("[warn] could not refresh the screen: {error}");
}

pub fn header(shell: &Shell, today: NaiveDate) {
    let session = shell.session();
    println!(
        "{} | ({}) {} - {} | {}",
        shell.portal_title(),
        session.initial(),
        session.display_name(),
        session.role.title(),
        today.format("%A, %B %-d, %Y")
    );
    println!("== {} ==", shell.screen().title());
}

pub fn sidebar(shell: &Shell) {
    for item in shell.sidebar() {
        let marker = if item.active { '>' } else { ' ' };
        let note = if item.screen.is_some() { "" } else { "  (web only)" };
        println!(" {marker} {:<22}{}{note}", item.label, item.route);
    }
}

pub fn empty_or(rows: &[Vec<String>], headers: &[&str], empty: &str) {
    if rows.is_empty() {
        println!("{empty}");
    } else {
        println!("{}", table(headers, rows));
    }
}

fn announcement_rows(list: &[Announcement]) -> Vec<Vec<String>> {
    list.iter()
        .map(|a| {
            vec![
                a.id.to_string(),
                a.title.clone(),
                a.content.clone(),
                a.posted_on()
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "-".into()),
            ]
        })
        .collect()
}

fn leave_rows(list: &[LeaveRequest]) -> Vec<Vec<String>> {
    list.iter()
        .map(|l| {
            vec![
                format!("Leave Request #{}", l.id),
                format!("{} - {}", short_date(l.start_date), short_date(l.end_date)),
                "Pending".into(),
            ]
        })
        .collect()
}

pub fn dashboard(view: &EmployeeDashboard) {
    if view.state.loading {
        println!("Loading dashboard data...");
        return;
    }
    let stats = view.quick_stats();
    let rows: Vec<Vec<String>> = stats
        .iter()
        .map(|s| vec![s.title.to_string(), s.value.clone()])
        .collect();
    println!("{}", table(&["Stat", "Value"], &rows));

    println!("\nRecent Leave Requests");
    empty_or(
        &leave_rows(&view.data.recent_leaves),
        &["Request", "Dates", "Status"],
        "No recent leave requests.",
    );

    let summary = &view.data.attendance;
    println!("\nAttendance Summary");
    println!("{}% Present", summary.percentage.round() as i64);
    println!(
        "Present: {} days  Absent: {} days  Leave: {} days",
        summary.present, summary.absent, summary.leave
    );

    println!("\nCompany Announcements");
    announcements_table(&view.data.announcements);
}

pub fn announcements_table(list: &[Announcement]) {
    empty_or(
        &announcement_rows(list),
        &["#", "Title", "Content", "Posted"],
        "No announcements found.",
    );
}

pub fn announcement_board(view: &AnnouncementBoard) {
    announcements_table(&view.announcements);
}

fn task_actions(task: &Task) -> String {
    task.status
        .actions()
        .iter()
        .map(|a| a.label())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn employee_tasks(view: &EmployeeTaskView) {
    let rows: Vec<Vec<String>> = view
        .tasks
        .iter()
        .map(|t| {
            vec![
                t.id.to_string(),
                t.title.clone(),
                t.description.clone().unwrap_or_default(),
                t.due_date.map(|d| d.to_string()).unwrap_or_default(),
                t.status.to_string(),
                task_actions(t),
            ]
        })
        .collect();
    empty_or(
        &rows,
        &["#", "Title", "Description", "Due Date", "Status", "Actions"],
        "No tasks assigned.",
    );
}

pub fn team_attendance(view: &ManagerAttendance) {
    println!("Date: {}", view.date());
    let rows: Vec<Vec<String>> = view
        .rows
        .iter()
        .map(|row| {
            vec![
                row.record.employee_id.to_string(),
                row.employee_name.clone(),
                row.record.date.to_string(),
                row.record.status.to_string(),
                row.alternatives()
                    .map(|s| s.to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            ]
        })
        .collect();
    empty_or(
        &rows,
        &["Employee", "Name", "Date", "Status", "Change To"],
        "No attendance records for this date.",
    );
    let unmarked: Vec<_> = view
        .employees
        .iter()
        .filter(|e| !view.rows.iter().any(|r| r.record.employee_id == e.id))
        .map(|e| format!("{} (#{})", e.name, e.id))
        .collect();
    if !unmarked.is_empty() {
        println!("\nNot marked yet: {}", unmarked.join(", "));
    }
}

fn assigned_rows(tasks: &[&AssignedTask]) -> Vec<Vec<String>> {
    tasks
        .iter()
        .map(|t| {
            vec![
                t.task.id.to_string(),
                t.task.title.clone(),
                t.task.due_date.map(|d| d.to_string()).unwrap_or_default(),
                t.task.status.to_string(),
            ]
        })
        .collect()
}

pub fn task_board(view: &ManagerTaskAssignment) {
    let team: Vec<String> = view
        .employees
        .iter()
        .map(|e| format!("{} (#{})", e.name, e.id))
        .collect();
    if team.is_empty() {
        println!("No employees report to you yet.");
        return;
    }
    println!("Team: {}", team.join(", "));
    for employee in &view.employees {
        let tasks: Vec<&AssignedTask> = view.tasks_of(employee.id).collect();
        println!("\n{} (#{})", employee.name, employee.id);
        empty_or(
            &assigned_rows(&tasks),
            &["#", "Title", "Due Date", "Status"],
            "No tasks assigned yet.",
        );
    }
}

pub fn profile(view: &ProfilePage) {
    let org = if view.form.org.is_empty() {
        "-"
    } else {
        view.form.org.as_str()
    };
    println!("Name:  {}", view.form.name);
    println!("Email: {}", view.form.email);
    println!("Org:   {org}");
}

pub fn employee_management(view: &EmployeeManagement) {
    if view.teams.is_empty() {
        println!("No managers found.");
        return;
    }
    for team in &view.teams {
        let org = team.manager.org.as_deref().unwrap_or("-");
        println!(
            "\nManager: {} (#{}) - Org: {org}",
            team.manager.name, team.manager.id
        );
        let rows: Vec<Vec<String>> = team
            .employees
            .iter()
            .map(|e| {
                vec![
                    e.id.to_string(),
                    e.name.clone(),
                    e.email.clone(),
                    e.status
                        .map(|s| s.to_string())
                        .unwrap_or_else(|| "-".into()),
                ]
            })
            .collect();
        empty_or(
            &rows,
            &["#", "Name", "Email", "Status"],
            "No employees assigned.",
        );
    }
}

pub fn health(result: &BackendHealth) {
    if result.reachable {
        println!("{}", result.message);
    } else {
        eprintln!("{}", result.message);
    }
}
