mod commands;
mod config;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{ArgAction, Args, Parser, Subcommand};
use entity::{AttendanceStatus, TaskAction};
use platform_obs::{ObsConfig, init_tracing, shutdown_tracing};

use crate::{commands::Portal, config::AppConfig};

#[derive(Parser, Debug)]
#[command(name = "hr-portal", version, about = "Employee, manager and super-admin HR portal")]
struct Cli {
    /// Base URL of the HR API (overrides HR_API_URL).
    #[arg(long, global = true, value_name = "URL")]
    api_url: Option<String>,
    /// Session file (overrides HR_SESSION_FILE).
    #[arg(long, global = true, value_name = "FILE")]
    session_file: Option<PathBuf>,
    /// Raise log verbosity (-v, -vv, -vvv).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in and remember the session.
    Login(LoginArgs),
    /// Forget the stored session.
    Logout,
    /// Show the logged-in user and their portal navigation.
    Whoami,
    /// Check that the API answers.
    Ping,
    /// Employee dashboard.
    Dashboard,
    /// Employee task list.
    #[command(subcommand)]
    Tasks(TasksCommand),
    /// Manager attendance sheet.
    #[command(subcommand)]
    Attendance(AttendanceCommand),
    /// Manager task assignment.
    #[command(subcommand)]
    Assign(AssignCommand),
    /// View or edit your profile.
    #[command(subcommand)]
    Profile(ProfileCommand),
    /// Super-admin employee management.
    #[command(subcommand)]
    Admin(AdminCommand),
    /// Company announcements.
    #[command(subcommand)]
    Announcements(AnnouncementsCommand),
}

#[derive(Args, Debug)]
struct LoginArgs {
    #[arg(long)]
    email: String,
    #[arg(long)]
    password: String,
}

#[derive(Subcommand, Debug)]
enum TasksCommand {
    /// List your tasks.
    List,
    /// Move a not-started task to in progress.
    Start { task_id: i64 },
    /// Mark a task completed.
    Complete { task_id: i64 },
}

#[derive(Subcommand, Debug)]
enum AttendanceCommand {
    /// Show your team's attendance for a day (default today).
    Show {
        #[arg(long, value_name = "YYYY-MM-DD")]
        date: Option<NaiveDate>,
    },
    /// Mark or change one employee's attendance for a day.
    Mark {
        #[arg(long = "employee", value_name = "ID")]
        employee_id: i64,
        #[arg(long, default_value = "present")]
        status: AttendanceStatus,
        #[arg(long, value_name = "YYYY-MM-DD")]
        date: Option<NaiveDate>,
    },
}

#[derive(Subcommand, Debug)]
enum AssignCommand {
    /// Show every team member's tasks.
    List,
    /// Assign a new task to a team member.
    Create {
        #[arg(long = "employee", value_name = "ID")]
        employee_id: i64,
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        /// Due date (default today).
        #[arg(long, value_name = "YYYY-MM-DD")]
        due: Option<NaiveDate>,
    },
    /// Delete a task.
    Delete {
        task_id: i64,
        /// Skip the confirmation prompt.
        #[arg(long, short)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
enum ProfileCommand {
    Show,
    /// Change your display name and/or password.
    Update {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        password: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
enum AdminCommand {
    /// List managers and their employees.
    Employees,
    /// Deactivate an employee account.
    Deactivate {
        employee_id: i64,
        #[arg(long, short)]
        yes: bool,
    },
    /// Accept a pending employee account.
    Approve { employee_id: i64 },
    /// Create an employee under a manager.
    AddEmployee {
        #[arg(long = "manager", value_name = "ID")]
        manager_id: i64,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create a manager.
    AddManager {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        org: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
enum AnnouncementsCommand {
    List,
    /// Publish an announcement (super admin).
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    init_tracing(ObsConfig::default().with_verbosity(cli.verbose))?;
    let config = AppConfig::load(cli.api_url, cli.session_file)?;
    let result = run(cli.command, &config).await;
    shutdown_tracing();
    result
}

async fn run(command: Command, config: &AppConfig) -> Result<()> {
    let mut portal = Portal::open(config)?;
    match command {
        Command::Login(args) => portal.login(&args.email, &args.password).await,
        Command::Logout => portal.logout(),
        Command::Whoami => portal.whoami(),
        Command::Ping => portal.ping().await,
        Command::Dashboard => portal.dashboard().await,
        Command::Tasks(cmd) => match cmd {
            TasksCommand::List => portal.tasks(None).await,
            TasksCommand::Start { task_id } => {
                portal.tasks(Some((task_id, TaskAction::Start))).await
            }
            TasksCommand::Complete { task_id } => {
                portal.tasks(Some((task_id, TaskAction::Complete))).await
            }
        },
        Command::Attendance(cmd) => match cmd {
            AttendanceCommand::Show { date } => portal.attendance(date, None).await,
            AttendanceCommand::Mark {
                employee_id,
                status,
                date,
            } => portal.attendance(date, Some((employee_id, status))).await,
        },
        Command::Assign(cmd) => match cmd {
            AssignCommand::List => portal.task_board().await,
            AssignCommand::Create {
                employee_id,
                title,
                description,
                due,
            } => {
                portal
                    .assign_task(employee_id, title, description, due)
                    .await
            }
            AssignCommand::Delete { task_id, yes } => portal.delete_task(task_id, yes).await,
        },
        Command::Profile(cmd) => match cmd {
            ProfileCommand::Show => portal.profile(None, None).await,
            ProfileCommand::Update { name, password } => portal.profile(name, password).await,
        },
        Command::Admin(cmd) => match cmd {
            AdminCommand::Employees => portal.employees().await,
            AdminCommand::Deactivate { employee_id, yes } => {
                portal.deactivate(employee_id, yes).await
            }
            AdminCommand::Approve { employee_id } => portal.approve(employee_id).await,
            AdminCommand::AddEmployee {
                manager_id,
                name,
                email,
                password,
            } => portal.add_employee(manager_id, name, email, password).await,
            AdminCommand::AddManager {
                name,
                email,
                password,
                org,
            } => portal.add_manager(name, email, password, org).await,
        },
        Command::Announcements(cmd) => match cmd {
            AnnouncementsCommand::List => portal.announcements().await,
            AnnouncementsCommand::Create { title, content } => {
                portal.publish_announcement(title, content).await
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn attendance_mark_parses_status_and_date() {
        let cli = Cli::try_parse_from([
            "hr-portal",
            "attendance",
            "mark",
            "--employee",
            "7",
            "--status",
            "absent",
            "--date",
            "2024-05-02",
        ])
        .unwrap();
        match cli.command {
            Command::Attendance(AttendanceCommand::Mark {
                employee_id,
                status,
                date,
            }) => {
                assert_eq!(employee_id, 7);
                assert_eq!(status, AttendanceStatus::Absent);
                assert_eq!(date, NaiveDate::from_ymd_opt(2024, 5, 2));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
