//! Tasks command - list and add tasks.

use anyhow::Result;
use chatwork_client::{LimitType, MyTasksQuery, RoomTasksQuery, SendTask, TaskStatus};
use clap::{Args, Subcommand, ValueEnum};
use console::Style;

use super::{Context, format_time, print_header, print_json, print_success, truncate};

/// Arguments for the tasks command.
#[derive(Args, Debug)]
pub struct TasksArgs {
    #[command(subcommand)]
    pub command: TasksCommand,
}

#[derive(Subcommand, Debug)]
pub enum TasksCommand {
    /// List a room's tasks
    List {
        /// Room ID
        room_id: u64,

        /// Only tasks assigned to this account
        #[arg(long)]
        account_id: Option<u64>,

        /// Only tasks assigned by this account
        #[arg(long)]
        assigned_by: Option<u64>,

        /// Filter by status
        #[arg(long, value_enum)]
        status: Option<StatusArg>,
    },

    /// List tasks assigned to you
    Mine {
        /// Only tasks assigned by this account
        #[arg(long)]
        assigned_by: Option<u64>,

        /// Filter by status
        #[arg(long, value_enum)]
        status: Option<StatusArg>,
    },

    /// Add a task to a room
    Add {
        /// Room ID
        room_id: u64,

        /// Task description
        body: String,

        /// Assignee account IDs (comma separated)
        #[arg(long, value_delimiter = ',', required = true)]
        to: Vec<u64>,

        /// Deadline as Unix time (exponential notation accepted, e.g. 1.7e9)
        #[arg(long)]
        limit: Option<f64>,

        /// How the deadline is interpreted
        #[arg(long, value_enum)]
        limit_type: Option<LimitTypeArg>,
    },
}

/// Task status filter.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StatusArg {
    Open,
    Done,
}

impl From<StatusArg> for TaskStatus {
    fn from(status: StatusArg) -> Self {
        match status {
            StatusArg::Open => TaskStatus::Open,
            StatusArg::Done => TaskStatus::Done,
        }
    }
}

/// Deadline kind.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LimitTypeArg {
    None,
    Date,
    Time,
}

impl From<LimitTypeArg> for LimitType {
    fn from(limit_type: LimitTypeArg) -> Self {
        match limit_type {
            LimitTypeArg::None => LimitType::None,
            LimitTypeArg::Date => LimitType::Date,
            LimitTypeArg::Time => LimitType::Time,
        }
    }
}

fn status_label(status: TaskStatus) -> String {
    match status {
        TaskStatus::Open => Style::new().yellow().apply_to("open").to_string(),
        TaskStatus::Done => Style::new().green().apply_to("done").to_string(),
    }
}

/// Run the tasks command.
pub fn run(args: TasksArgs, ctx: &Context) -> Result<()> {
    let client = ctx.client()?;
    let dim = Style::new().dim();

    match args.command {
        TasksCommand::List {
            room_id,
            account_id,
            assigned_by,
            status,
        } => {
            let query = RoomTasksQuery {
                account_id,
                assigned_by_account_id: assigned_by,
                status: status.map(Into::into),
            };
            let tasks = client.get_room_tasks(room_id, Some(query))?;
            if ctx.json_output {
                return print_json(&tasks);
            }

            print_header(&format!("Tasks in {}", room_id));
            if tasks.is_empty() {
                println!("{}", dim.apply_to("No tasks"));
            }
            for task in &tasks {
                println!(
                    "{} {} {} {}",
                    dim.apply_to(format!("[{}]", task.task_id)),
                    status_label(task.status),
                    truncate(&task.body, 60),
                    dim.apply_to(format!(
                        "→ {} (due {})",
                        task.account.name,
                        format_time(task.limit_time)
                    ))
                );
            }
        }
        TasksCommand::Mine {
            assigned_by,
            status,
        } => {
            let query = MyTasksQuery {
                assigned_by_account_id: assigned_by,
                status: status.map(Into::into),
            };
            let tasks = client.get_my_tasks(Some(query))?;
            if ctx.json_output {
                return print_json(&tasks);
            }

            print_header("My Tasks");
            if tasks.is_empty() {
                println!("{}", dim.apply_to("No tasks"));
            }
            for task in &tasks {
                println!(
                    "{} {} {} {}",
                    dim.apply_to(format!("[{}]", task.task_id)),
                    status_label(task.status),
                    truncate(&task.body, 60),
                    dim.apply_to(format!(
                        "in {} (due {})",
                        task.room.name,
                        format_time(task.limit_time)
                    ))
                );
            }
        }
        TasksCommand::Add {
            room_id,
            body,
            to,
            limit,
            limit_type,
        } => {
            let mut params = SendTask::new(room_id, body, to);
            if let Some(limit) = limit {
                params = params.with_limit(limit);
            }
            if let Some(limit_type) = limit_type {
                params = params.with_limit_type(limit_type.into());
            }

            let response = client.send_task(params)?;
            if ctx.json_output {
                return print_json(&response);
            }
            let ids = response
                .task_ids
                .iter()
                .map(u64::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            print_success(&format!("Task(s) added: {}", ids));
        }
    }

    Ok(())
}
