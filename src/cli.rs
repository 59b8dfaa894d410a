use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Cadence recurring task scheduler.
#[derive(Parser)]
#[command(
    name = "cadence",
    version,
    about = "Next-due-date engine for recurring tasks"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file.
    #[arg(short, long, global = true, default_value = "cadence.toml")]
    pub config: PathBuf,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Compute the next due date of a repeating task.
    Next(NextArgs),
    /// Compute the date to store for a new or edited task.
    Plan(PlanArgs),
    /// Mark a task as done: print its new date, or `remove`.
    Done(DoneArgs),
    /// List the configured tasks by next due date.
    Agenda,
}

/// Arguments for the `next` subcommand.
#[derive(clap::Args)]
pub struct NextArgs {
    /// Start date of the task (YYYYMMDD).
    #[arg(short, long)]
    pub date: String,

    /// Recurrence rule, e.g. "d 7", "w 1,5", "m 1,-1 3,6", "y".
    #[arg(short, long)]
    pub repeat: String,

    /// Reference date (YYYYMMDD); defaults to the configured clock or today (UTC).
    #[arg(short, long)]
    pub now: Option<String>,
}

/// Arguments for the `plan` subcommand.
#[derive(clap::Args)]
pub struct PlanArgs {
    /// Task title.
    #[arg(short, long)]
    pub title: String,

    /// Requested date (YYYYMMDD); empty means today.
    #[arg(short, long, default_value = "")]
    pub date: String,

    /// Recurrence rule; empty for a one-off task.
    #[arg(short, long, default_value = "")]
    pub repeat: String,

    /// Free-form note stored with the task.
    #[arg(long, default_value = "")]
    pub comment: String,
}

/// Arguments for the `done` subcommand.
#[derive(clap::Args)]
pub struct DoneArgs {
    /// Current date of the task (YYYYMMDD).
    #[arg(short, long)]
    pub date: String,

    /// Recurrence rule; empty for a one-off task.
    #[arg(short, long, default_value = "")]
    pub repeat: String,
}
