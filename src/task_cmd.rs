//! Plan and done commands: the task-editing and task-completion workflows.

use anyhow::{Context, Result};
use cadence_recurrence::Task;
use tracing::{info, info_span};

use crate::cli::{DoneArgs, PlanArgs};
use crate::config::CadenceConfig;

/// Run the `plan` command: print the date to store for the task.
pub fn plan(args: PlanArgs, config: &CadenceConfig) -> Result<()> {
    let _cmd = info_span!("plan").entered();
    let now = config.today()?;
    let mut task = Task {
        title: args.title,
        date: args.date,
        comment: args.comment,
        repeat: args.repeat,
    };
    task.plan(now)
        .with_context(|| format!("cannot plan task '{}'", task.title))?;
    info!(title = %task.title, date = %task.date, "task planned");
    println!("{}", task.date);
    Ok(())
}

/// Run the `done` command: print the new date, or `remove` for one-off tasks.
pub fn done(args: DoneArgs, config: &CadenceConfig) -> Result<()> {
    let _cmd = info_span!("done").entered();
    let now = config.today()?;
    let task = Task {
        date: args.date,
        repeat: args.repeat,
        ..Task::default()
    };
    let completion = task.complete(now).context("cannot complete task")?;
    println!("{completion}");
    Ok(())
}
