//! Agenda command: list configured tasks by their due date.

use anyhow::Result;
use cadence_calendar::CalendarDate;
use cadence_recurrence::Task;
use tracing::{info, info_span, warn};

use crate::config::CadenceConfig;

/// Run the `agenda` command.
///
/// Tasks whose date or rule cannot be evaluated are reported and skipped.
pub fn run(config: CadenceConfig) -> Result<()> {
    let _cmd = info_span!("agenda").entered();
    let now = config.today()?;

    let lines = agenda(now, config.tasks.into_iter().map(Task::from));
    info!(%now, n = lines.len(), "agenda built");
    for line in lines {
        println!("{line}");
    }
    Ok(())
}

/// Due date and display line for each valid task, ordered by date then title.
fn agenda(now: CalendarDate, tasks: impl Iterator<Item = Task>) -> Vec<String> {
    let mut due: Vec<(CalendarDate, Task)> = tasks
        .filter_map(|mut task| match task.plan(now) {
            Ok(()) => {
                // plan() always leaves a valid YYYYMMDD date behind.
                let date = CalendarDate::parse_compact(&task.date).ok()?;
                Some((date, task))
            }
            Err(e) => {
                warn!(title = %task.title, error = %e, "skipping task");
                None
            }
        })
        .collect();
    due.sort_by(|(a, ta), (b, tb)| a.cmp(b).then_with(|| ta.title.cmp(&tb.title)));

    due.into_iter()
        .map(|(date, task)| {
            let mut line = format!("{date}  {}", task.title);
            if !task.repeat.is_empty() {
                line.push_str(&format!("  [{}]", task.repeat));
            }
            if !task.comment.is_empty() {
                line.push_str(&format!("  # {}", task.comment));
            }
            line
        })
        .collect()
}
