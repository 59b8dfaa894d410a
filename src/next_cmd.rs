//! Next command: compute the next due date of a repeating task.

use anyhow::{Context, Result};
use cadence_recurrence::{next_date, parse_date};
use tracing::{info, info_span};

use crate::cli::NextArgs;
use crate::config::CadenceConfig;

/// Run the `next` command.
pub fn run(args: NextArgs, config: &CadenceConfig) -> Result<()> {
    let _cmd = info_span!("next").entered();
    let now = match &args.now {
        Some(now) => parse_date(now).context("invalid --now")?,
        None => config.today()?,
    };
    info!(%now, date = %args.date, repeat = %args.repeat, "computing next date");

    let next = next_date(now, &args.date, &args.repeat)
        .with_context(|| format!("cannot compute next date for rule '{}'", args.repeat))?;
    println!("{next}");
    Ok(())
}
