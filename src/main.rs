mod agenda_cmd;
mod cli;
mod config;
mod logging;
mod next_cmd;
mod task_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load(&cli.config, matches!(cli.command, Command::Agenda))?;
    match cli.command {
        Command::Next(args) => next_cmd::run(args, &config),
        Command::Plan(args) => task_cmd::plan(args, &config),
        Command::Done(args) => task_cmd::done(args, &config),
        Command::Agenda => agenda_cmd::run(config),
    }
}
