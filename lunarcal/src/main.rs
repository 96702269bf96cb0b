mod catalog;
mod cli;
mod convert_cmd;
mod coverage_cmd;
mod logging;
mod month_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;
use lc_core::Settings;
use tracing::info;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Some(today) = cli.today {
        info!(%today, "evaluation date overridden");
        Settings::instance().set_evaluation_date_serial(today.serial());
    }

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Month(args) => month_cmd::run(args),
        Command::Convert(args) => convert_cmd::run(args),
        Command::Coverage(args) => coverage_cmd::run(args),
    }
}
