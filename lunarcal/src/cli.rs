use std::path::PathBuf;

use clap::{Parser, Subcommand};
use lc_events::GroupBy;
use lc_time::Date;

/// Gregorian month calendar annotated with the Chinese lunisolar date.
#[derive(Parser)]
#[command(
    name = "lunarcal",
    version,
    about = "Gregorian month calendar annotated with the Chinese lunisolar date"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Treat this day (YYYY-MM-DD) as today instead of the system date.
    #[arg(long, global = true)]
    pub today: Option<Date>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print a month with lunisolar annotations.
    Month(MonthArgs),
    /// Convert one Gregorian date to the lunisolar calendar.
    Convert(ConvertArgs),
    /// Report the days of each month that have no event in a catalogue.
    Coverage(CoverageArgs),
}

/// Arguments for the `month` subcommand.
#[derive(clap::Args)]
pub struct MonthArgs {
    /// Chosen day (YYYY-MM-DD); defaults to today.
    #[arg(short, long)]
    pub date: Option<Date>,

    /// Year to show; defaults to the chosen day's year.
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Month to show (1-12); defaults to the chosen day's month.
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=12))]
    pub month: Option<u8>,

    /// Months to step forward (negative steps back) from the shown month.
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    pub offset: i32,

    /// Event catalogue (JSON, or CSV by extension); the chosen day's events
    /// are listed below the month.
    #[arg(short, long)]
    pub events: Option<PathBuf>,

    /// Event attribute to group by: none, country, field or frequency.
    #[arg(short, long, default_value = "country")]
    pub group_by: GroupBy,

    /// Print the annotated month as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `convert` subcommand.
#[derive(clap::Args)]
pub struct ConvertArgs {
    /// Gregorian year.
    #[arg(allow_hyphen_values = true)]
    pub year: i32,

    /// Gregorian month (1-12); overflow rolls into the next year.
    #[arg(allow_hyphen_values = true)]
    pub month: i32,

    /// Day of month; overflow rolls into the next month.
    #[arg(allow_hyphen_values = true)]
    pub day: i32,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `coverage` subcommand.
#[derive(clap::Args)]
pub struct CoverageArgs {
    /// Event catalogue (JSON, or CSV by extension).
    #[arg(short, long)]
    pub events: PathBuf,

    /// Also write the parsed catalogue to this path as JSON.
    #[arg(long, value_name = "PATH")]
    pub write_json: Option<PathBuf>,
}
