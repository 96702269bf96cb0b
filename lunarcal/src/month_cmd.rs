use anyhow::{Context, Result};
use lc_time::{Date, MonthCursor};
use lunarcal::render::{EventsView, MonthReport, MonthView};
use tracing::debug;

use crate::catalog;
use crate::cli::MonthArgs;

pub fn run(args: MonthArgs) -> Result<()> {
    let chosen = match args.date {
        Some(date) => date,
        None => Date::today().context("system date is outside the supported range")?,
    };
    let (chosen_year, chosen_month, _) = chosen.ymd();
    let year = args.year.unwrap_or(chosen_year.into());
    let month = args.month.unwrap_or(chosen_month);
    let cursor = MonthCursor::new(year, i32::from(month) - 1 + args.offset);
    debug!(%chosen, %cursor, "showing month");

    let grid = cursor.grid();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&MonthReport::new(&grid))?);
        return Ok(());
    }

    print!("{}", MonthView::new(grid, Some(chosen)));
    if let Some(path) = &args.events {
        let catalog = catalog::load(path)?;
        println!();
        print!("{}", EventsView::new(chosen, catalog.grouped(chosen, args.group_by)));
    }
    Ok(())
}
