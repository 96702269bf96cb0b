//! Presentation of months, events and catalogue coverage.
//!
//! The text views implement `Display`; [`MonthReport`] is the serializable
//! counterpart of [`MonthView`].

use std::collections::BTreeMap;
use std::fmt;

use lc_events::EventSelection;
use lc_lunar::{convert, LunarDate};
use lc_time::{Date, MonthCursor, MonthGrid, MonthRelation, Weekday};
use serde::Serialize;
use tracing::debug;

/// Width of one day column, separator included.
const CELL_WIDTH: usize = 6;

/// Width of the week-number column, separator included.
const WEEK_WIDTH: usize = 4;

/// Lunisolar date of a current-month cell, or `None` for adjacent-month
/// cells and days outside the table.
fn lunar_of(grid: &MonthGrid, row: usize, col: usize) -> Option<LunarDate> {
    let cell = grid.rows().get(row)?.get(col)?;
    if !cell.is_current() {
        return None;
    }
    let (y, m, d) = grid.cell_date(row, col)?;
    match convert(y, m.into(), d.into()) {
        Ok(lunar) => Some(lunar),
        Err(e) => {
            debug!(%e, "no lunar annotation");
            None
        }
    }
}

// ── Month ─────────────────────────────────────────────────────────────────────

/// A month grid with the lunisolar annotation of each day, ready to print.
///
/// Days of the adjacent months are shown in brackets and the chosen day is
/// marked with `*`.
#[derive(Debug, Clone)]
pub struct MonthView {
    grid: MonthGrid,
    chosen: Option<Date>,
    annotations: Vec<[Option<String>; 7]>,
}

impl MonthView {
    /// Annotate `grid`; `chosen` is highlighted when it falls in the month.
    pub fn new(grid: MonthGrid, chosen: Option<Date>) -> Self {
        let annotations: Vec<[Option<String>; 7]> = (0..grid.rows().len())
            .map(|row| {
                std::array::from_fn(|col| lunar_of(&grid, row, col).map(|l| l.annotation()))
            })
            .collect();
        MonthView {
            grid,
            chosen,
            annotations,
        }
    }

    /// The underlying grid.
    pub fn grid(&self) -> &MonthGrid {
        &self.grid
    }

    /// Lunisolar annotation at `(row, col)`, if any.
    pub fn annotation(&self, row: usize, col: usize) -> Option<&str> {
        self.annotations.get(row)?.get(col)?.as_deref()
    }

    fn is_chosen(&self, row: usize, col: usize) -> bool {
        let Some(chosen) = self.chosen else {
            return false;
        };
        let (y, m, d) = chosen.ymd();
        self.grid.rows()[row][col].is_current()
            && self.grid.cell_date(row, col) == Some((y.into(), m, d))
    }
}

impl fmt::Display for MonthView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = MonthCursor::new(
            self.grid.year(),
            i32::from(self.grid.month_number()) - 1,
        )
        .to_string();
        let width = WEEK_WIDTH + 7 * CELL_WIDTH;
        writeln!(f, "{}", format!("{title:^width$}").trim_end())?;

        write!(f, "{:>w$}", "Wk ", w = WEEK_WIDTH)?;
        for day in Weekday::SUNDAY_FIRST {
            write!(f, "{:>w$}", day.short_name(), w = CELL_WIDTH)?;
        }
        writeln!(f)?;

        for ((row, cells), week) in self.grid.rows().iter().enumerate().zip(self.grid.week_numbers()) {
            let mut day_line = format!("{:>w$}", format!("{week} "), w = WEEK_WIDTH);
            for (col, cell) in cells.iter().enumerate() {
                let text = match cell.relation {
                    MonthRelation::Current if self.is_chosen(row, col) => format!("{}*", cell.day),
                    MonthRelation::Current => format!("{} ", cell.day),
                    _ => format!("[{}]", cell.day),
                };
                day_line.push_str(&format!("{text:>w$}", w = CELL_WIDTH));
            }
            writeln!(f, "{}", day_line.trim_end())?;

            let mut lunar_line = " ".repeat(WEEK_WIDTH);
            for col in 0..7 {
                let text = self.annotation(row, col).unwrap_or("");
                lunar_line.push_str(&format!("{text:>w$} ", w = CELL_WIDTH - 1));
            }
            writeln!(f, "{}", lunar_line.trim_end())?;
        }
        Ok(())
    }
}

/// One cell of a [`MonthReport`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellReport {
    /// Gregorian day of month.
    pub day: u8,
    /// Month the day belongs to, relative to the shown month.
    pub relation: MonthRelation,
    /// Lunisolar date of current-month days inside the table.
    pub lunar: Option<LunarDate>,
}

/// Serializable form of an annotated month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthReport {
    /// Gregorian year.
    pub year: i32,
    /// Gregorian month, 1–12.
    pub month: u8,
    /// ISO week number of each row.
    pub weeks: Vec<u8>,
    /// Week rows, Sunday first.
    pub rows: Vec<Vec<CellReport>>,
}

impl MonthReport {
    /// Annotate every current-month cell of `grid`.
    pub fn new(grid: &MonthGrid) -> Self {
        let rows = grid
            .rows()
            .iter()
            .enumerate()
            .map(|(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .map(|(col, cell)| CellReport {
                        day: cell.day,
                        relation: cell.relation,
                        lunar: lunar_of(grid, row, col),
                    })
                    .collect()
            })
            .collect();
        MonthReport {
            year: grid.year(),
            month: grid.month_number(),
            weeks: grid.week_numbers(),
            rows,
        }
    }
}

// ── Events ────────────────────────────────────────────────────────────────────

/// The events of one day, one line per event under its group heading.
pub struct EventsView<'a> {
    date: Date,
    selection: EventSelection<'a>,
}

impl<'a> EventsView<'a> {
    /// View of `selection`, the events of `date`.
    pub fn new(date: Date, selection: EventSelection<'a>) -> Self {
        EventsView { date, selection }
    }
}

impl fmt::Display for EventsView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.selection.is_empty() {
            return writeln!(f, "No events on {}", self.date);
        }
        writeln!(f, "Events on {} ({}):", self.date, self.selection.total)?;
        for group in &self.selection.groups {
            let indent = if group.key.is_empty() {
                ""
            } else {
                writeln!(f, "{}", group.key)?;
                "  "
            };
            for event in &group.events {
                writeln!(f, "{indent}{}", event.label())?;
            }
        }
        Ok(())
    }
}

// ── Coverage ──────────────────────────────────────────────────────────────────

/// Days without a day-specific event, one line per month.
pub struct CoverageView<'a> {
    missing: &'a BTreeMap<u8, Vec<u8>>,
}

impl<'a> CoverageView<'a> {
    /// View of [`missing_days_by_month`](lc_events::EventCatalog::missing_days_by_month) output.
    pub fn new(missing: &'a BTreeMap<u8, Vec<u8>>) -> Self {
        CoverageView { missing }
    }
}

impl fmt::Display for CoverageView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Missing dates by month:")?;
        for (month, days) in self.missing {
            writeln!(f, "Month {month:02}: ({:02}) {days:?}", days.len())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lc_events::{Event, EventCatalog, GroupBy};
    use lc_time::build_month_grid;

    #[test]
    fn february_2024_text() {
        let chosen = Date::from_ymd(2024, 2, 10).unwrap();
        let view = MonthView::new(build_month_grid(2024, 1), Some(chosen));
        let text = view.to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0].trim(), "February 2024");
        assert_eq!(lines[1], " Wk    Sun   Mon   Tue   Wed   Thu   Fri   Sat");
        assert_eq!(lines[2], "  4   [28]  [29]  [30]  [31]    1     2     3");
        // Header, weekday row, then a day line and a lunar line per week.
        assert_eq!(lines.len(), 2 + 2 * 5);
        assert!(text.contains("10*"));
        assert_eq!(view.annotation(1, 6), Some("1/1"));
        assert_eq!(view.annotation(0, 0), None);
    }

    #[test]
    fn days_outside_table_have_no_annotation() {
        let view = MonthView::new(build_month_grid(1900, 0), None);
        // 1900-01-30 (Tuesday, row 4) precedes the epoch.
        assert_eq!(view.annotation(4, 2), None);
        assert_eq!(view.annotation(4, 3), Some("1/1"));

        // Lunar 1900-02-01 is Thursday, March 1.
        let march = MonthView::new(build_month_grid(1900, 2), None);
        assert_eq!(march.annotation(0, 4), Some("1/2"));
        assert_eq!(march.annotation(0, 5), Some("2"));
    }

    #[test]
    fn first_lunar_day_reads_day_then_month() {
        let view = MonthView::new(build_month_grid(2024, 8), None);
        assert_eq!(view.annotation(0, 2), Some("1/8"));
        let text = view.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[2], " 35     1     2     3     4     5     6     7");
        assert_eq!(lines[3], "       29    30   1/8     2     3     4     5");
    }

    #[test]
    fn report_annotates_current_days_only() {
        let report = MonthReport::new(&build_month_grid(2024, 1));
        assert_eq!(report.rows.len(), 5);
        assert_eq!(report.weeks.len(), 5);
        assert!(report.rows[0][0].lunar.is_none());
        let new_year = report.rows[1][6].lunar.as_ref().unwrap();
        assert_eq!((new_year.lunar_month, new_year.lunar_day), (1, 1));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["rows"][0][0]["relation"], "previous");
        assert_eq!(json["rows"][1][6]["lunar"]["lunar_day"], 1);
    }

    #[test]
    fn events_grouped_by_country() {
        let catalog = EventCatalog::new(vec![
            Event {
                month: 10,
                date: 1,
                title: "National Day".into(),
                country: "CN".into(),
                field: "politics".into(),
                ..Event::default()
            },
            Event {
                month: 10,
                title: "Exhibition".into(),
                field: "culture".into(),
                ..Event::default()
            },
        ]);
        let day = Date::from_ymd(2024, 10, 1).unwrap();
        let text = EventsView::new(day, catalog.grouped(day, GroupBy::Country)).to_string();
        assert_eq!(
            text,
            "Events on 2024-10-01 (2):\n0/10 - [culture] Exhibition\nCN\n  1/10 - [politics] National Day\n"
        );

        let other = Date::from_ymd(2024, 11, 1).unwrap();
        let text = EventsView::new(other, catalog.grouped(other, GroupBy::Country)).to_string();
        assert_eq!(text, "No events on 2024-11-01\n");
    }

    #[test]
    fn coverage_lines() {
        let missing = BTreeMap::from([(2u8, vec![1u8, 2]), (11, vec![30])]);
        assert_eq!(
            CoverageView::new(&missing).to_string(),
            "Missing dates by month:\nMonth 02: (02) [1, 2]\nMonth 11: (01) [30]\n"
        );
    }
}
