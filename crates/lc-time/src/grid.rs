//! Month grid: a Gregorian month laid out in Sunday-first week rows.
//!
//! Every row holds exactly seven [`GridCell`]s. Leading cells are filled with
//! the tail of the previous month and trailing cells with the head of the
//! next month, each tagged with its [`MonthRelation`]. A grid has between
//! [`MIN_ROWS`] and [`MAX_ROWS`] rows: rows are always completed, and no row
//! is started once the displayed month is exhausted and four rows exist.
//!
//! ```
//! use lc_time::grid::{build_month_grid, MonthRelation};
//!
//! // February 2024 starts on a Thursday.
//! let grid = build_month_grid(2024, 1);
//! assert_eq!(grid.rows().len(), 5);
//! assert_eq!(grid.rows()[0][0].day, 28);
//! assert_eq!(grid.rows()[0][0].relation, MonthRelation::Previous);
//! assert_eq!(grid.rows()[0][4].day, 1);
//! ```

use tracing::trace;

use crate::date::{days_in_month, iso_week, next_month, previous_month, weekday_of};
use crate::month::Month;

/// Cells per week row.
pub const DAYS_PER_WEEK: usize = 7;

/// Fewest rows a grid is built with.
pub const MIN_ROWS: usize = 4;

/// Most rows any Gregorian month needs in a Sunday-first layout.
pub const MAX_ROWS: usize = 6;

/// Which month a grid cell's day number belongs to, relative to the
/// displayed month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum MonthRelation {
    /// Trailing days of the preceding month.
    Previous,
    /// Days of the displayed month.
    Current,
    /// Leading days of the following month.
    Next,
}

/// One day slot of a [`MonthGrid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCell {
    /// Day of the month the cell shows.
    pub day: u8,
    /// Month the day belongs to.
    pub relation: MonthRelation,
}

impl GridCell {
    /// Return `true` for days of the displayed month.
    pub fn is_current(&self) -> bool {
        self.relation == MonthRelation::Current
    }
}

/// A Sunday-first week of exactly seven cells.
pub type WeekRow = [GridCell; DAYS_PER_WEEK];

/// A Gregorian month laid out as 4–6 week rows.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonthGrid {
    year: i32,
    month: u8,
    rows: Vec<WeekRow>,
}

impl MonthGrid {
    /// Year of the displayed month.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Displayed month, 1-based.
    pub fn month_number(&self) -> u8 {
        self.month
    }

    /// Displayed month.
    pub fn month(&self) -> Option<Month> {
        Month::from_number(self.month)
    }

    /// The week rows, top to bottom.
    pub fn rows(&self) -> &[WeekRow] {
        &self.rows
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &GridCell> + '_ {
        self.rows.iter().flat_map(|row| row.iter())
    }

    /// Day numbers of the displayed month in row-major order.
    pub fn current_days(&self) -> Vec<u8> {
        self.cells()
            .filter(|c| c.is_current())
            .map(|c| c.day)
            .collect()
    }

    /// Resolve the cell at `(row, col)` to its Gregorian `(year, month, day)`,
    /// rolling the year for previous/next cells in January/December grids.
    ///
    /// Returns `None` if the position lies outside the grid.
    pub fn cell_date(&self, row: usize, col: usize) -> Option<(i32, u8, u8)> {
        let cell = self.rows.get(row)?.get(col)?;
        let (year, month) = match cell.relation {
            MonthRelation::Previous => previous_month(self.year, self.month),
            MonthRelation::Current => (self.year, self.month),
            MonthRelation::Next => next_month(self.year, self.month),
        };
        Some((year, month, cell.day))
    }

    /// ISO-8601 week number of each row, taken from the row's first cell.
    ///
    /// A row whose year chrono cannot represent gets week 0, so the result
    /// always has one entry per row.
    pub fn week_numbers(&self) -> Vec<u8> {
        (0..self.rows.len())
            .map(|row| {
                self.cell_date(row, 0)
                    .and_then(|(y, m, d)| iso_week(y, m, d))
                    .map_or(0, |(_, week)| week)
            })
            .collect()
    }
}

/// Lay out `(year, month0)` as week rows; `month0` is 0-based (0 = January).
///
/// There is no error path: a `month0` outside `0..=11` is rolled into the
/// neighbouring year, so `(2023, 12)` lays out January 2024.
#[tracing::instrument(level = "debug")]
pub fn build_month_grid(year: i32, month0: i32) -> MonthGrid {
    let year = year + month0.div_euclid(12);
    let month = (month0.rem_euclid(12) + 1) as u8;

    let first_weekday = usize::from(weekday_of(year, month, 1).sunday_index());
    let days_in = days_in_month(year, month);
    let (prev_year, prev_month) = previous_month(year, month);
    let days_in_prev = days_in_month(prev_year, prev_month);

    let mut rows: Vec<WeekRow> = Vec::with_capacity(MAX_ROWS);
    let mut current = 1u8;
    let mut trailing = 1u8;

    while rows.len() < MAX_ROWS {
        let leading = if rows.is_empty() { first_weekday } else { 0 };
        let row: WeekRow = std::array::from_fn(|col| {
            if col < leading {
                GridCell {
                    day: days_in_prev - (first_weekday - col) as u8 + 1,
                    relation: MonthRelation::Previous,
                }
            } else if current <= days_in {
                current += 1;
                GridCell {
                    day: current - 1,
                    relation: MonthRelation::Current,
                }
            } else {
                trailing += 1;
                GridCell {
                    day: trailing - 1,
                    relation: MonthRelation::Next,
                }
            }
        });
        rows.push(row);

        if current > days_in && rows.len() >= MIN_ROWS {
            break;
        }
    }

    trace!(first_weekday, days_in, rows = rows.len(), "month grid built");
    MonthGrid { year, month, rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relations(row: &WeekRow) -> Vec<MonthRelation> {
        row.iter().map(|c| c.relation).collect()
    }

    #[test]
    fn february_2024() {
        let grid = build_month_grid(2024, 1);
        assert_eq!(grid.rows().len(), 5);
        let first: Vec<u8> = grid.rows()[0].iter().map(|c| c.day).collect();
        assert_eq!(first, [28, 29, 30, 31, 1, 2, 3]);
        use MonthRelation::*;
        assert_eq!(
            relations(&grid.rows()[0]),
            [Previous, Previous, Previous, Previous, Current, Current, Current]
        );
        let last: Vec<u8> = grid.rows()[4].iter().map(|c| c.day).collect();
        assert_eq!(last, [25, 26, 27, 28, 29, 1, 2]);
        assert_eq!(grid.current_days(), (1..=29).collect::<Vec<u8>>());
    }

    #[test]
    fn four_row_month() {
        // February 2015 starts on a Sunday and has 28 days.
        let grid = build_month_grid(2015, 1);
        assert_eq!(grid.rows().len(), 4);
        assert!(grid.cells().all(GridCell::is_current));
    }

    #[test]
    fn six_row_month() {
        // March 2024 starts on a Friday and has 31 days.
        let grid = build_month_grid(2024, 2);
        assert_eq!(grid.rows().len(), 6);
        assert_eq!(grid.rows()[0][4].day, 29);
        assert_eq!(grid.rows()[0][5].day, 1);
        let last: Vec<u8> = grid.rows()[5].iter().map(|c| c.day).collect();
        assert_eq!(last, [31, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn month_starting_on_sunday_has_no_previous_cells() {
        // September 2024 starts on a Sunday.
        let grid = build_month_grid(2024, 8);
        assert_eq!(grid.rows()[0][0].day, 1);
        assert!(grid.cells().all(|c| c.relation != MonthRelation::Previous));
    }

    #[test]
    fn month_overflow_rolls_year() {
        assert_eq!(build_month_grid(2023, 12), build_month_grid(2024, 0));
        assert_eq!(build_month_grid(2024, -1), build_month_grid(2023, 11));
        let grid = build_month_grid(2023, 12);
        assert_eq!((grid.year(), grid.month()), (2024, Some(Month::January)));
    }

    #[test]
    fn cell_dates_cross_year_boundaries() {
        // January 2024 starts on a Monday.
        let jan = build_month_grid(2024, 0);
        assert_eq!(jan.cell_date(0, 0), Some((2023, 12, 31)));
        assert_eq!(jan.cell_date(0, 1), Some((2024, 1, 1)));

        let dec = build_month_grid(2024, 11);
        let last_row = dec.rows().len() - 1;
        assert_eq!(dec.cell_date(last_row, 6), Some((2025, 1, 4)));
        assert_eq!(dec.cell_date(9, 0), None);
        assert_eq!(dec.cell_date(0, 7), None);
    }

    #[test]
    fn week_numbers_follow_first_cell() {
        let jan = build_month_grid(2021, 0);
        // Row 0 starts on Sunday 2020-12-27, ISO week 52 of 2020.
        assert_eq!(jan.week_numbers()[0], 52);
        assert_eq!(jan.week_numbers()[1], 53);
        assert_eq!(jan.week_numbers().len(), jan.rows().len());

        let far = build_month_grid(300_000, 0);
        assert!(far.week_numbers().iter().all(|&w| w == 0));
        assert_eq!(far.week_numbers().len(), far.rows().len());
    }

    #[test]
    fn grids_outside_date_range() {
        let grid = build_month_grid(1600, 1);
        assert_eq!(grid.current_days().len(), 29);
        let grid = build_month_grid(2500, 1);
        assert_eq!(grid.current_days().len(), 28);
    }
}
