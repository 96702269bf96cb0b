//! # lc-time
//!
//! Gregorian date, weekday, month-grid, and navigation types.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type and proleptic Gregorian helpers.
pub mod date;

/// `MonthGrid`: a month laid out in Sunday-first week rows.
pub mod grid;

/// `Month`: month of the year.
pub mod month;

/// `MonthCursor`: previous/next month navigation.
pub mod navigation;

/// Month and year picker option lists.
pub mod picker;

/// `Weekday`: day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::Date;
pub use grid::{build_month_grid, GridCell, MonthGrid, MonthRelation, WeekRow};
pub use month::Month;
pub use navigation::MonthCursor;
pub use weekday::Weekday;
