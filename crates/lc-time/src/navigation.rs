//! Previous/next month navigation.

use crate::date::Date;
use crate::grid::{build_month_grid, MonthGrid};
use crate::month::Month;

/// The month currently shown by a calendar view.
///
/// `month0` is 0-based to match [`build_month_grid`]; stepping past December
/// or before January rolls the year.
///
/// ```
/// use lc_time::MonthCursor;
///
/// let jan = MonthCursor::new(2024, 0);
/// assert_eq!(jan.prev(), MonthCursor::new(2023, 11));
/// assert_eq!(jan.prev().next(), jan);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonthCursor {
    year: i32,
    month0: u8,
}

impl MonthCursor {
    /// Cursor at `(year, month0)`; an out-of-range `month0` rolls the year.
    pub fn new(year: i32, month0: i32) -> Self {
        MonthCursor {
            year: year + month0.div_euclid(12),
            month0: month0.rem_euclid(12) as u8,
        }
    }

    /// Cursor at the month containing `date`.
    pub fn containing(date: Date) -> Self {
        let (y, m, _) = date.ymd();
        MonthCursor {
            year: y.into(),
            month0: m - 1,
        }
    }

    /// Year of the shown month.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// 0-based shown month.
    pub fn month0(&self) -> u8 {
        self.month0
    }

    /// Shown month.
    pub fn month(&self) -> Month {
        Month::from_index0(self.month0).unwrap_or(Month::January)
    }

    /// The preceding month.
    pub fn prev(self) -> Self {
        if self.month0 == 0 {
            MonthCursor {
                year: self.year - 1,
                month0: 11,
            }
        } else {
            MonthCursor {
                month0: self.month0 - 1,
                ..self
            }
        }
    }

    /// The following month.
    pub fn next(self) -> Self {
        if self.month0 == 11 {
            MonthCursor {
                year: self.year + 1,
                month0: 0,
            }
        } else {
            MonthCursor {
                month0: self.month0 + 1,
                ..self
            }
        }
    }

    /// Lay out the shown month.
    pub fn grid(&self) -> MonthGrid {
        build_month_grid(self.year, self.month0.into())
    }
}

impl std::fmt::Display for MonthCursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.month(), self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rolls_year_at_boundaries() {
        let dec = MonthCursor::new(2024, 11);
        assert_eq!(dec.next(), MonthCursor::new(2025, 0));
        assert_eq!(MonthCursor::new(2025, 0).prev(), dec);
        assert_eq!(MonthCursor::new(2024, 5).next().month(), Month::July);
    }

    #[test]
    fn normalizes_on_construction() {
        assert_eq!(MonthCursor::new(2024, 12), MonthCursor::new(2025, 0));
        assert_eq!(MonthCursor::new(2024, -1), MonthCursor::new(2023, 11));
    }

    #[test]
    fn twelve_steps_is_one_year() {
        let start = MonthCursor::new(1999, 7);
        let end = (0..12).fold(start, |c, _| c.next());
        assert_eq!(end, MonthCursor::new(2000, 7));
        let back = (0..12).fold(end, |c, _| c.prev());
        assert_eq!(back, start);
    }

    #[test]
    fn containing_and_display() {
        let d = Date::from_ymd(2024, 2, 10).unwrap();
        let c = MonthCursor::containing(d);
        assert_eq!((c.year(), c.month0()), (2024, 1));
        assert_eq!(c.to_string(), "February 2024");
        assert_eq!(c.grid().rows().len(), 5);
    }
}
