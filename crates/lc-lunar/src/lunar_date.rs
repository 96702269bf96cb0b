//! The result of a Gregorian to lunisolar conversion.

use lc_time::Weekday;

use crate::month::LunarMonth;

/// A Gregorian day together with its lunisolar counterpart.
///
/// `lunar_year` is the lunisolar year, which differs from `gregorian_year`
/// for days before the lunar new year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LunarDate {
    /// Lunisolar year.
    pub lunar_year: i32,
    /// Lunisolar month, 1–12.
    pub lunar_month: u8,
    /// Whether `lunar_month` is the intercalary repeat.
    pub is_leap_month: bool,
    /// Day of the lunisolar month, 1–30.
    pub lunar_day: u8,
    /// Gregorian year of the converted day.
    pub gregorian_year: i32,
    /// Gregorian month (1–12) of the converted day.
    pub gregorian_month: u8,
    /// Gregorian day of month of the converted day.
    pub gregorian_day: u8,
    /// Day of the week of the converted day.
    pub weekday: Weekday,
    /// Whether the converted day is the evaluation date.
    pub is_today: bool,
}

impl LunarDate {
    /// The lunisolar month as a [`LunarMonth`].
    pub fn month(&self) -> LunarMonth {
        if self.is_leap_month {
            LunarMonth::Leap(self.lunar_month)
        } else {
            LunarMonth::Common(self.lunar_month)
        }
    }

    /// Short label for a calendar cell.
    ///
    /// The day number alone, except on the first day of a month, which is
    /// labelled `1/month` (`L`-prefixed month for a leap month).
    ///
    /// ```
    /// use lc_lunar::convert;
    ///
    /// assert_eq!(convert(2024, 9, 17).unwrap().annotation(), "15");
    /// assert_eq!(convert(2024, 9, 3).unwrap().annotation(), "1/8");
    /// assert_eq!(convert(2023, 3, 22).unwrap().annotation(), "1/L2");
    /// ```
    pub fn annotation(&self) -> String {
        if self.lunar_day == 1 {
            format!("1/{}", self.month())
        } else {
            self.lunar_day.to_string()
        }
    }
}

impl std::fmt::Display for LunarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} ({}) = lunar {}/{}/{}",
            self.gregorian_year,
            self.gregorian_month,
            self.gregorian_day,
            self.weekday.short_name(),
            self.lunar_year,
            self.month(),
            self.lunar_day
        )
    }
}
