//! `Date` type.
//!
//! Dates are stored as a serial number of days. Serial 1 is January 1, 1900,
//! so the lunisolar epoch (1900-01-31) is serial 31.
//!
//! # Serial number convention
//! * Serial 1 = January 1, 1900.
//! * The valid date range is 1900-01-01 to 2199-12-31.
//!
//! The free functions at the bottom of this module ([`days_in_month`],
//! [`weekday_of`], [`iso_week`], …) work on the proleptic Gregorian calendar
//! for any `i32` year, so that the month grid can be laid out without a range
//! check. [`iso_week`] is the exception: it defers to `chrono` and is `None`
//! outside chrono's year range.

use chrono::{Datelike, NaiveDate};
use lc_core::errors::{Error, Result};
use lc_core::settings::Settings;

use crate::weekday::Weekday;

/// A calendar date represented as a serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

/// `days_from_civil(1899, 12, 31)`: the day before serial 1.
const SERIAL_OFFSET: i32 = 25_568;

/// Bound on the month-adjusted year accepted by lenient construction; keeps
/// the civil-day arithmetic inside `i32`.
const MAX_NORMALIZED_YEAR: i64 = 1_000_000;

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Minimum valid date: January 1, 1900.
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 2199.
    pub const MAX: Date = Date(109_573);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    ///
    /// Returns an error if the serial lies outside `[MIN, MAX]`.
    pub fn from_serial(serial: i32) -> Result<Self> {
        if serial < Self::MIN.0 {
            return Err(Error::Date(format!(
                "serial {serial} precedes the minimum date"
            )));
        }
        if serial > Self::MAX.0 {
            return Err(Error::Date(format!("serial {serial} exceeds maximum date")));
        }
        Ok(Date(serial))
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    ///
    /// Every component is validated; use [`Date::from_ymd_normalized`] for
    /// lenient construction.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(1900..=2199).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [1900, 2199]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year.into(), month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year.into(), month, day)))
    }

    /// Create a date, rolling overflowing components into their neighbours.
    ///
    /// Month 13 becomes January of the following year, day 32 of January
    /// becomes February 1, February 30 becomes March 1 or 2, and day 0 is the
    /// last day of the previous month. Only the resulting date has to lie in
    /// the valid range.
    ///
    /// ```
    /// use lc_time::Date;
    ///
    /// let d = Date::from_ymd_normalized(2023, 2, 30).unwrap();
    /// assert_eq!(d, Date::from_ymd(2023, 3, 2).unwrap());
    ///
    /// let d = Date::from_ymd_normalized(2024, 13, 0).unwrap();
    /// assert_eq!(d, Date::from_ymd(2024, 12, 31).unwrap());
    /// ```
    pub fn from_ymd_normalized(year: i32, month: i32, day: i32) -> Result<Self> {
        let month0 = i64::from(month) - 1;
        let year = i64::from(year) + month0.div_euclid(12);
        let month = (month0.rem_euclid(12) + 1) as u8;
        if !(-MAX_NORMALIZED_YEAR..=MAX_NORMALIZED_YEAR).contains(&year) {
            return Err(Error::Date(format!("year {year} out of range")));
        }
        let year = year as i32;
        let first = i64::from(serial_from_ymd(year, month, 1));
        let serial = first + i64::from(day) - 1;
        let serial = i32::try_from(serial)
            .map_err(|_| Error::Date(format!("serial {serial} out of range")))?;
        Self::from_serial(serial)
    }

    /// Return the evaluation date.
    ///
    /// This is the date set through [`Settings`] when one is installed, and
    /// the local calendar date of the system clock otherwise.
    pub fn today() -> Result<Self> {
        match Settings::instance().evaluation_date_serial() {
            Some(serial) => Self::from_serial(serial),
            None => Self::from_naive(chrono::Local::now().date_naive()),
        }
    }

    /// Convert from a `chrono` calendar date.
    pub fn from_naive(date: NaiveDate) -> Result<Self> {
        let year = u16::try_from(date.year())
            .map_err(|_| Error::Date(format!("year {} out of range", date.year())))?;
        // chrono guarantees month in 1..=12 and day in 1..=31.
        Self::from_ymd(year, date.month() as u8, date.day() as u8)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return `(year, month, day)`.
    pub fn ymd(&self) -> (u16, u8, u8) {
        let (y, m, d) = ymd_from_serial(self.0);
        // The serial range keeps the year within 1900..=2199.
        (y as u16, m, d)
    }

    /// Return the year (1900–2199).
    pub fn year(&self) -> u16 {
        self.ymd().0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        self.ymd().1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        self.ymd().2
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        let (y, _, _) = ymd_from_serial(self.0);
        (self.0 - serial_from_ymd(y, 1, 1) + 1) as u16
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        weekday_from_days(self.0 - SERIAL_OFFSET)
    }

    /// Return the ISO-8601 `(week-year, week)` of the date.
    pub fn iso_week(&self) -> Result<(i32, u8)> {
        let week = NaiveDate::try_from(*self)?.iso_week();
        Ok((week.year(), week.week() as u8))
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days. Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let serial = self
            .0
            .checked_add(n)
            .ok_or_else(|| Error::Date("date arithmetic overflow".into()))?;
        Self::from_serial(serial)
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    /// Return the last day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        let (y, m, _) = ymd_from_serial(self.0);
        Date(serial_from_ymd(y, m, days_in_month(y, m)))
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

// ── Conversions ───────────────────────────────────────────────────────────────

impl TryFrom<Date> for NaiveDate {
    type Error = Error;
    fn try_from(date: Date) -> Result<NaiveDate> {
        let (y, m, d) = date.ymd();
        NaiveDate::from_ymd_opt(y.into(), m.into(), d.into())
            .ok_or_else(|| Error::Date(format!("{date} has no chrono equivalent")))
    }
}

impl TryFrom<NaiveDate> for Date {
    type Error = Error;
    fn try_from(date: NaiveDate) -> Result<Self> {
        Self::from_naive(date)
    }
}

impl std::str::FromStr for Date {
    type Err = Error;

    /// Parse an ISO `YYYY-MM-DD` date.
    fn from_str(s: &str) -> Result<Self> {
        let date = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map_err(|e| Error::Parse(format!("{s:?} is not a YYYY-MM-DD date: {e}")))?;
        Self::from_naive(date)
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = self.ymd();
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = self.ymd();
        write!(f, "Date({y:04}-{m:02}-{d:02})")
    }
}

// ── Calendar helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month (1–12) of a given year.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 31,
    }
}

/// The `(year, month)` preceding `month` (1–12) of `year`.
pub fn previous_month(year: i32, month: u8) -> (i32, u8) {
    if month <= 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// The `(year, month)` following `month` (1–12) of `year`.
pub fn next_month(year: i32, month: u8) -> (i32, u8) {
    if month >= 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

/// Day of the week of a proleptic Gregorian date.
pub fn weekday_of(year: i32, month: u8, day: u8) -> Weekday {
    weekday_from_days(days_from_civil(year, month, day))
}

/// ISO-8601 `(week-year, week)` of a proleptic Gregorian date.
///
/// Weeks start on Monday and week 1 is the week containing the year's first
/// Thursday, so early-January days may belong to the previous year's last
/// week and late-December days to the next year's week 1.
///
/// Returns `None` for an invalid date or a year chrono cannot represent.
pub fn iso_week(year: i32, month: u8, day: u8) -> Option<(i32, u8)> {
    let week = NaiveDate::from_ymd_opt(year, month.into(), day.into())?.iso_week();
    // chrono keeps the week in 1..=53.
    Some((week.year(), week.week() as u8))
}

fn weekday_from_days(days: i32) -> Weekday {
    // Day 0 (1970-01-01) was a Thursday.
    Weekday::from_sunday_index((days + 4).rem_euclid(7) as u8)
        .unwrap_or(Weekday::Sunday)
}

fn serial_from_ymd(year: i32, month: u8, day: u8) -> i32 {
    days_from_civil(year, month, day) + SERIAL_OFFSET
}

fn ymd_from_serial(serial: i32) -> (i32, u8, u8) {
    civil_from_days(serial - SERIAL_OFFSET)
}

/// Days since 1970-01-01 of a proleptic Gregorian date.
fn days_from_civil(year: i32, month: u8, day: u8) -> i32 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = (i32::from(month) + 9) % 12;
    let doy = (153 * mp + 2) / 5 + i32::from(day) - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Inverse of [`days_from_civil`].
fn civil_from_days(days: i32) -> (i32, u8, u8) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
    let year = yoe + era * 400 + i32::from(month <= 2);
    (year, month, day)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serial_anchors() {
        assert_eq!(Date::from_ymd(1900, 1, 1).unwrap().serial(), 1);
        assert_eq!(Date::from_ymd(1900, 1, 31).unwrap().serial(), 31);
        assert_eq!(Date::from_ymd(2024, 2, 10).unwrap().serial(), 45_331);
        assert_eq!(Date::from_ymd(2199, 12, 31).unwrap(), Date::MAX);
    }

    #[test]
    fn test_components() {
        let dates = [
            (1900, 1, 1),
            (1900, 12, 31),
            (2000, 2, 29), // leap
            (2100, 2, 28), // non-leap century
            (2023, 6, 15),
            (2199, 12, 31),
        ];
        for (y, m, d) in dates {
            let date = Date::from_ymd(y, m, d).unwrap();
            assert_eq!(date.ymd(), (y, m, d), "mismatch for {y}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn test_strict_construction() {
        assert!(Date::from_ymd(1899, 12, 31).is_err());
        assert!(Date::from_ymd(2023, 2, 29).is_err());
        assert!(Date::from_ymd(2023, 13, 1).is_err());
        assert!(Date::from_ymd(2023, 4, 0).is_err());
    }

    #[test]
    fn test_normalized_construction() {
        let d = |y, m, d| Date::from_ymd(y, m, d).unwrap();
        assert_eq!(Date::from_ymd_normalized(2024, 1, 32).unwrap(), d(2024, 2, 1));
        assert_eq!(Date::from_ymd_normalized(2024, 2, 30).unwrap(), d(2024, 3, 1));
        assert_eq!(Date::from_ymd_normalized(2024, 3, 0).unwrap(), d(2024, 2, 29));
        assert_eq!(Date::from_ymd_normalized(2023, 0, 15).unwrap(), d(2022, 12, 15));
        assert_eq!(Date::from_ymd_normalized(2023, 14, 1).unwrap(), d(2024, 2, 1));
        assert_eq!(Date::from_ymd_normalized(2024, 1, -1).unwrap(), d(2023, 12, 30));
        assert!(Date::from_ymd_normalized(1900, 1, 0).is_err());
        assert!(Date::from_ymd_normalized(i32::MAX, 12, i32::MAX).is_err());
    }

    #[test]
    fn test_weekday() {
        assert_eq!(Date::from_ymd(1900, 1, 1).unwrap().weekday(), Weekday::Monday);
        assert_eq!(Date::from_ymd(2024, 1, 6).unwrap().weekday(), Weekday::Saturday);
        assert_eq!(weekday_of(2024, 2, 1), Weekday::Thursday);
        assert_eq!(weekday_of(1600, 1, 1), Weekday::Saturday);
    }

    #[test]
    fn test_iso_week() {
        assert_eq!(iso_week(2024, 1, 1), Some((2024, 1)));
        assert_eq!(iso_week(2021, 1, 3), Some((2020, 53)));
        assert_eq!(iso_week(2020, 12, 31), Some((2020, 53)));
        assert_eq!(iso_week(1982, 1, 1), Some((1981, 53)));
        assert_eq!(iso_week(1980, 12, 31), Some((1981, 1)));
        assert_eq!(iso_week(2023, 2, 29), None);
        assert_eq!(iso_week(1_000_000, 1, 1), None);
        assert_eq!(Date::from_ymd(2026, 10, 18).unwrap().iso_week().unwrap(), (2026, 42));
        assert_eq!(Date::MIN.iso_week().unwrap(), (1900, 1));
        assert_eq!(Date::MAX.iso_week().unwrap(), (2200, 1));
    }

    #[test]
    fn test_day_of_year_and_end_of_month() {
        assert_eq!(Date::from_ymd(2024, 12, 31).unwrap().day_of_year(), 366);
        assert_eq!(Date::from_ymd(2023, 3, 1).unwrap().day_of_year(), 60);
        let eom = Date::from_ymd(2024, 2, 15).unwrap().end_of_month();
        assert_eq!(eom.day_of_month(), 29);
    }

    #[test]
    fn test_arithmetic() {
        let d = Date::from_ymd(2023, 1, 1).unwrap();
        let d2 = d.add_days(31).unwrap();
        assert_eq!(d2.ymd(), (2023, 2, 1));
        assert_eq!(d2 - d, 31);
        assert_eq!(d.days_between(d2), 31);
        assert!(Date::MAX.add_days(1).is_err());
        assert!(Date::MIN.add_days(-1).is_err());
    }

    #[test]
    fn test_parse_and_display() {
        let d: Date = "2024-02-10".parse().unwrap();
        assert_eq!(d.ymd(), (2024, 2, 10));
        assert_eq!(d.to_string(), "2024-02-10");
        assert_eq!(format!("{d:?}"), "Date(2024-02-10)");
        assert!("2024-02-30".parse::<Date>().is_err());
        assert!(matches!("tomorrow".parse::<Date>(), Err(Error::Parse(_))));
    }

    #[test]
    fn test_chrono_round_trip() {
        let naive = NaiveDate::from_ymd_opt(1949, 10, 1).unwrap();
        let d = Date::try_from(naive).unwrap();
        assert_eq!(NaiveDate::try_from(d).unwrap(), naive);
        for d in [Date::MIN, Date::MAX] {
            let naive = NaiveDate::try_from(d).unwrap();
            assert_eq!(Date::from_naive(naive).unwrap(), d);
        }
    }

    #[test]
    fn test_civil_inverse() {
        for days in [-25_567, -1, 0, 1, 11_016, 19_765, 84_005] {
            let (y, m, d) = civil_from_days(days);
            assert_eq!(days_from_civil(y, m, d), days);
        }
    }
}
