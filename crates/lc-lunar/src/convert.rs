//! Gregorian to lunisolar conversion.
//!
//! The day count from the epoch (1900-01-31, lunar new year 1900) is consumed
//! one lunisolar year at a time, then one month at a time through
//! [`MonthWalk`](crate::month::MonthWalk). What is left is the day of month.

use lc_core::errors::{Error, Result};
use lc_time::Date;
use tracing::{debug, trace};

use crate::lunar_date::LunarDate;
use crate::month::{LunarMonth, MonthSpan};
use crate::table::LunarTable;
use crate::year_info::LunarYearInfo;

/// Serial of 1900-01-31, lunisolar day 1900/1/1.
const EPOCH_SERIAL: i32 = 31;

/// Convert a Gregorian `(year, month, day)` into its lunisolar date.
///
/// `month` is 1-based. Overflowing components roll over the way
/// [`Date::from_ymd_normalized`] rolls them (February 30 is a day in March).
///
/// # Errors
/// [`Error::OutOfRange`] when `year` is outside 1900–2100 or the date falls
/// before 1900-01-31.
///
/// ```
/// use lc_lunar::convert;
///
/// let new_year = convert(2024, 2, 10).unwrap();
/// assert_eq!(
///     (new_year.lunar_year, new_year.lunar_month, new_year.lunar_day),
///     (2024, 1, 1)
/// );
/// assert!(convert(1900, 1, 30).unwrap_err().is_out_of_range());
/// ```
pub fn convert(year: i32, month: i32, day: i32) -> Result<LunarDate> {
    let out_of_range = || Error::OutOfRange { year, month, day };
    if !LunarTable::years().contains(&year) {
        return Err(out_of_range());
    }
    let date = Date::from_ymd_normalized(year, month, day).map_err(|_| out_of_range())?;
    let lunar = locate(date).ok_or_else(out_of_range)?;
    debug!(%date, lunar_year = lunar.lunar_year, lunar_month = %lunar.month(), lunar_day = lunar.lunar_day, "converted");
    Ok(lunar)
}

/// Convert an already-built [`Date`].
///
/// # Errors
/// [`Error::OutOfRange`] when `date` falls outside the table.
pub fn convert_date(date: Date) -> Result<LunarDate> {
    let (y, m, d) = date.ymd();
    convert(y.into(), m.into(), d.into())
}

fn locate(date: Date) -> Option<LunarDate> {
    let offset = date.serial() - EPOCH_SERIAL;
    if offset < 0 {
        return None;
    }
    let (info, offset) = locate_year(offset)?;
    let (span, offset) = locate_month(info, offset)?;
    let (gregorian_year, gregorian_month, gregorian_day) = date.ymd();
    Some(LunarDate {
        lunar_year: info.year(),
        lunar_month: span.month.number(),
        is_leap_month: span.month.is_leap(),
        // `locate_month` leaves less than one month.
        lunar_day: offset as u8 + 1,
        gregorian_year: gregorian_year.into(),
        gregorian_month,
        gregorian_day,
        weekday: date.weekday(),
        is_today: Date::today().is_ok_and(|today| today == date),
    })
}

/// The year containing day `offset` of the table, with the days left over.
fn locate_year(mut offset: i32) -> Option<(LunarYearInfo, i32)> {
    for info in LunarYearInfo::all() {
        let days = i32::from(info.year_days());
        if offset < days {
            trace!(year = info.year(), offset, "located lunar year");
            return Some((info, offset));
        }
        offset -= days;
    }
    None
}

/// The month containing day `offset` of the year, with the days left over.
fn locate_month(info: LunarYearInfo, mut offset: i32) -> Option<(MonthSpan, i32)> {
    let mut walk = info.months();
    while let Some(span) = walk.next() {
        let days = i32::from(span.days);
        if offset < days {
            trace!(month = %span.month, offset, phase = ?walk.phase(), "located lunar month");
            return Some((span, offset));
        }
        offset -= days;
    }
    None
}

/// Gregorian date of lunisolar day 1 of `month` in lunisolar `year`.
///
/// # Errors
/// [`Error::ArgumentOutOfRange`] when `year` is outside the table, and
/// [`Error::Date`] when the year has no such month.
pub fn first_day_of(year: i32, month: LunarMonth) -> Result<Date> {
    let mut offset = 0i32;
    for info in LunarYearInfo::all().take_while(|info| info.year() < year) {
        offset += i32::from(info.year_days());
    }
    let info = LunarYearInfo::new(year)?;
    for span in info.months() {
        if span.month == month {
            return Date::from_serial(EPOCH_SERIAL + offset);
        }
        offset += i32::from(span.days);
    }
    Err(Error::Date(format!("lunar year {year} has no month {month}")))
}
