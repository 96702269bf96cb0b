//! Decoding of one packed table entry.

use lc_core::errors::{Error, Result};

use crate::month::MonthWalk;
use crate::table::LunarTable;

/// Days in a lunisolar year made of twelve 29-day months.
const BASE_YEAR_DAYS: u16 = 12 * 29;

/// Bits 4–15: one flag per ordinary month.
const MONTH_FLAGS: u32 = 0xfff0;

/// Bit 16: the leap month has 30 days.
const LONG_LEAP_FLAG: u32 = 0x1_0000;

/// Bits 0–3: leap-month index.
const LEAP_INDEX: u32 = 0xf;

/// Shape of one lunisolar year, decoded from [`LunarTable`].
///
/// ```
/// use lc_lunar::LunarYearInfo;
///
/// let y2023 = LunarYearInfo::new(2023).unwrap();
/// assert_eq!(y2023.leap_month(), 2);
/// assert_eq!(y2023.leap_month_days(), 29);
/// assert_eq!(y2023.year_days(), 384);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LunarYearInfo {
    year: i32,
    bits: u32,
}

impl LunarYearInfo {
    /// Decode the table entry for lunisolar `year`.
    ///
    /// # Errors
    /// [`Error::ArgumentOutOfRange`] when `year` is outside 1900–2100.
    pub fn new(year: i32) -> Result<Self> {
        Ok(LunarYearInfo {
            year,
            bits: LunarTable::entry(year)?,
        })
    }

    /// Every year of the table, in ascending order.
    pub fn all() -> impl Iterator<Item = LunarYearInfo> {
        LunarTable::entries().map(|(year, bits)| LunarYearInfo { year, bits })
    }

    /// The lunisolar year this entry describes.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// 1-based index of the ordinary month the leap month follows; 0 when
    /// the year has no leap month.
    pub fn leap_month(&self) -> u8 {
        (self.bits & LEAP_INDEX) as u8
    }

    /// Length of the leap month: 0 without one, otherwise 29 or 30.
    pub fn leap_month_days(&self) -> u8 {
        if self.leap_month() == 0 {
            0
        } else if self.bits & LONG_LEAP_FLAG != 0 {
            30
        } else {
            29
        }
    }

    /// Length of ordinary month `month` (1–12): 29 or 30.
    ///
    /// # Errors
    /// [`Error::ArgumentOutOfRange`] when `month` is outside 1–12.
    pub fn month_days(&self, month: u8) -> Result<u8> {
        if !(1..=12).contains(&month) {
            return Err(Error::argument_out_of_range("lunar month", month, 1u8, 12u8));
        }
        Ok(self.ordinary_days(month))
    }

    /// [`month_days`](Self::month_days) for a month already known to be in
    /// range.
    pub(crate) fn ordinary_days(&self, month: u8) -> u8 {
        debug_assert!((1..=12).contains(&month));
        if self.bits & (LONG_LEAP_FLAG >> month) != 0 {
            30
        } else {
            29
        }
    }

    /// Total days of the year, leap month included.
    pub fn year_days(&self) -> u16 {
        BASE_YEAR_DAYS + (self.bits & MONTH_FLAGS).count_ones() as u16 + u16::from(self.leap_month_days())
    }

    /// Number of months: 13 with a leap month, 12 otherwise.
    pub fn month_count(&self) -> usize {
        if self.leap_month() == 0 {
            12
        } else {
            13
        }
    }

    /// Walk the months of the year in order, leap month included.
    pub fn months(&self) -> MonthWalk {
        MonthWalk::new(*self)
    }
}
