//! Packed lunisolar year table, 1900–2100.
//!
//! Each entry describes the shape of the lunisolar year that begins in the
//! Gregorian year `1900 + index`:
//!
//! | Bits   | Meaning                                                    |
//! |--------|------------------------------------------------------------|
//! | 0–3    | 1-based index of the leap month, 0 if the year has none    |
//! | 4–15   | months 12 down to 1: set = 30 days, clear = 29 days        |
//! | 16     | leap month length: set = 30 days, clear = 29 days          |
//!
//! Month 1 is bit 15 and month 12 is bit 4. Decoding lives in
//! [`LunarYearInfo`](crate::year_info::LunarYearInfo).

use std::ops::RangeInclusive;

use lc_core::errors::{Error, Result};

/// The packed lunisolar year table.
pub struct LunarTable;

impl LunarTable {
    /// First lunisolar year in the table.
    pub const FIRST_YEAR: i32 = 1900;

    /// Last lunisolar year in the table.
    pub const LAST_YEAR: i32 = 2100;

    /// Number of entries.
    pub const LEN: usize = 201;

    /// Years covered by the table.
    pub fn years() -> RangeInclusive<i32> {
        Self::FIRST_YEAR..=Self::LAST_YEAR
    }

    /// All `(year, entry)` pairs in ascending year order.
    pub fn entries() -> impl Iterator<Item = (i32, u32)> {
        (Self::FIRST_YEAR..).zip(LUNAR_INFO.iter().copied())
    }

    /// Packed entry for `year`, or `None` outside the table.
    pub fn get(year: i32) -> Option<u32> {
        let index = usize::try_from(year.checked_sub(Self::FIRST_YEAR)?).ok()?;
        LUNAR_INFO.get(index).copied()
    }

    /// Packed entry for `year`.
    ///
    /// # Errors
    /// [`Error::ArgumentOutOfRange`] when `year` is outside 1900–2100.
    pub fn entry(year: i32) -> Result<u32> {
        Self::get(year).ok_or_else(|| {
            Error::argument_out_of_range("lunar year", year, Self::FIRST_YEAR, Self::LAST_YEAR)
        })
    }
}

static LUNAR_INFO: [u32; LunarTable::LEN] = [
    // 1900-1909
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2,
    // 1910-1919
    0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977,
    // 1920-1929
    0x04970, 0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970,
    // 1930-1939
    0x06566, 0x0d4a0, 0x0ea50, 0x06e95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950,
    // 1940-1949
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557,
    // 1950-1959
    0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5b0, 0x14573, 0x052b0, 0x0a9a8, 0x0e950, 0x06aa0,
    // 1960-1969
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0,
    // 1970-1979
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b6a0, 0x195a6,
    // 1980-1989
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570,
    // 1990-1999
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x05ac0, 0x0ab60, 0x096d5, 0x092e0,
    // 2000-2009
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5,
    // 2010-2019
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930,
    // 2020-2029
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530,
    // 2030-2039
    0x05aa0, 0x076a3, 0x096d0, 0x04afb, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45,
    // 2040-2049
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0,
    // 2050-2059
    0x14b63, 0x09370, 0x049f8, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06b20, 0x1a6c4, 0x0aae0,
    // 2060-2069
    0x0a2e0, 0x0d2e3, 0x0c960, 0x0d557, 0x0d4a0, 0x0da50, 0x05d55, 0x056a0, 0x0a6d0, 0x055d4,
    // 2070-2079
    0x052d0, 0x0a9b8, 0x0a950, 0x0b4a0, 0x0b6a6, 0x0ad50, 0x055a0, 0x0aba4, 0x0a5b0, 0x052b0,
    // 2080-2089
    0x0b273, 0x06930, 0x07337, 0x06aa0, 0x0ad50, 0x14b55, 0x04b60, 0x0a570, 0x054e4, 0x0d160,
    // 2090-2099
    0x0e968, 0x0d520, 0x0daa0, 0x16aa6, 0x056d0, 0x04ae0, 0x0a9d4, 0x0a2d0, 0x0d150, 0x0f252,
    // 2100
    0x0d520,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_1900_to_2100() {
        assert_eq!(LunarTable::LEN, 201);
        assert_eq!(LunarTable::years().count(), LunarTable::LEN);
        assert_eq!(LunarTable::entries().last(), Some((2100, 0x0d520)));
        assert_eq!(LunarTable::get(1900), Some(0x04bd8));
        assert_eq!(LunarTable::get(2024), Some(0x04b60));
        assert_eq!(LunarTable::get(2100), Some(0x0d520));
    }

    #[test]
    fn outside_table() {
        assert_eq!(LunarTable::get(1899), None);
        assert_eq!(LunarTable::get(2101), None);
        assert_eq!(LunarTable::get(i32::MIN), None);
        assert_eq!(
            LunarTable::entry(2101),
            Err(Error::ArgumentOutOfRange {
                name: "lunar year",
                value: 2101,
                min: 1900,
                max: 2100,
            })
        );
    }

    #[test]
    fn entries_fit_in_seventeen_bits() {
        for year in LunarTable::years() {
            let entry = LunarTable::entry(year).unwrap();
            assert_eq!(entry >> 17, 0, "{year}: {entry:#07x}");
            assert!(entry & 0xf <= 12, "{year}: leap month index {}", entry & 0xf);
        }
    }
}
