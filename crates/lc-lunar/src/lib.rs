//! # lc-lunar
//!
//! Table-driven conversion from Gregorian dates to the Chinese lunisolar
//! calendar for lunisolar years 1900–2100.
//!
//! ```
//! use lc_lunar::{convert, LunarMonth};
//!
//! let d = convert(2023, 3, 22).unwrap();
//! assert_eq!(d.month(), LunarMonth::Leap(2));
//! assert_eq!(d.lunar_day, 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `convert`: Gregorian to lunisolar conversion.
pub mod convert;

/// `LunarDate`: a conversion result.
pub mod lunar_date;

/// `LunarMonth` and the month walk of one year.
pub mod month;

/// `LunarTable`: the packed year table.
pub mod table;

/// `LunarYearInfo`: decoded year shape.
pub mod year_info;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use convert::{convert, convert_date, first_day_of};
pub use lunar_date::LunarDate;
pub use month::{LunarMonth, MonthSpan, MonthWalk, WalkPhase};
pub use table::LunarTable;
pub use year_info::LunarYearInfo;
