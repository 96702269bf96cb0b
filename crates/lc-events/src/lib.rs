//! # lc-events
//!
//! A static catalogue of dated events, filtered by Gregorian date components
//! and grouped for display beside the calendar.
//!
//! ```
//! use lc_events::{EventCatalog, GroupBy};
//! use lc_time::Date;
//!
//! let catalog = EventCatalog::from_json_str(
//!     r#"[{"month": 10, "date": 1, "title": "National Day", "frequency": "annual", "country": "CN"}]"#,
//! )
//! .unwrap();
//! let day = Date::from_ymd(2024, 10, 1).unwrap();
//! let selection = catalog.grouped(day, GroupBy::Country);
//! assert_eq!(selection.total, 1);
//! assert_eq!(selection.groups[0].key, "CN");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `EventCatalog`, selection and grouping.
pub mod catalog;

/// `Event` and `Frequency`.
pub mod event;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use catalog::{EventCatalog, EventGroup, EventSelection, GroupBy};
pub use event::{Event, Frequency};
