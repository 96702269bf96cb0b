//! # lunarcal
//!
//! A Gregorian month calendar annotated with the Chinese lunisolar date.
//!
//! This crate is a **façade** that re-exports the workspace crates and adds
//! the text and JSON renderers used by the `lunarcal` binary.
//!
//! ```rust
//! use lunarcal::lunar::convert;
//! use lunarcal::time::build_month_grid;
//!
//! let grid = build_month_grid(2024, 1);
//! assert_eq!(grid.rows().len(), 5);
//! assert_eq!(convert(2024, 2, 10).unwrap().lunar_day, 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error type and process-wide settings.
pub use lc_core as core;

/// Gregorian dates, month grids, navigation and pickers.
pub use lc_time as time;

/// Lunisolar table and conversion.
pub use lc_lunar as lunar;

/// Event catalogue.
pub use lc_events as events;

/// Text and JSON views of a month, a day's events and catalogue coverage.
pub mod render;
