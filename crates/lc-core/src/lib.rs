//! # lc-core
//!
//! Core error definitions and process-wide settings for lunarcal.
//!
//! This crate provides the building blocks shared across the other crates in
//! the workspace: the error hierarchy with the `ensure!` macro, and the
//! `Settings` singleton that holds the evaluation ("today") date.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Global library settings (evaluation date).
pub mod settings;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::{ScopedEvaluationDate, Settings};
