//! Global library settings.
//!
//! [`Settings`] holds the **evaluation date**: the date treated as "today"
//! when a conversion sets its `is_today` flag. It is a process-wide
//! singleton accessed via a `std::sync::OnceLock`.
//!
//! Thread safety: the evaluation date is stored behind a `Mutex` so that it
//! can be changed from any thread. Code that overrides the date should
//! restore it when done, most easily through [`ScopedEvaluationDate`].

use std::sync::{Mutex, MutexGuard, OnceLock};

/// Process-wide settings used by lunarcal.
///
/// The only setting is the evaluation date. When unset, callers fall back to
/// the local system clock.
pub struct Settings {
    /// Evaluation date as a day serial (see `lc_time::Date::serial`).
    evaluation_date: Mutex<Option<i32>>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            evaluation_date: Mutex::new(None),
        })
    }

    fn slot(&self) -> MutexGuard<'_, Option<i32>> {
        // The guarded value is a plain `Option<i32>`; a panic while holding
        // the lock cannot leave it half-written.
        self.evaluation_date
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Return the evaluation date serial, or `None` to use the system clock.
    pub fn evaluation_date_serial(&self) -> Option<i32> {
        *self.slot()
    }

    /// Set the evaluation date as a day serial.
    pub fn set_evaluation_date_serial(&self, serial: i32) {
        *self.slot() = Some(serial);
    }

    /// Clear the evaluation date, resetting it to "use today".
    pub fn reset_evaluation_date(&self) {
        *self.slot() = None;
    }
}

/// Overrides the evaluation date for the lifetime of the guard and restores
/// the previous value on drop.
///
/// ```
/// use lc_core::{ScopedEvaluationDate, Settings};
///
/// {
///     let _guard = ScopedEvaluationDate::new(45_000);
///     assert_eq!(Settings::instance().evaluation_date_serial(), Some(45_000));
/// }
/// ```
#[must_use = "the previous evaluation date is restored when the guard is dropped"]
pub struct ScopedEvaluationDate {
    previous: Option<i32>,
}

impl ScopedEvaluationDate {
    /// Install `serial` as the evaluation date until the guard is dropped.
    pub fn new(serial: i32) -> Self {
        let settings = Settings::instance();
        let previous = settings.evaluation_date_serial();
        settings.set_evaluation_date_serial(serial);
        ScopedEvaluationDate { previous }
    }
}

impl Drop for ScopedEvaluationDate {
    fn drop(&mut self) {
        let settings = Settings::instance();
        match self.previous {
            Some(serial) => settings.set_evaluation_date_serial(serial),
            None => settings.reset_evaluation_date(),
        }
    }
}
