//! Wall-clock capability.
//!
//! The sorting engine never reads the system time directly. It is handed a
//! [`Clock`] at construction so tests can drive time by hand.

use std::cell::Cell;
use std::fmt::Debug;
use std::rc::Rc;

/// Source of the current time in milliseconds since the Unix epoch.
pub trait Clock: Debug {
    /// Current time in milliseconds since the Unix epoch.
    fn now_ms(&self) -> i64;
}

/// Clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Hand-driven clock.
///
/// Clones share the same instant, so a test can keep one handle and give
/// another to the engine.
///
/// # Examples
///
/// ```
/// use joke_sorter::infrastructure::{Clock, ManualClock};
///
/// let clock = ManualClock::new(1_000);
/// let engine_handle = clock.clone();
/// clock.advance(7_300);
/// assert_eq!(engine_handle.now_ms(), 8_300);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<i64>>,
}

impl ManualClock {
    #[must_use]
    pub fn new(start_ms: i64) -> Self {
        Self {
            now: Rc::new(Cell::new(start_ms)),
        }
    }

    /// Moves the clock forward by `millis`.
    pub fn advance(&self, millis: i64) {
        self.now.set(self.now.get() + millis);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> i64 {
        self.now.get()
    }
}
