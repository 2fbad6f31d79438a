//! Clock adapters.

use std::cell::Cell;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::domain::Timestamp;
use crate::traits::Clock;

/// Wall-clock time in UNIX seconds.
///
/// A system clock set before 1970 reads as `0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Timestamp::from_secs(secs)
    }
}

/// A clock that only moves when told to.  Used by simulations and tests.
///
/// # Examples
///
/// ```
/// use pairswap::adapters::ManualClock;
/// use pairswap::domain::Timestamp;
/// use pairswap::traits::Clock;
///
/// let clock = ManualClock::new(Timestamp::from_secs(100));
/// clock.advance(20);
/// assert_eq!(clock.now(), Timestamp::from_secs(120));
/// ```
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Timestamp>,
}

impl ManualClock {
    /// Creates a clock reading `start`.
    #[must_use]
    pub fn new(start: Timestamp) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    /// Sets the current reading.
    pub fn set(&self, now: Timestamp) {
        self.now.set(now);
    }

    /// Moves the clock forward by `secs`, saturating.
    pub fn advance(&self, secs: u64) {
        self.now.set(self.now.get().saturating_add_secs(secs));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        self.now.get()
    }
}
