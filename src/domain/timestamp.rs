//! Points in time for deadline checks.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A point in time, in whole seconds.
///
/// The pool only compares timestamps: a caller-supplied deadline against
/// the clock's current reading.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Timestamp(u64);

impl Timestamp {
    /// Latest representable time; a deadline that never expires.
    pub const MAX: Self = Self(u64::MAX);

    /// Creates a timestamp from seconds.
    #[must_use]
    pub const fn from_secs(secs: u64) -> Self {
        Self(secs)
    }

    /// Returns the number of seconds.
    #[must_use]
    pub const fn as_secs(&self) -> u64 {
        self.0
    }

    /// Returns `true` if `self` is strictly later than `deadline`.
    ///
    /// A deadline equal to the current time is still valid.
    #[must_use]
    pub const fn is_after(&self, deadline: Self) -> bool {
        self.0 > deadline.0
    }

    /// Returns the timestamp `secs` seconds later, saturating at [`Timestamp::MAX`].
    #[must_use]
    pub const fn saturating_add_secs(&self, secs: u64) -> Self {
        Self(self.0.saturating_add(secs))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}
