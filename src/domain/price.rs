//! Fixed-point price scaled by 10^18.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Price of one asset in units of the other, scaled by [`Price::SCALE`].
///
/// A raw value of `4 * 10^18` means "4 units of the quote asset per unit
/// of the base asset".  The value is an integer; it is produced by floor
/// division and never involves floating point.
///
/// # Examples
///
/// ```
/// use pairswap::domain::Price;
///
/// let p = Price::from_raw(4 * Price::SCALE);
/// assert_eq!(p.integer_part(), 4);
/// assert_eq!(p.to_string(), "4.000000000000000000");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(u128);

impl Price {
    /// Fixed-point scale: `10^18`.
    pub const SCALE: u128 = 1_000_000_000_000_000_000;

    /// Wraps an already scaled value.
    #[must_use]
    pub const fn from_raw(raw: u128) -> Self {
        Self(raw)
    }

    /// Returns the scaled value.
    #[must_use]
    pub const fn raw(&self) -> u128 {
        self.0
    }

    /// Whole units, truncated.
    #[must_use]
    pub const fn integer_part(&self) -> u128 {
        self.0 / Self::SCALE
    }

    /// Fractional part, in units of `10^-18`.
    #[must_use]
    pub const fn fractional_part(&self) -> u128 {
        self.0 % Self::SCALE
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:018}", self.integer_part(), self.fractional_part())
    }
}
