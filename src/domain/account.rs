//! Identity of a party interacting with the pool.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::hex32;
use crate::error::PoolError;

/// A caller, share owner, recipient or custody account.
///
/// The pool itself is identified by an `Account` too: it is the account
/// that holds the reserves on both asset ledgers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Account([u8; 32]);

impl Account {
    /// Creates an `Account` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// The all-zero account. Never a valid pool custody account.
    #[must_use]
    pub const fn zero() -> Self {
        Self([0u8; 32])
    }

    /// Returns `true` for the all-zero account.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        hex32::write(&self.0, f)
    }
}

impl FromStr for Account {
    type Err = PoolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex32::parse(s).map(Self)
    }
}

impl Serialize for Account {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Account {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_account() {
        assert!(Account::zero().is_zero());
        assert!(!Account::from_bytes([1u8; 32]).is_zero());
    }

    #[test]
    fn text_round_trip() {
        let alice = Account::from_bytes([0xa1; 32]);
        assert_eq!(alice.to_string().parse::<Account>(), Ok(alice));
    }
}
