//! Asset identity.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::hex32;
use crate::error::PoolError;

/// Identity of a fungible asset, as a fixed 32-byte address.
///
/// Displayed and serialized as `0x`-prefixed hex.
///
/// # Examples
///
/// ```
/// use pairswap::domain::TokenAddress;
///
/// let usdc = TokenAddress::from_bytes([1u8; 32]);
/// let parsed: TokenAddress = usdc.to_string().parse().expect("hex");
/// assert_eq!(parsed, usdc);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenAddress([u8; 32]);

impl TokenAddress {
    /// Creates a `TokenAddress` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }
}

impl fmt::Display for TokenAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        hex32::write(&self.0, f)
    }
}

impl FromStr for TokenAddress {
    type Err = PoolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex32::parse(s).map(Self)
    }
}

impl Serialize for TokenAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TokenAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
