//! The pool's fixed, ordered asset pair.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::TokenAddress;
use crate::error::PoolError;

/// One side of the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PairSide {
    /// Asset A, tracked by `reserve_a`.
    A,
    /// Asset B, tracked by `reserve_b`.
    B,
}

impl PairSide {
    /// Returns the other side.
    #[must_use]
    pub const fn opposite(&self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

/// Direction of a trade through the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwapDirection {
    /// Sell asset A, receive asset B.
    AToB,
    /// Sell asset B, receive asset A.
    BToA,
}

impl SwapDirection {
    /// Side whose reserve receives the input.
    #[must_use]
    pub const fn input_side(&self) -> PairSide {
        match self {
            Self::AToB => PairSide::A,
            Self::BToA => PairSide::B,
        }
    }

    /// Side whose reserve pays the output.
    #[must_use]
    pub const fn output_side(&self) -> PairSide {
        self.input_side().opposite()
    }
}

impl fmt::Display for SwapDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AToB => write!(f, "A->B"),
            Self::BToA => write!(f, "B->A"),
        }
    }
}

/// The two assets a pool trades, in pool order.
///
/// Unlike a canonically sorted pair, the order is kept exactly as given:
/// the first asset is the one whose balance is tracked as reserve A.  The
/// pair is fixed when the pool is created and never changes.
///
/// # Examples
///
/// ```
/// use pairswap::domain::{SwapDirection, TokenAddress, TokenPair};
///
/// let a = TokenAddress::from_bytes([2u8; 32]);
/// let b = TokenAddress::from_bytes([1u8; 32]);
/// let pair = TokenPair::new(a, b).expect("distinct assets");
///
/// assert_eq!(pair.first(), a);
/// assert_eq!(pair.direction(&b, &a), Ok(SwapDirection::BToA));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPair", into = "RawPair")]
pub struct TokenPair {
    token_a: TokenAddress,
    token_b: TokenAddress,
}

impl TokenPair {
    /// Creates the pair `(token_a, token_b)`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidToken`] if both addresses are equal.
    pub fn new(token_a: TokenAddress, token_b: TokenAddress) -> Result<Self, PoolError> {
        if token_a == token_b {
            return Err(PoolError::InvalidToken(
                "token pair requires two distinct addresses",
            ));
        }
        Ok(Self { token_a, token_b })
    }

    /// Returns asset A.
    #[must_use]
    pub const fn first(&self) -> TokenAddress {
        self.token_a
    }

    /// Returns asset B.
    #[must_use]
    pub const fn second(&self) -> TokenAddress {
        self.token_b
    }

    /// Returns the asset on `side`.
    #[must_use]
    pub const fn token(&self, side: PairSide) -> TokenAddress {
        match side {
            PairSide::A => self.token_a,
            PairSide::B => self.token_b,
        }
    }

    /// Returns `true` if `token` is one of the two assets.
    #[must_use]
    pub fn contains(&self, token: &TokenAddress) -> bool {
        self.token_a == *token || self.token_b == *token
    }

    /// Returns `true` if `(token_a, token_b)` is exactly this pair, in order.
    #[must_use]
    pub fn matches(&self, token_a: &TokenAddress, token_b: &TokenAddress) -> bool {
        self.token_a == *token_a && self.token_b == *token_b
    }

    /// Resolves a trade from `input` to `output`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidPair`] unless `(input, output)` is this
    /// pair in either order.
    pub fn direction(
        &self,
        input: &TokenAddress,
        output: &TokenAddress,
    ) -> Result<SwapDirection, PoolError> {
        if self.matches(input, output) {
            Ok(SwapDirection::AToB)
        } else if self.matches(output, input) {
            Ok(SwapDirection::BToA)
        } else {
            Err(PoolError::InvalidPair)
        }
    }
}

#[derive(Serialize, Deserialize)]
struct RawPair {
    token_a: TokenAddress,
    token_b: TokenAddress,
}

impl TryFrom<RawPair> for TokenPair {
    type Error = PoolError;

    fn try_from(raw: RawPair) -> Result<Self, Self::Error> {
        Self::new(raw.token_a, raw.token_b)
    }
}

impl From<TokenPair> for RawPair {
    fn from(pair: TokenPair) -> Self {
        Self {
            token_a: pair.token_a,
            token_b: pair.token_b,
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn addr(byte: u8) -> TokenAddress {
        TokenAddress::from_bytes([byte; 32])
    }

    fn pair() -> TokenPair {
        let Ok(pair) = TokenPair::new(addr(9), addr(3)) else {
            panic!("expected valid pair");
        };
        pair
    }

    #[test]
    fn keeps_given_order() {
        let p = pair();
        assert_eq!(p.first(), addr(9));
        assert_eq!(p.second(), addr(3));
        assert_eq!(p.token(PairSide::A), addr(9));
        assert_eq!(p.token(PairSide::B), addr(3));
    }

    #[test]
    fn rejects_identical_assets() {
        assert_eq!(
            TokenPair::new(addr(1), addr(1)),
            Err(PoolError::InvalidToken(
                "token pair requires two distinct addresses"
            ))
        );
    }

    #[test]
    fn matches_is_order_sensitive() {
        let p = pair();
        assert!(p.matches(&addr(9), &addr(3)));
        assert!(!p.matches(&addr(3), &addr(9)));
        assert!(p.contains(&addr(3)));
        assert!(!p.contains(&addr(4)));
    }

    #[test]
    fn direction_both_ways() {
        let p = pair();
        assert_eq!(p.direction(&addr(9), &addr(3)), Ok(SwapDirection::AToB));
        assert_eq!(p.direction(&addr(3), &addr(9)), Ok(SwapDirection::BToA));
    }

    #[test]
    fn direction_rejects_foreign_or_repeated_assets() {
        let p = pair();
        assert_eq!(p.direction(&addr(9), &addr(4)), Err(PoolError::InvalidPair));
        assert_eq!(p.direction(&addr(9), &addr(9)), Err(PoolError::InvalidPair));
    }

    #[test]
    fn direction_sides() {
        assert_eq!(SwapDirection::AToB.input_side(), PairSide::A);
        assert_eq!(SwapDirection::AToB.output_side(), PairSide::B);
        assert_eq!(SwapDirection::BToA.output_side(), PairSide::A);
        assert_eq!(SwapDirection::BToA.to_string(), "B->A");
    }

    #[test]
    fn deserialize_rejects_identical_assets() {
        let same = format!(
            "{{\"token_a\":\"{}\",\"token_b\":\"{}\"}}",
            addr(1),
            addr(1)
        );
        assert!(serde_json::from_str::<TokenPair>(&same).is_err());
        let Ok(json) = serde_json::to_string(&pair()) else {
            panic!("serialize");
        };
        assert_eq!(serde_json::from_str::<TokenPair>(&json).ok(), Some(pair()));
    }
}
