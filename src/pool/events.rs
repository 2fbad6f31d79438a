//! Records of committed pool operations.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{Account, Amount, Liquidity, SwapDirection};

/// One committed operation.  Aborted operations leave no event.
///
/// Serialized externally tagged: `{"swap": {..}}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoolEvent {
    /// Liquidity was added.
    Mint {
        /// Account whose assets were pulled.
        sender: Account,
        /// Account credited with the shares.
        to: Account,
        /// Accepted amount of asset A.
        amount_a: Amount,
        /// Accepted amount of asset B.
        amount_b: Amount,
        /// Shares minted.
        liquidity: Liquidity,
    },
    /// Liquidity was removed.
    Burn {
        /// Account whose shares were burned.
        sender: Account,
        /// Account that received the assets.
        to: Account,
        /// Amount of asset A paid out.
        amount_a: Amount,
        /// Amount of asset B paid out.
        amount_b: Amount,
        /// Shares burned.
        liquidity: Liquidity,
    },
    /// A trade was executed.
    Swap {
        /// Account whose input was pulled.
        sender: Account,
        /// Account that received the output.
        to: Account,
        /// Trade direction.
        direction: SwapDirection,
        /// Input amount.
        amount_in: Amount,
        /// Output amount.
        amount_out: Amount,
    },
}

impl PoolEvent {
    /// The account that initiated the operation.
    #[must_use]
    pub const fn sender(&self) -> Account {
        match self {
            Self::Mint { sender, .. } | Self::Burn { sender, .. } | Self::Swap { sender, .. } => {
                *sender
            }
        }
    }
}

impl fmt::Display for PoolEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mint {
                amount_a,
                amount_b,
                liquidity,
                ..
            } => write!(f, "mint {liquidity} for ({amount_a}, {amount_b})"),
            Self::Burn {
                amount_a,
                amount_b,
                liquidity,
                ..
            } => write!(f, "burn {liquidity} for ({amount_a}, {amount_b})"),
            Self::Swap {
                direction,
                amount_in,
                amount_out,
                ..
            } => write!(f, "swap {direction} {amount_in} -> {amount_out}"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn serializes_externally_tagged() {
        let event = PoolEvent::Swap {
            sender: Account::from_bytes([1u8; 32]),
            to: Account::from_bytes([2u8; 32]),
            direction: SwapDirection::AToB,
            amount_in: Amount::new(100),
            amount_out: Amount::new(363),
        };
        let Ok(json) = serde_json::to_string(&event) else {
            panic!("serialize");
        };
        assert!(json.starts_with("{\"swap\":{"));
        assert_eq!(serde_json::from_str::<PoolEvent>(&json).ok(), Some(event));
        assert_eq!(event.sender(), Account::from_bytes([1u8; 32]));
        assert_eq!(event.to_string(), "swap A->B 100 -> 363");
    }

    #[test]
    fn decodes_full_width_amounts_from_json() {
        let json = format!(
            "{{\"mint\":{{\"sender\":\"{a}\",\"to\":\"{a}\",\"amount_a\":{max},\"amount_b\":4000,\"liquidity\":2000}}}}",
            a = Account::from_bytes([1u8; 32]),
            max = u128::MAX,
        );
        let Ok(event) = serde_json::from_str::<PoolEvent>(&json) else {
            panic!("expected event to decode");
        };
        assert_eq!(
            event,
            PoolEvent::Mint {
                sender: Account::from_bytes([1u8; 32]),
                to: Account::from_bytes([1u8; 32]),
                amount_a: Amount::MAX,
                amount_b: Amount::new(4_000),
                liquidity: Liquidity::new(2_000),
            }
        );
    }
}
