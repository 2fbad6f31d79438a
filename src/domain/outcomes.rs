//! Results returned by the mutating pool operations.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Amount, Liquidity};

/// Result of a committed deposit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AddLiquidityOutcome {
    /// Asset A taken from the caller.
    pub amount_a: Amount,
    /// Asset B taken from the caller.
    pub amount_b: Amount,
    /// Shares credited to the recipient.
    pub liquidity: Liquidity,
}

impl fmt::Display for AddLiquidityOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "deposited (a={}, b={}) for {} shares",
            self.amount_a, self.amount_b, self.liquidity
        )
    }
}

/// Result of a committed withdrawal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RemoveLiquidityOutcome {
    /// Asset A paid to the recipient.
    pub amount_a: Amount,
    /// Asset B paid to the recipient.
    pub amount_b: Amount,
}

impl fmt::Display for RemoveLiquidityOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "withdrew (a={}, b={})", self.amount_a, self.amount_b)
    }
}

/// Result of a committed swap.
///
/// # Examples
///
/// ```
/// use pairswap::domain::{Amount, SwapOutcome};
///
/// let out = SwapOutcome { amount_in: Amount::new(100), amount_out: Amount::new(363) };
/// assert_eq!(out.amounts(), [Amount::new(100), Amount::new(363)]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SwapOutcome {
    /// Input asset taken from the caller.
    pub amount_in: Amount,
    /// Output asset paid to the recipient.
    pub amount_out: Amount,
}

impl SwapOutcome {
    /// The amounts along the path: `[amount_in, amount_out]`.
    #[must_use]
    pub const fn amounts(&self) -> [Amount; 2] {
        [self.amount_in, self.amount_out]
    }
}

impl fmt::Display for SwapOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "swapped {} for {}", self.amount_in, self.amount_out)
    }
}
