//! Caller-supplied parameters of the three mutating pool operations.
//!
//! Requests are plain data: every field is validated by the pool when the
//! operation runs, against the pool's pair, reserves and clock.

use serde::{Deserialize, Serialize};

use super::{Account, Amount, Liquidity, Timestamp, TokenAddress};

/// Parameters of a deposit.
///
/// `amount_*_desired` are upper bounds; the pool accepts amounts at the
/// current reserve ratio.  `amount_*_min` are slippage floors on the
/// accepted amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddLiquidity {
    /// Asset A, as the caller believes it to be.
    pub token_a: TokenAddress,
    /// Asset B, as the caller believes it to be.
    pub token_b: TokenAddress,
    /// Most asset A the caller is willing to deposit.
    pub amount_a_desired: Amount,
    /// Most asset B the caller is willing to deposit.
    pub amount_b_desired: Amount,
    /// Least asset A the caller accepts to deposit.
    pub amount_a_min: Amount,
    /// Least asset B the caller accepts to deposit.
    pub amount_b_min: Amount,
    /// Owner credited with the minted shares.
    pub to: Account,
    /// Latest time at which the deposit may execute.
    pub deadline: Timestamp,
}

/// Parameters of a withdrawal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveLiquidity {
    /// Asset A.
    pub token_a: TokenAddress,
    /// Asset B.
    pub token_b: TokenAddress,
    /// Shares to burn from the caller's balance.
    pub liquidity: Liquidity,
    /// Least asset A the caller accepts to receive.
    pub amount_a_min: Amount,
    /// Least asset B the caller accepts to receive.
    pub amount_b_min: Amount,
    /// Recipient of both assets.
    pub to: Account,
    /// Latest time at which the withdrawal may execute.
    pub deadline: Timestamp,
}

/// Parameters of an exact-input swap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapExactIn {
    /// Exact amount of the input asset sold.
    pub amount_in: Amount,
    /// Least output the caller accepts.
    pub amount_out_min: Amount,
    /// Input asset followed by output asset.  Exactly two entries.
    pub path: Vec<TokenAddress>,
    /// Recipient of the output asset.
    pub to: Account,
    /// Latest time at which the swap may execute.
    pub deadline: Timestamp,
}

impl SwapExactIn {
    /// Builds a request trading `amount_in` of `input` for `output`.
    #[must_use]
    pub fn new(
        amount_in: Amount,
        amount_out_min: Amount,
        input: TokenAddress,
        output: TokenAddress,
        to: Account,
        deadline: Timestamp,
    ) -> Self {
        Self {
            amount_in,
            amount_out_min,
            path: vec![input, output],
            to,
            deadline,
        }
    }
}
