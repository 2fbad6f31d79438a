//! Deposits: turning a pair of amounts into liquidity shares.
//!
//! The first deposit fixes the price: both desired amounts are accepted
//! and `⌊√(a × b)⌋` shares are minted.  Later deposits are accepted at the
//! current reserve ratio, and the recipient gets the smaller of the two
//! proportional shares so rounding never dilutes existing holders.

use tracing::debug;

use crate::domain::{Account, AddLiquidity, AddLiquidityOutcome, Amount, Liquidity, PairSide, Rounding};
use crate::error::PoolError;
use crate::math::{mul_div, sqrt_product};
use crate::traits::{AssetLedger, Clock};

use super::events::PoolEvent;
use super::state::PoolState;
use super::ConstantProductPool;

/// Accepted amounts and the shares they mint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Deposit {
    pub(crate) amount_a: Amount,
    pub(crate) amount_b: Amount,
    pub(crate) liquidity: Liquidity,
}

/// Sizes a deposit against the current state without changing it.
pub(crate) fn plan_deposit(state: &PoolState, request: &AddLiquidity) -> Result<Deposit, PoolError> {
    let total = state.total_liquidity();
    let deposit = if total.is_zero() {
        Deposit {
            amount_a: request.amount_a_desired,
            amount_b: request.amount_b_desired,
            liquidity: Liquidity::new(sqrt_product(
                request.amount_a_desired,
                request.amount_b_desired,
            )),
        }
    } else {
        let (reserve_a, reserve_b) = state.current_ratio();
        let (amount_a, amount_b) = accepted_amounts(request, reserve_a, reserve_b)?;
        let total = Amount::new(total.get());
        let by_a = mul_div(amount_a, total, reserve_a, Rounding::Down)?;
        let by_b = mul_div(amount_b, total, reserve_b, Rounding::Down)?;
        Deposit {
            amount_a,
            amount_b,
            liquidity: Liquidity::new(by_a.min(by_b).get()),
        }
    };
    if deposit.liquidity.is_zero() || deposit.amount_a.is_zero() || deposit.amount_b.is_zero() {
        return Err(PoolError::NoLiquidityMinted);
    }
    Ok(deposit)
}

fn accepted_amounts(
    request: &AddLiquidity,
    reserve_a: Amount,
    reserve_b: Amount,
) -> Result<(Amount, Amount), PoolError> {
    let b_optimal = mul_div(request.amount_a_desired, reserve_b, reserve_a, Rounding::Down)?;
    if b_optimal <= request.amount_b_desired {
        if b_optimal < request.amount_b_min {
            return Err(PoolError::InsufficientB);
        }
        return Ok((request.amount_a_desired, b_optimal));
    }
    let a_optimal = mul_div(request.amount_b_desired, reserve_a, reserve_b, Rounding::Down)?;
    if a_optimal < request.amount_a_min {
        return Err(PoolError::InsufficientA);
    }
    Ok((a_optimal, request.amount_b_desired))
}

impl<L: AssetLedger, C: Clock> ConstantProductPool<L, C> {
    /// Deposits both assets from `caller` and credits shares to
    /// `request.to`.
    ///
    /// The accepted amounts are pulled from `caller` before the reserves
    /// and shares are updated.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidTokens`] if the assets are not the pool's
    ///   pair in `(A, B)` order.
    /// - [`PoolError::Expired`] if the deadline has passed.
    /// - [`PoolError::InsufficientB`] / [`PoolError::InsufficientA`] if an
    ///   accepted amount falls below its minimum.
    /// - [`PoolError::NoLiquidityMinted`] if nothing would be minted.
    /// - [`PoolError::TransferFailed`] if a pull is refused.
    /// - [`PoolError::Reentrancy`] if called from inside another operation.
    pub fn add_liquidity(
        &self,
        caller: Account,
        request: &AddLiquidity,
    ) -> Result<AddLiquidityOutcome, PoolError> {
        self.run("add_liquidity", caller, |tx| {
            self.ensure_pair(&request.token_a, &request.token_b)?;
            self.ensure_live(request.deadline)?;
            let deposit = plan_deposit(&self.state.borrow(), request)?;
            debug!(
                amount_a = %deposit.amount_a,
                amount_b = %deposit.amount_b,
                liquidity = %deposit.liquidity,
                "deposit sized"
            );

            tx.pull(PairSide::A, caller, deposit.amount_a)?;
            tx.pull(PairSide::B, caller, deposit.amount_b)?;

            {
                let mut state = self.state.borrow_mut();
                state.credit(PairSide::A, deposit.amount_a)?;
                state.credit(PairSide::B, deposit.amount_b)?;
                state.mint(request.to, deposit.liquidity)?;
            }

            tx.emit(PoolEvent::Mint {
                sender: caller,
                to: request.to,
                amount_a: deposit.amount_a,
                amount_b: deposit.amount_b,
                liquidity: deposit.liquidity,
            });
            Ok(AddLiquidityOutcome {
                amount_a: deposit.amount_a,
                amount_b: deposit.amount_b,
                liquidity: deposit.liquidity,
            })
        })
    }
}
