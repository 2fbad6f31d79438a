//! Withdrawals: burning shares for a proportional slice of both reserves.

use tracing::debug;

use crate::domain::{Account, Amount, PairSide, RemoveLiquidity, RemoveLiquidityOutcome, Rounding};
use crate::error::PoolError;
use crate::math::mul_div;
use crate::traits::{AssetLedger, Clock};

use super::events::PoolEvent;
use super::state::PoolState;
use super::ConstantProductPool;

/// `⌊liquidity × reserve / total⌋` for both reserves.
pub(crate) fn plan_withdrawal(
    state: &PoolState,
    request: &RemoveLiquidity,
) -> Result<(Amount, Amount), PoolError> {
    let (reserve_a, reserve_b) = state.current_ratio();
    let liquidity = Amount::new(request.liquidity.get());
    let total = Amount::new(state.total_liquidity().get());
    let amount_a = mul_div(liquidity, reserve_a, total, Rounding::Down)?;
    let amount_b = mul_div(liquidity, reserve_b, total, Rounding::Down)?;
    if amount_a < request.amount_a_min {
        return Err(PoolError::InsufficientA);
    }
    if amount_b < request.amount_b_min {
        return Err(PoolError::InsufficientB);
    }
    Ok((amount_a, amount_b))
}

impl<L: AssetLedger, C: Clock> ConstantProductPool<L, C> {
    /// Burns `request.liquidity` of `caller`'s shares and pays both assets
    /// to `request.to`.
    ///
    /// Shares and reserves are debited before either asset is pushed.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidTokens`] if the assets are not the pool's
    ///   pair in `(A, B)` order.
    /// - [`PoolError::Expired`] if the deadline has passed.
    /// - [`PoolError::InvalidLiquidity`] if `request.liquidity` is zero.
    /// - [`PoolError::InsufficientShare`] if `caller` holds fewer shares.
    /// - [`PoolError::InsufficientA`] / [`PoolError::InsufficientB`] if a
    ///   payout falls below its minimum.
    /// - [`PoolError::TransferFailed`] if a push is refused.
    /// - [`PoolError::Reentrancy`] if called from inside another operation.
    pub fn remove_liquidity(
        &self,
        caller: Account,
        request: &RemoveLiquidity,
    ) -> Result<RemoveLiquidityOutcome, PoolError> {
        self.run("remove_liquidity", caller, |tx| {
            self.ensure_pair(&request.token_a, &request.token_b)?;
            self.ensure_live(request.deadline)?;
            if request.liquidity.is_zero() {
                return Err(PoolError::InvalidLiquidity);
            }

            let (amount_a, amount_b) = {
                let mut state = self.state.borrow_mut();
                if state.liquidity_of(&caller) < request.liquidity {
                    return Err(PoolError::InsufficientShare);
                }
                let payout = plan_withdrawal(&state, request)?;
                state.burn(caller, request.liquidity)?;
                state.debit(PairSide::A, payout.0)?;
                state.debit(PairSide::B, payout.1)?;
                payout
            };
            debug!(%amount_a, %amount_b, liquidity = %request.liquidity, "withdrawal sized");

            tx.push(PairSide::A, request.to, amount_a)?;
            tx.push(PairSide::B, request.to, amount_b)?;

            tx.emit(PoolEvent::Burn {
                sender: caller,
                to: request.to,
                amount_a,
                amount_b,
                liquidity: request.liquidity,
            });
            Ok(RemoveLiquidityOutcome { amount_a, amount_b })
        })
    }
}
