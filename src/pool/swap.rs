//! Exact-input trades along the curve.

use tracing::debug;

use crate::domain::{Account, SwapExactIn, SwapOutcome};
use crate::error::PoolError;
use crate::traits::{AssetLedger, Clock};

use super::events::PoolEvent;
use super::quote::get_amount_out;
use super::ConstantProductPool;

impl<L: AssetLedger, C: Clock> ConstantProductPool<L, C> {
    /// Sells exactly `request.amount_in` of `path[0]` for `path[1]`.
    ///
    /// The input is pulled from `caller` first, the output is priced with
    /// [`get_amount_out`] against the reserves and pushed to `request.to`,
    /// then the reserves are updated.  A refused pull fails the trade.
    ///
    /// # Errors
    ///
    /// - [`PoolError::UnsupportedPath`] unless the path has two entries.
    /// - [`PoolError::Expired`] if the deadline has passed.
    /// - [`PoolError::InvalidPair`] unless the path is the pool's pair in
    ///   either order.
    /// - [`PoolError::InvalidAmount`] if `request.amount_in` is zero.
    /// - [`PoolError::InsufficientLiquidity`] if the pool is empty.
    /// - [`PoolError::InsufficientOutput`] if the output is below the minimum.
    /// - [`PoolError::TransferFailed`] if the pull or the push is refused.
    /// - [`PoolError::Reentrancy`] if called from inside another operation.
    pub fn swap_exact_tokens_for_tokens(
        &self,
        caller: Account,
        request: &SwapExactIn,
    ) -> Result<SwapOutcome, PoolError> {
        self.run("swap_exact_tokens_for_tokens", caller, |tx| {
            let &[input, output] = request.path.as_slice() else {
                return Err(PoolError::UnsupportedPath);
            };
            self.ensure_live(request.deadline)?;
            let direction = self.token_pair().direction(&input, &output)?;
            let (side_in, side_out) = (direction.input_side(), direction.output_side());

            tx.pull(side_in, caller, request.amount_in)?;

            let (reserve_in, reserve_out) = {
                let state = self.state.borrow();
                (state.reserve(side_in), state.reserve(side_out))
            };
            let amount_out = get_amount_out(request.amount_in, reserve_in, reserve_out)?;
            debug!(%direction, amount_in = %request.amount_in, %amount_out, "trade priced");
            if amount_out < request.amount_out_min {
                return Err(PoolError::InsufficientOutput);
            }

            tx.push(side_out, request.to, amount_out)?;

            {
                let mut state = self.state.borrow_mut();
                state.credit(side_in, request.amount_in)?;
                state.debit(side_out, amount_out)?;
            }

            tx.emit(PoolEvent::Swap {
                sender: caller,
                to: request.to,
                direction,
                amount_in: request.amount_in,
                amount_out,
            });
            Ok(SwapOutcome {
                amount_in: request.amount_in,
                amount_out,
            })
        })
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::domain::{Amount, PairSide, SwapDirection, Timestamp, TokenAddress};

    #[test]
    fn reference_trade() {
        let pool = seeded_pool();
        fund(&pool, user(2), 100, 0);
        let Ok(outcome) = pool.swap_exact_tokens_for_tokens(user(2), &swap_a_for_b(100, user(3)))
        else {
            panic!("expected swap");
        };
        assert_eq!(outcome.amounts(), [Amount::new(100), Amount::new(363)]);
        assert_eq!(pool.reserves(), (Amount::new(1_100), Amount::new(3_637)));
        assert_eq!(pool.ledger(PairSide::B).balance_of(user(3)), Amount::new(363));
        assert_eq!(pool.ledger(PairSide::A).balance_of(user(2)), Amount::ZERO);
        assert_eq!(pool.check_invariants(), Ok(()));
    }

    #[test]
    fn reverse_direction() {
        let pool = seeded_pool();
        fund(&pool, user(2), 0, 400);
        let request = SwapExactIn::new(
            Amount::new(400),
            Amount::ZERO,
            token_b(),
            token_a(),
            user(2),
            Timestamp::MAX,
        );
        let Ok(outcome) = pool.swap_exact_tokens_for_tokens(user(2), &request) else {
            panic!("expected swap");
        };
        // 400 × 1000 / 4400
        assert_eq!(outcome.amount_out, Amount::new(90));
        assert_eq!(pool.reserves(), (Amount::new(910), Amount::new(4_400)));
        let events = pool.events();
        assert!(matches!(
            events.last(),
            Some(PoolEvent::Swap { direction: SwapDirection::BToA, .. })
        ));
    }

    #[test]
    fn product_never_decreases() {
        let pool = seeded_pool();
        fund(&pool, user(2), 10_000, 0);
        let mut k = 1_000u128 * 4_000;
        for amount in [1, 7, 100, 999, 3_333] {
            let Ok(_) = pool.swap_exact_tokens_for_tokens(user(2), &swap_a_for_b(amount, user(2)))
            else {
                panic!("expected swap");
            };
            let (a, b) = pool.reserves();
            let next = a.get() * b.get();
            assert!(next >= k);
            k = next;
        }
    }

    #[test]
    fn path_must_have_two_entries() {
        let pool = seeded_pool();
        let mut request = swap_a_for_b(100, user(2));
        request.path.push(token_a());
        assert_eq!(
            pool.swap_exact_tokens_for_tokens(user(2), &request),
            Err(PoolError::UnsupportedPath)
        );
        request.path.clear();
        assert_eq!(
            pool.swap_exact_tokens_for_tokens(user(2), &request),
            Err(PoolError::UnsupportedPath)
        );
    }

    #[test]
    fn foreign_or_repeated_assets_rejected() {
        let pool = seeded_pool();
        let mut request = swap_a_for_b(100, user(2));
        request.path = vec![token_a(), TokenAddress::from_bytes([3u8; 32])];
        assert_eq!(
            pool.swap_exact_tokens_for_tokens(user(2), &request),
            Err(PoolError::InvalidPair)
        );
        request.path = vec![token_b(), token_b()];
        assert_eq!(
            pool.swap_exact_tokens_for_tokens(user(2), &request),
            Err(PoolError::InvalidPair)
        );
    }

    #[test]
    fn slippage_floor_rolls_back_pull() {
        let pool = seeded_pool();
        fund(&pool, user(2), 100, 0);
        let mut request = swap_a_for_b(100, user(2));
        request.amount_out_min = Amount::new(364);
        assert_eq!(
            pool.swap_exact_tokens_for_tokens(user(2), &request),
            Err(PoolError::InsufficientOutput)
        );
        assert_eq!(pool.ledger(PairSide::A).balance_of(user(2)), Amount::new(100));
        assert_eq!(pool.reserves(), (Amount::new(1_000), Amount::new(4_000)));
    }

    #[test]
    fn refused_pull_fails_the_trade() {
        let pool = seeded_pool();
        assert_eq!(
            pool.swap_exact_tokens_for_tokens(user(2), &swap_a_for_b(100, user(2))),
            Err(PoolError::TransferFailed(token_a()))
        );
        assert_eq!(pool.reserves(), (Amount::new(1_000), Amount::new(4_000)));
    }

    #[test]
    fn zero_input_and_empty_pool() {
        let pool = seeded_pool();
        assert_eq!(
            pool.swap_exact_tokens_for_tokens(user(2), &swap_a_for_b(0, user(2))),
            Err(PoolError::InvalidAmount)
        );
        let empty = make_pool();
        fund(&empty, user(2), 100, 0);
        assert_eq!(
            empty.swap_exact_tokens_for_tokens(user(2), &swap_a_for_b(100, user(2))),
            Err(PoolError::InsufficientLiquidity)
        );
        assert_eq!(empty.ledger(PairSide::A).balance_of(user(2)), Amount::new(100));
    }

    #[test]
    fn expired_rejected() {
        let pool = seeded_pool();
        pool.clock().advance(10);
        let mut request = swap_a_for_b(100, user(2));
        request.deadline = Timestamp::from_secs(1_005);
        assert_eq!(
            pool.swap_exact_tokens_for_tokens(user(2), &request),
            Err(PoolError::Expired)
        );
    }
}
