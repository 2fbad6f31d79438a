//! Property-based tests for the pool's bookkeeping and pricing.
//!
//! 1. **First deposit** mints `⌊√(a × b)⌋` and sets reserves to `(a, b)`.
//! 2. **Product monotonicity** holds across swaps in either direction.
//! 3. **Share conservation** holds after every add and remove.
//! 4. **Round trip** deposit then full withdrawal never returns more.
//! 5. **Proportional mint** never exceeds either asset's share.

#![allow(clippy::panic)]

use proptest::prelude::*;

use super::test_support::*;
use crate::domain::{Amount, Liquidity, PairSide, SwapExactIn, Timestamp};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Amounts in [1, 10^12].
fn amount_strategy() -> impl Strategy<Value = u128> {
    1u128..=1_000_000_000_000u128
}

/// Reserves in [10_000, 10_000_000].
fn reserve_strategy() -> impl Strategy<Value = u128> {
    10_000u128..=10_000_000u128
}

#[derive(Debug, Clone)]
enum Step {
    Add { who: u8, a: u128, b: u128 },
    Remove { who: u8, permille: u128 },
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        (1u8..=3, 1u128..=1_000_000, 1u128..=1_000_000)
            .prop_map(|(who, a, b)| Step::Add { who, a, b }),
        (1u8..=3, 1u128..=1_000).prop_map(|(who, permille)| Step::Remove { who, permille }),
    ]
}

fn pool_with(a: u128, b: u128) -> TestPool {
    let pool = make_pool();
    fund(&pool, user(1), a, b);
    let Ok(_) = pool.add_liquidity(user(1), &add(a, b, user(1))) else {
        panic!("seed deposit");
    };
    pool
}

fn isqrt_reference(n: u128) -> u128 {
    // binary search on a value known to fit in 64 bits
    let (mut lo, mut hi) = (0u128, 1u128 << 64);
    while lo + 1 < hi {
        let mid = (lo + hi) / 2;
        if mid.checked_mul(mid).is_some_and(|sq| sq <= n) {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    lo
}

// ---------------------------------------------------------------------------
// Property 1: First deposit
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_first_deposit_mints_isqrt(a in amount_strategy(), b in amount_strategy()) {
        let pool = make_pool();
        fund(&pool, user(1), a, b);
        let Ok(outcome) = pool.add_liquidity(user(1), &add(a, b, user(1))) else {
            panic!("first deposit");
        };
        prop_assert_eq!(outcome.liquidity.get(), isqrt_reference(a * b));
        prop_assert_eq!(pool.reserves(), (Amount::new(a), Amount::new(b)));
    }
}

// ---------------------------------------------------------------------------
// Property 2: Product monotonicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_product_non_decreasing(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        trades in proptest::collection::vec((any::<bool>(), 1u128..=100_000), 1..12),
    ) {
        let pool = pool_with(ra, rb);
        fund(&pool, user(2), 10_000_000, 10_000_000);
        for (a_to_b, amount_in) in trades {
            let (before_a, before_b) = pool.reserves();
            let (input, output) = if a_to_b {
                (token_a(), token_b())
            } else {
                (token_b(), token_a())
            };
            let request = SwapExactIn::new(
                Amount::new(amount_in),
                Amount::ZERO,
                input,
                output,
                user(2),
                Timestamp::MAX,
            );
            if pool.swap_exact_tokens_for_tokens(user(2), &request).is_err() {
                continue;
            }
            let (after_a, after_b) = pool.reserves();
            prop_assert!(after_a.get() * after_b.get() >= before_a.get() * before_b.get());
        }
    }
}

// ---------------------------------------------------------------------------
// Property 3: Share conservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_shares_sum_to_total(steps in proptest::collection::vec(step_strategy(), 1..24)) {
        let pool = make_pool();
        for who in 1..=3 {
            fund(&pool, user(who), 100_000_000, 100_000_000);
        }
        for step in steps {
            match step {
                Step::Add { who, a, b } => {
                    let _ = pool.add_liquidity(user(who), &add(a, b, user(who)));
                }
                Step::Remove { who, permille } => {
                    let held = pool.liquidity_of(user(who)).get();
                    let _ = pool.remove_liquidity(user(who), &remove(held * permille / 1_000, user(who)));
                }
            }
            let snapshot = pool.snapshot();
            let sum: u128 = snapshot.shares.values().map(Liquidity::get).sum();
            prop_assert_eq!(sum, snapshot.total_liquidity.get());
            prop_assert_eq!(pool.check_invariants(), Ok(()));
        }
    }
}

// ---------------------------------------------------------------------------
// Property 4 and 5: Round trip, proportional mint
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_round_trip_never_profits(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        a in 1u128..=1_000_000,
        b in 1u128..=1_000_000,
    ) {
        let pool = pool_with(ra, rb);
        fund(&pool, user(2), a, b);
        let Ok(deposit) = pool.add_liquidity(user(2), &add(a, b, user(2))) else {
            return Ok(());
        };
        let Ok(withdrawal) = pool.remove_liquidity(
            user(2),
            &remove(deposit.liquidity.get(), user(2)),
        ) else {
            panic!("withdrawal of fresh shares");
        };
        prop_assert!(withdrawal.amount_a <= deposit.amount_a);
        prop_assert!(withdrawal.amount_b <= deposit.amount_b);
        prop_assert!(pool.ledger(PairSide::A).balance_of(user(2)) <= Amount::new(a));
        prop_assert!(pool.ledger(PairSide::B).balance_of(user(2)) <= Amount::new(b));
    }

    #[test]
    fn prop_mint_bounded_by_each_side(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        a in 1u128..=1_000_000,
        b in 1u128..=1_000_000,
    ) {
        let pool = pool_with(ra, rb);
        let total = pool.total_liquidity().get();
        fund(&pool, user(2), a, b);
        let Ok(deposit) = pool.add_liquidity(user(2), &add(a, b, user(2))) else {
            return Ok(());
        };
        let minted = deposit.liquidity.get();
        prop_assert!(minted <= deposit.amount_a.get() * total / ra);
        prop_assert!(minted <= deposit.amount_b.get() * total / rb);
        prop_assert!(deposit.amount_a.get() <= a && deposit.amount_b.get() <= b);
    }
}
