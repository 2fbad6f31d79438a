//! The two-asset constant-product pool.
//!
//! [`ConstantProductPool`] owns the reserve and share bookkeeping and drives
//! two external [`AssetLedger`]s.  Its operations are split by concern:
//!
//! - deposits in `minting`
//! - withdrawals in `burning`
//! - trades in `swap`
//! - read-only pricing in `quote` ([`get_amount_out`], [`get_amount_in`],
//!   [`quote()`], [`ConstantProductPool::get_price`])
//!
//! # Execution model
//!
//! Operations take `&self`: a ledger called during an operation may hold a
//! handle to the pool and call back into it.  Every mutating operation runs
//! as `guard → transaction → body → commit | abort`:
//!
//! 1. a single in-progress flag rejects nested entry with
//!    [`PoolError::Reentrancy`];
//! 2. the pool state is snapshotted and asset movements are journaled;
//! 3. on any error the snapshot is restored and the journaled movements
//!    are reversed newest first, so no partial change is observable.
//!
//! Read-only views never take the guard.  The pool is not `Sync`; callers
//! that share it across threads serialize access themselves.

mod burning;
mod events;
mod minting;
mod quote;
mod state;
mod swap;
mod transaction;

#[cfg(test)]
mod proptest_properties;

use std::cell::{Cell, RefCell};

use tracing::{info, warn};

use crate::config::PoolConfig;
use crate::domain::{Account, Amount, Liquidity, PairSide, Price, Timestamp, TokenAddress, TokenPair};
use crate::error::PoolError;
use crate::traits::{AssetLedger, Clock};

pub use events::PoolEvent;
pub use quote::{get_amount_in, get_amount_out, quote};
pub use state::PoolSnapshot;

use state::PoolState;
use transaction::{ReentrancyGuard, Transaction};

/// A constant-product (`x · y = k`) pool over one fixed asset pair.
///
/// Generic over the asset ledger `L` (both assets use the same ledger
/// type) and the clock `C` used for deadline checks.
///
/// # Example
///
/// ```rust
/// use pairswap::adapters::{InMemoryLedger, ManualClock};
/// use pairswap::config::PoolConfig;
/// use pairswap::domain::{Account, AddLiquidity, Amount, Timestamp, TokenAddress, TokenPair};
/// use pairswap::pool::ConstantProductPool;
///
/// let (a, b) = (TokenAddress::from_bytes([1u8; 32]), TokenAddress::from_bytes([2u8; 32]));
/// let custody = Account::from_bytes([9u8; 32]);
/// let alice = Account::from_bytes([7u8; 32]);
/// let config = PoolConfig::new(TokenPair::new(a, b).expect("distinct"), custody).expect("valid");
///
/// let ledger_a = InMemoryLedger::new(a, custody);
/// let ledger_b = InMemoryLedger::new(b, custody);
/// ledger_a.mint(alice, Amount::new(1_000)).expect("mint");
/// ledger_b.mint(alice, Amount::new(4_000)).expect("mint");
/// ledger_a.approve(alice, custody, Amount::new(1_000));
/// ledger_b.approve(alice, custody, Amount::new(4_000));
///
/// let pool = ConstantProductPool::new(config, ledger_a, ledger_b, ManualClock::default())
///     .expect("pool");
/// let outcome = pool
///     .add_liquidity(alice, &AddLiquidity {
///         token_a: a,
///         token_b: b,
///         amount_a_desired: Amount::new(1_000),
///         amount_b_desired: Amount::new(4_000),
///         amount_a_min: Amount::ZERO,
///         amount_b_min: Amount::ZERO,
///         to: alice,
///         deadline: Timestamp::MAX,
///     })
///     .expect("deposit");
/// assert_eq!(outcome.liquidity.get(), 2_000);
/// assert_eq!(pool.reserves(), (Amount::new(1_000), Amount::new(4_000)));
/// ```
#[derive(Debug)]
pub struct ConstantProductPool<L, C> {
    config: PoolConfig,
    ledger_a: L,
    ledger_b: L,
    clock: C,
    state: RefCell<PoolState>,
    events: RefCell<Vec<PoolEvent>>,
    entered: Cell<bool>,
}

impl<L: AssetLedger, C: Clock> ConstantProductPool<L, C> {
    /// Creates an empty pool.
    ///
    /// # Errors
    ///
    /// [`PoolError::InvalidConfiguration`] if the configuration is invalid
    /// or a ledger keeps a different asset than its side of the pair.
    pub fn new(config: PoolConfig, ledger_a: L, ledger_b: L, clock: C) -> Result<Self, PoolError> {
        config.validate()?;
        let pair = config.token_pair();
        if ledger_a.asset() != pair.first() {
            return Err(PoolError::InvalidConfiguration(
                "ledger A does not keep the pair's first asset",
            ));
        }
        if ledger_b.asset() != pair.second() {
            return Err(PoolError::InvalidConfiguration(
                "ledger B does not keep the pair's second asset",
            ));
        }
        info!(pair = ?pair, pool_account = %config.pool_account(), "pool created");
        Ok(Self {
            config,
            ledger_a,
            ledger_b,
            clock,
            state: RefCell::new(PoolState::default()),
            events: RefCell::new(Vec::new()),
            entered: Cell::new(false),
        })
    }

    /// The pool's configuration.
    #[must_use]
    pub const fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// The pool's asset pair, in `(A, B)` order.
    #[must_use]
    pub const fn token_pair(&self) -> &TokenPair {
        self.config.token_pair()
    }

    /// The account holding the reserves.
    #[must_use]
    pub const fn pool_account(&self) -> Account {
        self.config.pool_account()
    }

    /// The ledger of one asset.
    #[must_use]
    pub const fn ledger(&self, side: PairSide) -> &L {
        match side {
            PairSide::A => &self.ledger_a,
            PairSide::B => &self.ledger_b,
        }
    }

    /// The deadline clock.
    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// `(reserve_a, reserve_b)`.
    #[must_use]
    pub fn reserves(&self) -> (Amount, Amount) {
        self.state.borrow().current_ratio()
    }

    /// Sum of all outstanding shares.
    #[must_use]
    pub fn total_liquidity(&self) -> Liquidity {
        self.state.borrow().total_liquidity()
    }

    /// Shares held by `owner`; zero if none.
    #[must_use]
    pub fn liquidity_of(&self, owner: Account) -> Liquidity {
        self.state.borrow().liquidity_of(&owner)
    }

    /// A copy of the whole state.
    #[must_use]
    pub fn snapshot(&self) -> PoolSnapshot {
        self.state.borrow().snapshot()
    }

    /// Verifies the bookkeeping invariants.
    ///
    /// # Errors
    ///
    /// Names the first violated invariant.
    pub fn check_invariants(&self) -> Result<(), &'static str> {
        self.state.borrow().check_invariants()
    }

    /// Price of `base` in units of `counter`, scaled by [`Price::SCALE`]:
    /// `⌊reserve_counter × 10^18 / reserve_base⌋`.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidPair`] unless `(base, counter)` is the pool's
    ///   pair in either order.
    /// - [`PoolError::NoLiquidity`] if the base reserve is zero.
    pub fn get_price(&self, base: TokenAddress, counter: TokenAddress) -> Result<Price, PoolError> {
        let direction = self.token_pair().direction(&base, &counter)?;
        let state = self.state.borrow();
        quote::spot_price(
            state.reserve(direction.input_side()),
            state.reserve(direction.output_side()),
        )
    }

    /// Events of all committed operations so far.
    #[must_use]
    pub fn events(&self) -> Vec<PoolEvent> {
        self.events.borrow().clone()
    }

    /// Drains the event journal.
    pub fn take_events(&self) -> Vec<PoolEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    fn ensure_pair(&self, token_a: &TokenAddress, token_b: &TokenAddress) -> Result<(), PoolError> {
        if self.token_pair().matches(token_a, token_b) {
            Ok(())
        } else {
            Err(PoolError::InvalidTokens)
        }
    }

    fn ensure_live(&self, deadline: Timestamp) -> Result<(), PoolError> {
        if self.clock.now().is_after(deadline) {
            Err(PoolError::Expired)
        } else {
            Ok(())
        }
    }

    /// Runs one mutating operation under the guard and a transaction.
    fn run<T>(
        &self,
        op: &'static str,
        caller: Account,
        body: impl FnOnce(&mut Transaction<'_, L>) -> Result<T, PoolError>,
    ) -> Result<T, PoolError> {
        let _guard = ReentrancyGuard::enter(&self.entered).inspect_err(|_| {
            warn!(op, %caller, "reentrant call rejected");
        })?;
        let snapshot = self.state.borrow().clone();
        let mut tx = Transaction::begin(&self.ledger_a, &self.ledger_b, self.pool_account());
        match body(&mut tx) {
            Ok(value) => {
                let committed = tx.commit();
                for event in &committed {
                    info!(op, %caller, %event, "operation committed");
                }
                self.events.borrow_mut().extend(committed);
                Ok(value)
            }
            Err(err) => {
                *self.state.borrow_mut() = snapshot;
                let refused = tx.abort();
                warn!(op, %caller, error = %err, refused, "operation aborted");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
pub(crate) mod test_support {
    use super::*;
    use crate::adapters::{InMemoryLedger, ManualClock};
    use crate::domain::{AddLiquidity, RemoveLiquidity, SwapExactIn};

    pub(crate) type TestPool = ConstantProductPool<InMemoryLedger, ManualClock>;

    pub(crate) fn token_a() -> TokenAddress {
        TokenAddress::from_bytes([0xaa; 32])
    }

    pub(crate) fn token_b() -> TokenAddress {
        TokenAddress::from_bytes([0xbb; 32])
    }

    pub(crate) fn custody() -> Account {
        Account::from_bytes([0x99; 32])
    }

    pub(crate) fn user(b: u8) -> Account {
        Account::from_bytes([b; 32])
    }

    pub(crate) fn make_pool() -> TestPool {
        let Ok(pair) = TokenPair::new(token_a(), token_b()) else {
            panic!("expected valid pair");
        };
        let Ok(config) = PoolConfig::new(pair, custody()) else {
            panic!("expected valid config");
        };
        let ledger_a = InMemoryLedger::new(token_a(), custody());
        let ledger_b = InMemoryLedger::new(token_b(), custody());
        let clock = ManualClock::new(Timestamp::from_secs(1_000));
        let Ok(pool) = ConstantProductPool::new(config, ledger_a, ledger_b, clock) else {
            panic!("expected pool");
        };
        pool
    }

    /// Gives `who` `a`/`b` units and approves the pool for all of them.
    pub(crate) fn fund(pool: &TestPool, who: Account, a: u128, b: u128) {
        for (side, amount) in [(PairSide::A, a), (PairSide::B, b)] {
            let ledger = pool.ledger(side);
            let Ok(()) = ledger.mint(who, Amount::new(amount)) else {
                panic!("mint");
            };
            let allowed = ledger.allowance(who, custody()).get().saturating_add(amount);
            ledger.approve(who, custody(), Amount::new(allowed));
        }
    }

    pub(crate) fn add(a: u128, b: u128, to: Account) -> AddLiquidity {
        AddLiquidity {
            token_a: token_a(),
            token_b: token_b(),
            amount_a_desired: Amount::new(a),
            amount_b_desired: Amount::new(b),
            amount_a_min: Amount::ZERO,
            amount_b_min: Amount::ZERO,
            to,
            deadline: Timestamp::MAX,
        }
    }

    pub(crate) fn remove(liquidity: u128, to: Account) -> RemoveLiquidity {
        RemoveLiquidity {
            token_a: token_a(),
            token_b: token_b(),
            liquidity: Liquidity::new(liquidity),
            amount_a_min: Amount::ZERO,
            amount_b_min: Amount::ZERO,
            to,
            deadline: Timestamp::MAX,
        }
    }

    pub(crate) fn swap_a_for_b(amount_in: u128, to: Account) -> SwapExactIn {
        SwapExactIn::new(
            Amount::new(amount_in),
            Amount::ZERO,
            token_a(),
            token_b(),
            to,
            Timestamp::MAX,
        )
    }

    /// A pool holding (1000, 4000) with 2000 shares owned by `user(1)`.
    pub(crate) fn seeded_pool() -> TestPool {
        let pool = make_pool();
        fund(&pool, user(1), 1_000, 4_000);
        let Ok(_) = pool.add_liquidity(user(1), &add(1_000, 4_000, user(1))) else {
            panic!("seed deposit");
        };
        pool
    }
}
