//! Non-reentrant, all-or-nothing execution of pool operations.
//!
//! [`ReentrancyGuard`] holds the pool's single in-progress flag for the
//! duration of one operation.  [`Transaction`] performs the operation's
//! asset movements and journals each successful one so that an abort can
//! hand them back, newest first, through [`AssetLedger::reverse`].  The
//! pool state snapshot is kept by the caller of [`Transaction::abort`].

use std::cell::Cell;

use tracing::{debug, error};

use crate::domain::{Account, Amount, PairSide};
use crate::error::PoolError;
use crate::traits::AssetLedger;

use super::events::PoolEvent;

/// Marks a pool as busy until dropped.
#[derive(Debug)]
pub(crate) struct ReentrancyGuard<'a> {
    entered: &'a Cell<bool>,
}

impl<'a> ReentrancyGuard<'a> {
    /// Sets the flag.
    ///
    /// # Errors
    ///
    /// [`PoolError::Reentrancy`] if the flag is already set.
    pub(crate) fn enter(entered: &'a Cell<bool>) -> Result<Self, PoolError> {
        if entered.replace(true) {
            return Err(PoolError::Reentrancy);
        }
        Ok(Self { entered })
    }
}

impl Drop for ReentrancyGuard<'_> {
    fn drop(&mut self) {
        self.entered.set(false);
    }
}

/// A successful asset movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Movement {
    pub(crate) side: PairSide,
    pub(crate) from: Account,
    pub(crate) to: Account,
    pub(crate) amount: Amount,
}

/// Asset movements and events of one in-flight operation.
#[derive(Debug)]
pub(crate) struct Transaction<'a, L> {
    ledger_a: &'a L,
    ledger_b: &'a L,
    pool_account: Account,
    journal: Vec<Movement>,
    events: Vec<PoolEvent>,
}

impl<'a, L: AssetLedger> Transaction<'a, L> {
    pub(crate) fn begin(ledger_a: &'a L, ledger_b: &'a L, pool_account: Account) -> Self {
        Self {
            ledger_a,
            ledger_b,
            pool_account,
            journal: Vec::new(),
            events: Vec::new(),
        }
    }

    fn ledger(&self, side: PairSide) -> &'a L {
        match side {
            PairSide::A => self.ledger_a,
            PairSide::B => self.ledger_b,
        }
    }

    /// Pulls `amount` of one asset from `from` into pool custody.
    ///
    /// # Errors
    ///
    /// [`PoolError::TransferFailed`] naming the asset if the ledger refuses.
    pub(crate) fn pull(
        &mut self,
        side: PairSide,
        from: Account,
        amount: Amount,
    ) -> Result<(), PoolError> {
        let ledger = self.ledger(side);
        let to = self.pool_account;
        if !ledger.transfer_from(from, to, amount) {
            return Err(PoolError::TransferFailed(ledger.asset()));
        }
        self.record(side, from, to, amount);
        Ok(())
    }

    /// Pushes `amount` of one asset out of pool custody to `to`.
    ///
    /// # Errors
    ///
    /// [`PoolError::TransferFailed`] naming the asset if the ledger refuses.
    pub(crate) fn push(&mut self, side: PairSide, to: Account, amount: Amount) -> Result<(), PoolError> {
        let ledger = self.ledger(side);
        if !ledger.transfer(to, amount) {
            return Err(PoolError::TransferFailed(ledger.asset()));
        }
        self.record(side, self.pool_account, to, amount);
        Ok(())
    }

    fn record(&mut self, side: PairSide, from: Account, to: Account, amount: Amount) {
        debug!(?side, %from, %to, %amount, "asset moved");
        self.journal.push(Movement {
            side,
            from,
            to,
            amount,
        });
    }

    pub(crate) fn emit(&mut self, event: PoolEvent) {
        self.events.push(event);
    }

    #[cfg(test)]
    pub(crate) fn journal(&self) -> &[Movement] {
        &self.journal
    }

    /// Finishes successfully and yields the operation's events.
    pub(crate) fn commit(self) -> Vec<PoolEvent> {
        self.events
    }

    /// Hands every journaled movement back, newest first, and drops the
    /// events.  Returns how many reversals the ledgers refused.
    pub(crate) fn abort(self) -> usize {
        let mut refused = 0;
        for movement in self.journal.iter().rev() {
            let ledger = self.ledger(movement.side);
            if !ledger.reverse(movement.from, movement.to, movement.amount) {
                refused += 1;
                error!(
                    asset = %ledger.asset(),
                    from = %movement.from,
                    to = %movement.to,
                    amount = %movement.amount,
                    "ledger refused to reverse a movement"
                );
            }
        }
        refused
    }
}
