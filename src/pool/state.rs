//! Reserves and liquidity shares, with their invariants.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::domain::{Account, Amount, Liquidity, PairSide};
use crate::error::PoolError;
use crate::math::CheckedArithmetic;

/// Mutable state of one pool.
///
/// Mutators are checked and leave the state untouched when they fail.
/// Callers pair a share change with the matching reserve change inside
/// one pool operation; the enclosing transaction restores a snapshot if
/// anything after the first mutation fails.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct PoolState {
    reserve_a: Amount,
    reserve_b: Amount,
    total_liquidity: Liquidity,
    shares: HashMap<Account, Liquidity>,
}

impl PoolState {
    /// `(reserve_a, reserve_b)`.
    pub(crate) const fn current_ratio(&self) -> (Amount, Amount) {
        (self.reserve_a, self.reserve_b)
    }

    pub(crate) const fn reserve(&self, side: PairSide) -> Amount {
        match side {
            PairSide::A => self.reserve_a,
            PairSide::B => self.reserve_b,
        }
    }

    pub(crate) const fn total_liquidity(&self) -> Liquidity {
        self.total_liquidity
    }

    pub(crate) fn liquidity_of(&self, owner: &Account) -> Liquidity {
        self.shares.get(owner).copied().unwrap_or_default()
    }

    /// Adds `amount` to one reserve.
    pub(crate) fn credit(&mut self, side: PairSide, amount: Amount) -> Result<(), PoolError> {
        match side {
            PairSide::A => self.reserve_a = self.reserve_a.safe_add(&amount, "reserve_a")?,
            PairSide::B => self.reserve_b = self.reserve_b.safe_add(&amount, "reserve_b")?,
        }
        Ok(())
    }

    /// Removes `amount` from one reserve.
    pub(crate) fn debit(&mut self, side: PairSide, amount: Amount) -> Result<(), PoolError> {
        match side {
            PairSide::A => self.reserve_a = self.reserve_a.safe_sub(&amount, "reserve_a")?,
            PairSide::B => self.reserve_b = self.reserve_b.safe_sub(&amount, "reserve_b")?,
        }
        Ok(())
    }

    /// Credits `amount` shares to `owner` and grows the total.
    pub(crate) fn mint(&mut self, owner: Account, amount: Liquidity) -> Result<(), PoolError> {
        let total = self
            .total_liquidity
            .safe_add(&amount, "total_liquidity")?;
        let balance = self
            .liquidity_of(&owner)
            .safe_add(&amount, "liquidity balance")?;
        self.total_liquidity = total;
        self.shares.insert(owner, balance);
        Ok(())
    }

    /// Debits `amount` shares from `owner` and shrinks the total.
    ///
    /// # Errors
    ///
    /// [`PoolError::InsufficientShare`] if `owner` holds fewer than `amount`.
    pub(crate) fn burn(&mut self, owner: Account, amount: Liquidity) -> Result<(), PoolError> {
        let balance = self
            .liquidity_of(&owner)
            .checked_sub(&amount)
            .ok_or(PoolError::InsufficientShare)?;
        let total = self
            .total_liquidity
            .safe_sub(&amount, "total_liquidity")?;
        self.total_liquidity = total;
        if balance.is_zero() {
            self.shares.remove(&owner);
        } else {
            self.shares.insert(owner, balance);
        }
        Ok(())
    }

    /// Verifies the bookkeeping invariants.
    ///
    /// # Errors
    ///
    /// Names the first violated invariant.
    pub(crate) fn check_invariants(&self) -> Result<(), &'static str> {
        let mut sum = Liquidity::ZERO;
        for share in self.shares.values() {
            sum = sum
                .checked_add(share)
                .ok_or("liquidity shares overflow")?;
        }
        if sum != self.total_liquidity {
            return Err("liquidity shares do not sum to total liquidity");
        }
        let empty_reserves = self.reserve_a.is_zero() && self.reserve_b.is_zero();
        if self.total_liquidity.is_zero() && !empty_reserves {
            return Err("reserves held without outstanding liquidity");
        }
        if !self.total_liquidity.is_zero() && (self.reserve_a.is_zero() || self.reserve_b.is_zero())
        {
            return Err("outstanding liquidity without reserves");
        }
        Ok(())
    }

    pub(crate) fn snapshot(&self) -> PoolSnapshot {
        PoolSnapshot {
            reserve_a: self.reserve_a,
            reserve_b: self.reserve_b,
            total_liquidity: self.total_liquidity,
            shares: self.shares.iter().map(|(k, v)| (*k, *v)).collect(),
        }
    }
}

/// Externally readable copy of a pool's state, taken between operations.
///
/// Shares are ordered by owner so serialized snapshots are stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolSnapshot {
    /// Reserve of asset A.
    pub reserve_a: Amount,
    /// Reserve of asset B.
    pub reserve_b: Amount,
    /// Sum of all outstanding shares.
    pub total_liquidity: Liquidity,
    /// Non-zero share balances by owner.
    pub shares: BTreeMap<Account, Liquidity>,
}
