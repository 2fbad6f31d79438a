//! A complete in-process asset ledger.

use std::cell::RefCell;
use std::collections::HashMap;

use tracing::trace;

use crate::domain::{Account, Amount, TokenAddress};
use crate::error::PoolError;
use crate::traits::AssetLedger;

/// Balances and allowances of one asset, kept in memory.
///
/// The ledger is bound to a *custodian*: the account on whose behalf
/// [`AssetLedger::transfer`] moves funds and which spends allowances in
/// [`AssetLedger::transfer_from`].  Give it the pool's custody account.
///
/// Interior mutability lets the pool drive the ledger through `&self`,
/// exactly like a call into an external system.
///
/// # Examples
///
/// ```
/// use pairswap::adapters::InMemoryLedger;
/// use pairswap::domain::{Account, Amount, TokenAddress};
/// use pairswap::traits::AssetLedger;
///
/// let pool = Account::from_bytes([9u8; 32]);
/// let alice = Account::from_bytes([1u8; 32]);
/// let ledger = InMemoryLedger::new(TokenAddress::from_bytes([1u8; 32]), pool);
///
/// ledger.mint(alice, Amount::new(500)).expect("no overflow");
/// ledger.approve(alice, pool, Amount::new(200));
/// assert!(ledger.transfer_from(alice, pool, Amount::new(200)));
/// assert!(!ledger.transfer_from(alice, pool, Amount::new(1)));
/// assert_eq!(ledger.balance_of(pool), Amount::new(200));
/// ```
#[derive(Debug)]
pub struct InMemoryLedger {
    asset: TokenAddress,
    custodian: Account,
    balances: RefCell<HashMap<Account, Amount>>,
    allowances: RefCell<HashMap<(Account, Account), Amount>>,
}

impl InMemoryLedger {
    /// Creates an empty ledger for `asset`, acting on behalf of `custodian`.
    #[must_use]
    pub fn new(asset: TokenAddress, custodian: Account) -> Self {
        Self {
            asset,
            custodian,
            balances: RefCell::new(HashMap::new()),
            allowances: RefCell::new(HashMap::new()),
        }
    }

    /// The account this ledger acts for.
    #[must_use]
    pub const fn custodian(&self) -> Account {
        self.custodian
    }

    /// Credits newly created units to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Overflow`] if the balance would exceed `u128::MAX`.
    pub fn mint(&self, to: Account, amount: Amount) -> Result<(), PoolError> {
        let mut balances = self.balances.borrow_mut();
        let entry = balances.entry(to).or_default();
        *entry = entry
            .checked_add(&amount)
            .ok_or(PoolError::Overflow("ledger balance"))?;
        Ok(())
    }

    /// Balance held by `owner`.
    #[must_use]
    pub fn balance_of(&self, owner: Account) -> Amount {
        self.balances
            .borrow()
            .get(&owner)
            .copied()
            .unwrap_or_default()
    }

    /// Sets the amount `spender` may pull from `owner`.
    pub fn approve(&self, owner: Account, spender: Account, amount: Amount) {
        self.allowances.borrow_mut().insert((owner, spender), amount);
    }

    /// Remaining allowance of `spender` over `owner`'s balance.
    #[must_use]
    pub fn allowance(&self, owner: Account, spender: Account) -> Amount {
        self.allowances
            .borrow()
            .get(&(owner, spender))
            .copied()
            .unwrap_or_default()
    }

    fn move_balance(&self, from: Account, to: Account, amount: Amount) -> bool {
        let mut balances = self.balances.borrow_mut();
        let from_balance = balances.get(&from).copied().unwrap_or_default();
        let Some(debited) = from_balance.checked_sub(&amount) else {
            trace!(asset = %self.asset, %from, %amount, "insufficient balance");
            return false;
        };
        if from == to {
            return true;
        }
        let to_balance = balances.get(&to).copied().unwrap_or_default();
        let Some(credited) = to_balance.checked_add(&amount) else {
            trace!(asset = %self.asset, %to, %amount, "balance overflow");
            return false;
        };
        balances.insert(from, debited);
        balances.insert(to, credited);
        true
    }
}

impl AssetLedger for InMemoryLedger {
    fn asset(&self) -> TokenAddress {
        self.asset
    }

    fn transfer(&self, to: Account, amount: Amount) -> bool {
        self.move_balance(self.custodian, to, amount)
    }

    /// Refuses a pull whose source and destination coincide.
    fn transfer_from(&self, from: Account, to: Account, amount: Amount) -> bool {
        if from == to {
            trace!(asset = %self.asset, %from, %amount, "self pull refused");
            return false;
        }
        let allowed = self.allowance(from, self.custodian);
        let Some(remaining) = allowed.checked_sub(&amount) else {
            trace!(asset = %self.asset, %from, %amount, %allowed, "allowance too low");
            return false;
        };
        if !self.move_balance(from, to, amount) {
            return false;
        }
        self.approve(from, self.custodian, remaining);
        true
    }

    /// Moves the funds back.  Reversing a pull into the custodian also
    /// restores the allowance it consumed.
    fn reverse(&self, from: Account, to: Account, amount: Amount) -> bool {
        if !self.move_balance(to, from, amount) {
            return false;
        }
        if to == self.custodian && from != self.custodian {
            let allowed = self.allowance(from, self.custodian);
            self.approve(
                from,
                self.custodian,
                allowed.checked_add(&amount).unwrap_or(Amount::MAX),
            );
        }
        true
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn pool() -> Account {
        Account::from_bytes([9u8; 32])
    }

    fn alice() -> Account {
        Account::from_bytes([1u8; 32])
    }

    fn bob() -> Account {
        Account::from_bytes([2u8; 32])
    }

    fn ledger() -> InMemoryLedger {
        let ledger = InMemoryLedger::new(TokenAddress::from_bytes([5u8; 32]), pool());
        let Ok(()) = ledger.mint(alice(), Amount::new(1_000)) else {
            panic!("mint");
        };
        ledger
    }

    #[test]
    fn mint_and_balance() {
        let l = ledger();
        assert_eq!(l.balance_of(alice()), Amount::new(1_000));
        assert_eq!(l.balance_of(bob()), Amount::ZERO);
        assert_eq!(l.asset(), TokenAddress::from_bytes([5u8; 32]));
        assert_eq!(l.custodian(), pool());
    }

    #[test]
    fn mint_overflow() {
        let l = ledger();
        assert_eq!(
            l.mint(alice(), Amount::MAX),
            Err(PoolError::Overflow("ledger balance"))
        );
    }

    #[test]
    fn transfer_from_requires_allowance() {
        let l = ledger();
        assert!(!l.transfer_from(alice(), pool(), Amount::new(10)));
        l.approve(alice(), pool(), Amount::new(10));
        assert!(l.transfer_from(alice(), pool(), Amount::new(10)));
        assert_eq!(l.allowance(alice(), pool()), Amount::ZERO);
        assert_eq!(l.balance_of(pool()), Amount::new(10));
    }

    #[test]
    fn transfer_from_requires_balance() {
        let l = ledger();
        l.approve(alice(), pool(), Amount::new(5_000));
        assert!(!l.transfer_from(alice(), pool(), Amount::new(2_000)));
        assert_eq!(l.allowance(alice(), pool()), Amount::new(5_000));
    }

    #[test]
    fn transfer_moves_out_of_custody() {
        let l = ledger();
        l.approve(alice(), pool(), Amount::new(100));
        assert!(l.transfer_from(alice(), pool(), Amount::new(100)));
        assert!(l.transfer(bob(), Amount::new(40)));
        assert!(!l.transfer(bob(), Amount::new(61)));
        assert_eq!(l.balance_of(bob()), Amount::new(40));
        assert_eq!(l.balance_of(pool()), Amount::new(60));
    }

    #[test]
    fn transfer_from_refuses_self_pull() {
        let l = ledger();
        let Ok(()) = l.mint(pool(), Amount::new(500)) else {
            panic!("mint");
        };
        l.approve(pool(), pool(), Amount::new(100));
        assert!(!l.transfer_from(pool(), pool(), Amount::new(100)));
        assert_eq!(l.allowance(pool(), pool()), Amount::new(100));
        assert_eq!(l.balance_of(pool()), Amount::new(500));
    }

    #[test]
    fn reverse_of_pull_restores_allowance() {
        let l = ledger();
        l.approve(alice(), pool(), Amount::new(100));
        assert!(l.transfer_from(alice(), pool(), Amount::new(100)));
        assert!(l.reverse(alice(), pool(), Amount::new(100)));
        assert_eq!(l.balance_of(alice()), Amount::new(1_000));
        assert_eq!(l.allowance(alice(), pool()), Amount::new(100));
    }

    #[test]
    fn reverse_of_push() {
        let l = ledger();
        l.approve(alice(), pool(), Amount::new(100));
        assert!(l.transfer_from(alice(), pool(), Amount::new(100)));
        assert!(l.transfer(bob(), Amount::new(30)));
        assert!(l.reverse(pool(), bob(), Amount::new(30)));
        assert_eq!(l.balance_of(bob()), Amount::ZERO);
        assert_eq!(l.balance_of(pool()), Amount::new(100));
        assert_eq!(l.allowance(pool(), pool()), Amount::ZERO);
    }

    #[test]
    fn reverse_fails_when_funds_moved_on() {
        let l = ledger();
        assert!(!l.reverse(bob(), alice(), Amount::new(1_001)));
    }
}
