//! Capability interface of an external asset ledger.
//!
//! The pool never owns asset balances itself: each of its two assets lives
//! on a ledger that the pool drives through [`AssetLedger`].  A ledger
//! instance is bound to the pool's custody account, so
//! [`transfer`](AssetLedger::transfer) always moves funds *out of* the
//! pool, and [`transfer_from`](AssetLedger::transfer_from) pulls funds the
//! owner has previously authorized the pool to move.
//!
//! # Rollback
//!
//! A pool operation that fails after some transfers already succeeded
//! undoes them, newest first, with [`reverse`](AssetLedger::reverse).
//! Ledgers hosted inside an environment with native transaction rollback
//! can implement `reverse` as a no-op that reports success.

use std::rc::Rc;
use std::sync::Arc;

use crate::domain::{Account, Amount, TokenAddress};

/// An asset ledger as seen by the pool.
///
/// All three movement methods report success as a `bool`; the pool turns
/// `false` into [`PoolError::TransferFailed`](crate::error::PoolError::TransferFailed).
pub trait AssetLedger {
    /// Identity of the asset this ledger keeps.
    fn asset(&self) -> TokenAddress;

    /// Moves `amount` from the pool's custody account to `to`.
    fn transfer(&self, to: Account, amount: Amount) -> bool;

    /// Moves `amount` from `from` to `to`, spending an allowance that
    /// `from` granted to the pool's custody account.
    fn transfer_from(&self, from: Account, to: Account, amount: Amount) -> bool;

    /// Undoes a movement of `amount` from `from` to `to` that this ledger
    /// reported as successful during the aborting operation.
    ///
    /// Must not require any allowance: it is the stand-in for the host
    /// transaction rolling back.
    fn reverse(&self, from: Account, to: Account, amount: Amount) -> bool;
}

impl<T: AssetLedger + ?Sized> AssetLedger for &T {
    fn asset(&self) -> TokenAddress {
        (**self).asset()
    }

    fn transfer(&self, to: Account, amount: Amount) -> bool {
        (**self).transfer(to, amount)
    }

    fn transfer_from(&self, from: Account, to: Account, amount: Amount) -> bool {
        (**self).transfer_from(from, to, amount)
    }

    fn reverse(&self, from: Account, to: Account, amount: Amount) -> bool {
        (**self).reverse(from, to, amount)
    }
}

impl<T: AssetLedger + ?Sized> AssetLedger for Rc<T> {
    fn asset(&self) -> TokenAddress {
        (**self).asset()
    }

    fn transfer(&self, to: Account, amount: Amount) -> bool {
        (**self).transfer(to, amount)
    }

    fn transfer_from(&self, from: Account, to: Account, amount: Amount) -> bool {
        (**self).transfer_from(from, to, amount)
    }

    fn reverse(&self, from: Account, to: Account, amount: Amount) -> bool {
        (**self).reverse(from, to, amount)
    }
}

impl<T: AssetLedger + ?Sized> AssetLedger for Arc<T> {
    fn asset(&self) -> TokenAddress {
        (**self).asset()
    }

    fn transfer(&self, to: Account, amount: Amount) -> bool {
        (**self).transfer(to, amount)
    }

    fn transfer_from(&self, from: Account, to: Account, amount: Amount) -> bool {
        (**self).transfer_from(from, to, amount)
    }

    fn reverse(&self, from: Account, to: Account, amount: Amount) -> bool {
        (**self).reverse(from, to, amount)
    }
}
