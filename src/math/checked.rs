//! Checked arithmetic that reports failures as [`PoolError`].
//!
//! The domain newtypes expose `Option`-returning checked operations; pool
//! code wants a `Result` naming what overflowed.  [`CheckedArithmetic`]
//! bridges the two so state mutations read as a chain of `?`.

use crate::domain::{Amount, Liquidity};
use crate::error::PoolError;

/// Fallible addition and subtraction for the pool's counters.
///
/// The `what` argument names the quantity being updated and ends up in
/// the error message.  Nothing saturates: every failure propagates.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Overflow`] if the result is not representable.
    fn safe_add(&self, other: &Self, what: &'static str) -> Result<Self, PoolError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Underflow`] if the result would be negative.
    fn safe_sub(&self, other: &Self, what: &'static str) -> Result<Self, PoolError>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self, what: &'static str) -> Result<Self, PoolError> {
        self.checked_add(other).ok_or(PoolError::Overflow(what))
    }

    #[inline]
    fn safe_sub(&self, other: &Self, what: &'static str) -> Result<Self, PoolError> {
        self.checked_sub(other).ok_or(PoolError::Underflow(what))
    }
}

impl CheckedArithmetic for Liquidity {
    #[inline]
    fn safe_add(&self, other: &Self, what: &'static str) -> Result<Self, PoolError> {
        self.checked_add(other).ok_or(PoolError::Overflow(what))
    }

    #[inline]
    fn safe_sub(&self, other: &Self, what: &'static str) -> Result<Self, PoolError> {
        self.checked_sub(other).ok_or(PoolError::Underflow(what))
    }
}
