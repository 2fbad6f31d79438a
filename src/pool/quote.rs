//! Read-only quote helpers.
//!
//! Pure functions over reserve values: none of them touches pool state,
//! so they can price a trade before it is submitted.  The swap engine
//! itself computes its output through [`get_amount_out`].

use crate::domain::{Amount, Price, Rounding};
use crate::error::PoolError;
use crate::math::{mul_div, U256};

/// Output of a constant-product trade of `amount_in`, rounded down.
///
/// `amount_out = ⌊amount_in × reserve_out / (reserve_in + amount_in)⌋`
///
/// The floor keeps `reserve_in × reserve_out` from decreasing once the
/// trade is applied.
///
/// # Errors
///
/// - [`PoolError::InvalidAmount`] if `amount_in` is zero.
/// - [`PoolError::InsufficientLiquidity`] if either reserve is zero.
///
/// # Examples
///
/// ```
/// use pairswap::domain::Amount;
/// use pairswap::pool::get_amount_out;
///
/// let out = get_amount_out(Amount::new(100), Amount::new(1_000), Amount::new(4_000));
/// assert_eq!(out, Ok(Amount::new(363)));
/// ```
pub fn get_amount_out(
    amount_in: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
) -> Result<Amount, PoolError> {
    if amount_in.is_zero() {
        return Err(PoolError::InvalidAmount);
    }
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(PoolError::InsufficientLiquidity);
    }
    let numerator = U256::from(amount_in.get()) * U256::from(reserve_out.get());
    let denominator = U256::from(reserve_in.get()) + U256::from(amount_in.get());
    // strictly below reserve_out, so it narrows
    (numerator / denominator)
        .to_u128()
        .map(Amount::new)
        .ok_or(PoolError::Overflow("amount out"))
}

/// Smallest input that yields at least `amount_out`, rounded up.
///
/// `amount_in = ⌈amount_out × reserve_in / (reserve_out − amount_out)⌉`
///
/// # Errors
///
/// - [`PoolError::InvalidAmount`] if `amount_out` is zero.
/// - [`PoolError::InsufficientLiquidity`] if either reserve is zero or
///   `amount_out` would drain the output reserve.
/// - [`PoolError::Overflow`] if the required input exceeds `u128::MAX`.
pub fn get_amount_in(
    amount_out: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
) -> Result<Amount, PoolError> {
    if amount_out.is_zero() {
        return Err(PoolError::InvalidAmount);
    }
    if reserve_in.is_zero() || reserve_out.is_zero() || amount_out >= reserve_out {
        return Err(PoolError::InsufficientLiquidity);
    }
    let remaining = reserve_out
        .checked_sub(&amount_out)
        .ok_or(PoolError::InsufficientLiquidity)?;
    mul_div(amount_out, reserve_in, remaining, Rounding::Up)
}

/// Amount of B worth `amount_a` of A at the ratio `reserve_a : reserve_b`,
/// rounded down.
///
/// # Errors
///
/// - [`PoolError::InvalidAmount`] if `amount_a` is zero.
/// - [`PoolError::InsufficientLiquidity`] if either reserve is zero.
pub fn quote(amount_a: Amount, reserve_a: Amount, reserve_b: Amount) -> Result<Amount, PoolError> {
    if amount_a.is_zero() {
        return Err(PoolError::InvalidAmount);
    }
    if reserve_a.is_zero() || reserve_b.is_zero() {
        return Err(PoolError::InsufficientLiquidity);
    }
    mul_div(amount_a, reserve_b, reserve_a, Rounding::Down)
}

/// Price of the base asset in quote units, scaled by [`Price::SCALE`].
///
/// # Errors
///
/// Returns [`PoolError::NoLiquidity`] if the base reserve is zero.
pub(crate) fn spot_price(reserve_base: Amount, reserve_quote: Amount) -> Result<Price, PoolError> {
    if reserve_base.is_zero() {
        return Err(PoolError::NoLiquidity);
    }
    mul_div(
        reserve_quote,
        Amount::new(Price::SCALE),
        reserve_base,
        Rounding::Down,
    )
    .map(|raw| Price::from_raw(raw.get()))
}
