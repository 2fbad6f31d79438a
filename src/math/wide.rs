//! 256-bit intermediates for `a × b / c` and integer square roots.
//!
//! Reserves and amounts are `u128`, so the product of two of them needs up
//! to 256 bits.  Every proportional computation in the pool goes through
//! [`mul_div`], which multiplies in 256 bits and only fails if the final
//! quotient does not fit back into `u128`.

use uint::construct_uint;

use crate::domain::{Amount, Rounding};
use crate::error::PoolError;

construct_uint! {
    /// Unsigned 256-bit integer for intermediate products.
    pub struct U256(4);
}

impl U256 {
    /// Narrows to `u128`, or `None` if the value needs more than 128 bits.
    #[must_use]
    pub fn to_u128(&self) -> Option<u128> {
        if self.bits() > 128 {
            None
        } else {
            Some(self.low_u128())
        }
    }
}

/// Computes `a × b / divisor` with a 256-bit intermediate product.
///
/// # Errors
///
/// - [`PoolError::DivisionByZero`] if `divisor` is zero.
/// - [`PoolError::Overflow`] if the quotient exceeds `u128::MAX`.
///
/// # Examples
///
/// ```
/// use pairswap::domain::{Amount, Rounding};
/// use pairswap::math::mul_div;
///
/// // 100 × 4000 / 1100 = 363.63…
/// let down = mul_div(Amount::new(100), Amount::new(4_000), Amount::new(1_100), Rounding::Down);
/// let up = mul_div(Amount::new(100), Amount::new(4_000), Amount::new(1_100), Rounding::Up);
/// assert_eq!(down, Ok(Amount::new(363)));
/// assert_eq!(up, Ok(Amount::new(364)));
/// ```
pub fn mul_div(
    a: Amount,
    b: Amount,
    divisor: Amount,
    rounding: Rounding,
) -> Result<Amount, PoolError> {
    if divisor.is_zero() {
        return Err(PoolError::DivisionByZero);
    }
    let product = U256::from(a.get()) * U256::from(b.get());
    let d = U256::from(divisor.get());
    let mut quotient = product / d;
    if rounding.is_up() && !(product % d).is_zero() {
        quotient = quotient + U256::one();
    }
    quotient
        .to_u128()
        .map(Amount::new)
        .ok_or(PoolError::Overflow("mul_div quotient exceeds u128"))
}

/// Integer square root of `a × b`, rounded down.
///
/// Babylonian (Newton) iteration on the 256-bit product.  The result
/// always fits in `u128` because `√(2^256) = 2^128`.
///
/// # Examples
///
/// ```
/// use pairswap::domain::Amount;
/// use pairswap::math::sqrt_product;
///
/// assert_eq!(sqrt_product(Amount::new(1_000), Amount::new(4_000)), 2_000);
/// assert_eq!(sqrt_product(Amount::new(2), Amount::new(1)), 1);
/// ```
#[must_use]
pub fn sqrt_product(a: Amount, b: Amount) -> u128 {
    let n = U256::from(a.get()) * U256::from(b.get());
    // isqrt(n) < 2^128 for any n < 2^256
    isqrt(n).low_u128()
}

fn isqrt(n: U256) -> U256 {
    if n.is_zero() {
        return U256::zero();
    }
    // first guess: ceil(n / 2), written to avoid overflow at U256::MAX
    let mut x = n;
    let mut y = (n >> 1usize) + (n & U256::one());
    while y < x {
        x = y;
        y = (x + n / x) >> 1usize;
    }
    x
}
