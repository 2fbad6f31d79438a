//! Integer arithmetic used by the pool.
//!
//! - [`mul_div`]: `a × b / c` through a 256-bit intermediate, with an
//!   explicit [`Rounding`](crate::domain::Rounding).
//! - [`sqrt_product`]: `⌊√(a × b)⌋`, the first-deposit share count.
//! - [`CheckedArithmetic`]: `Result`-returning add/sub for counters.
//!
//! No floating point is used anywhere in the crate.

mod checked;
mod wide;

pub use checked::CheckedArithmetic;
pub use wide::{mul_div, sqrt_product, U256};
