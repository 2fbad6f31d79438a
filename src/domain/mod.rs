//! Value types of the pool domain.
//!
//! Amounts, liquidity shares, identities, prices, timestamps, and the
//! request/outcome records of the pool operations.  Newtypes keep raw
//! integers from being mixed up: an [`Amount`] of asset can never be
//! passed where a [`Liquidity`] share count is expected.

mod account;
mod amount;
mod hex32;
mod liquidity;
mod outcomes;
mod price;
mod requests;
mod rounding;
mod timestamp;
mod token_address;
mod token_pair;

pub use account::Account;
pub use amount::Amount;
pub use liquidity::Liquidity;
pub use outcomes::{AddLiquidityOutcome, RemoveLiquidityOutcome, SwapOutcome};
pub use price::Price;
pub use requests::{AddLiquidity, RemoveLiquidity, SwapExactIn};
pub use rounding::Rounding;
pub use timestamp::Timestamp;
pub use token_address::TokenAddress;
pub use token_pair::{PairSide, SwapDirection, TokenPair};
