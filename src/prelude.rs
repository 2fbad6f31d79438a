//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use pairswap::prelude::*;
//! ```
//!
//! Brings the domain types, collaborator traits, the pool, its
//! configuration and the error type into scope.

pub use crate::domain::{
    Account, AddLiquidity, AddLiquidityOutcome, Amount, Liquidity, PairSide, Price,
    RemoveLiquidity, RemoveLiquidityOutcome, SwapDirection, SwapExactIn, SwapOutcome, Timestamp,
    TokenAddress, TokenPair,
};

pub use crate::traits::{AssetLedger, Clock};

pub use crate::config::PoolConfig;

pub use crate::pool::{get_amount_in, get_amount_out, quote, ConstantProductPool, PoolEvent, PoolSnapshot};

pub use crate::error::{PoolError, Result};
