//! Unified error type for the pool.
//!
//! Every fallible operation in the crate returns [`PoolError`].  Any error
//! aborts the whole operation: pool state is restored and asset movements
//! made during the operation are reversed before the error reaches the
//! caller.

use crate::domain::TokenAddress;

/// Errors produced by pool operations, quote helpers and configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    /// The asset pair passed to a liquidity operation is not the pool's pair.
    #[error("asset pair does not match the pool")]
    InvalidTokens,

    /// The operation deadline is earlier than the current time.
    #[error("deadline expired")]
    Expired,

    /// The accepted amount of asset B is below the caller's minimum.
    #[error("insufficient asset B amount")]
    InsufficientB,

    /// The accepted amount of asset A is below the caller's minimum.
    #[error("insufficient asset A amount")]
    InsufficientA,

    /// The deposit would mint zero liquidity or accept a zero amount.
    #[error("no liquidity minted")]
    NoLiquidityMinted,

    /// The owner holds fewer liquidity shares than requested.
    #[error("insufficient liquidity share")]
    InsufficientShare,

    /// A liquidity amount of zero was requested.
    #[error("liquidity amount must be positive")]
    InvalidLiquidity,

    /// The swap path does not consist of exactly two assets.
    #[error("only two-asset swap paths are supported")]
    UnsupportedPath,

    /// The assets do not form the pool's pair in either direction.
    #[error("asset pair is not supported by the pool")]
    InvalidPair,

    /// The swap output is below the caller's minimum.
    #[error("insufficient output amount")]
    InsufficientOutput,

    /// An asset ledger refused a transfer.
    #[error("transfer of asset {0} failed")]
    TransferFailed(TokenAddress),

    /// The base asset of a price query has no reserve.
    #[error("no liquidity for the requested price")]
    NoLiquidity,

    /// A quote was requested for a zero amount.
    #[error("amount must be positive")]
    InvalidAmount,

    /// One of the reserves used by a quote is zero or too small.
    #[error("insufficient liquidity")]
    InsufficientLiquidity,

    /// A pool operation was entered while another one is still running.
    #[error("reentrant call rejected")]
    Reentrancy,

    /// Arithmetic overflow.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Arithmetic underflow.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Invalid token identity (e.g. a pair of identical assets).
    #[error("invalid token: {0}")]
    InvalidToken(&'static str),

    /// The pool configuration or its collaborators are inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, PoolError>;
