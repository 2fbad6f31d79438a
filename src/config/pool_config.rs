//! Configuration for a two-asset constant-product pool.

use serde::{Deserialize, Serialize};

use crate::domain::{Account, TokenPair};
use crate::error::PoolError;

/// Immutable parameters of a pool.
///
/// - `token_pair`: the pool's assets in fixed `(A, B)` order.  Liquidity
///   requests must name them in this order; swaps may go either way.
/// - `pool_account`: the custody account that holds the reserves on both
///   asset ledgers and receives pulled deposits.
///
/// # Validation
///
/// - The pair's assets are distinct (checked by [`TokenPair`]).
/// - The custody account is not the all-zero account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolConfig {
    token_pair: TokenPair,
    pool_account: Account,
}

impl PoolConfig {
    /// Creates and validates a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfiguration`] if `pool_account` is
    /// the zero account.
    pub fn new(token_pair: TokenPair, pool_account: Account) -> Result<Self, PoolError> {
        let config = Self {
            token_pair,
            pool_account,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// Deserialized configurations are validated again when a pool is built
    /// from them.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfiguration`] if `pool_account` is
    /// the zero account.
    pub fn validate(&self) -> Result<(), PoolError> {
        if self.pool_account.is_zero() {
            return Err(PoolError::InvalidConfiguration(
                "pool account must not be the zero account",
            ));
        }
        Ok(())
    }

    /// Returns the asset pair.
    #[must_use]
    pub const fn token_pair(&self) -> &TokenPair {
        &self.token_pair
    }

    /// Returns the custody account.
    #[must_use]
    pub const fn pool_account(&self) -> Account {
        self.pool_account
    }
}
