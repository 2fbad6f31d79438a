//! Pool configuration.
//!
//! [`PoolConfig`] is the declarative blueprint of a pool: its asset pair
//! and the custody account holding the reserves.

mod pool_config;

pub use pool_config::PoolConfig;
