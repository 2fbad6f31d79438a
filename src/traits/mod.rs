//! Capability interfaces of the pool's external collaborators.
//!
//! - [`AssetLedger`]: one per asset; moves balances in and out of the
//!   pool's custody account.
//! - [`Clock`]: current time for deadline checks.
//!
//! Both are implemented by the adapters in [`crate::adapters`] and by
//! test doubles alike.

mod asset_ledger;
mod clock;

pub use asset_ledger::AssetLedger;
pub use clock::Clock;
