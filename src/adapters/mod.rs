//! Ready-made collaborator implementations.
//!
//! [`InMemoryLedger`] keeps balances and allowances in process and is the
//! ledger used by simulations and tests.  [`SystemClock`] reads wall-clock
//! time; [`ManualClock`] is advanced explicitly.

mod clock;
mod in_memory_ledger;

pub use clock::{ManualClock, SystemClock};
pub use in_memory_ledger::InMemoryLedger;
