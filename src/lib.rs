//! # pairswap
//!
//! A two-asset constant-product liquidity pool: deposit a pair of assets for
//! a proportional liquidity share, burn the share to withdraw, and trade one
//! asset for the other at a price set by the reserves (`x · y = k`).
//!
//! The pool keeps only bookkeeping.  Assets live on two external ledgers,
//! driven through the [`AssetLedger`](traits::AssetLedger) capability, and
//! deadlines are checked against a [`Clock`](traits::Clock).  Every
//! mutating operation is non-reentrant and all-or-nothing: a failure
//! restores the pool state and hands back any asset already moved.
//!
//! There are no fees, no multi-hop routing and no transferable shares.
//!
//! # Quick Start
//!
//! ```rust
//! use pairswap::adapters::{InMemoryLedger, ManualClock};
//! use pairswap::config::PoolConfig;
//! use pairswap::domain::{
//!     Account, AddLiquidity, Amount, SwapExactIn, Timestamp, TokenAddress, TokenPair,
//! };
//! use pairswap::pool::ConstantProductPool;
//!
//! // 1. Two assets and a custody account for the reserves
//! let usdc = TokenAddress::from_bytes([1u8; 32]);
//! let weth = TokenAddress::from_bytes([2u8; 32]);
//! let custody = Account::from_bytes([0xcc; 32]);
//! let lp = Account::from_bytes([0x01; 32]);
//! let trader = Account::from_bytes([0x02; 32]);
//!
//! // 2. Ledgers with balances and allowances for the pool
//! let ledger_usdc = InMemoryLedger::new(usdc, custody);
//! let ledger_weth = InMemoryLedger::new(weth, custody);
//! ledger_usdc.mint(lp, Amount::new(1_000)).expect("mint");
//! ledger_weth.mint(lp, Amount::new(4_000)).expect("mint");
//! ledger_usdc.mint(trader, Amount::new(100)).expect("mint");
//! ledger_usdc.approve(lp, custody, Amount::new(1_000));
//! ledger_weth.approve(lp, custody, Amount::new(4_000));
//! ledger_usdc.approve(trader, custody, Amount::new(100));
//!
//! // 3. The pool
//! let pair = TokenPair::new(usdc, weth).expect("distinct assets");
//! let config = PoolConfig::new(pair, custody).expect("valid config");
//! let pool = ConstantProductPool::new(config, ledger_usdc, ledger_weth, ManualClock::default())
//!     .expect("pool created");
//!
//! // 4. Seed it
//! pool.add_liquidity(lp, &AddLiquidity {
//!     token_a: usdc,
//!     token_b: weth,
//!     amount_a_desired: Amount::new(1_000),
//!     amount_b_desired: Amount::new(4_000),
//!     amount_a_min: Amount::ZERO,
//!     amount_b_min: Amount::ZERO,
//!     to: lp,
//!     deadline: Timestamp::MAX,
//! })
//! .expect("deposit");
//!
//! // 5. Trade 100 USDC for WETH
//! let request = SwapExactIn::new(Amount::new(100), Amount::ZERO, usdc, weth, trader, Timestamp::MAX);
//! let outcome = pool.swap_exact_tokens_for_tokens(trader, &request).expect("swap");
//! assert_eq!(outcome.amount_out, Amount::new(363));
//! assert_eq!(pool.reserves(), (Amount::new(1_100), Amount::new(3_637)));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │    Caller     │  Account + request struct
//! └──────┬───────┘
//!        │ add_liquidity / remove_liquidity / swap_exact_tokens_for_tokens
//!        ▼
//! ┌──────────────┐
//! │     Pool      │  reentrancy guard → transaction → body → commit | abort
//! └──────┬───────┘
//!        │ AssetLedger (transfer, transfer_from, reverse) + Clock
//!        ▼
//! ┌──────────────┐
//! │ Collaborators │  InMemoryLedger, ManualClock, SystemClock, or your own
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`Liquidity`](domain::Liquidity), [`Price`](domain::Price), requests and outcomes |
//! | [`traits`] | Collaborator capabilities: [`AssetLedger`](traits::AssetLedger), [`Clock`](traits::Clock) |
//! | [`adapters`] | [`InMemoryLedger`](adapters::InMemoryLedger), [`SystemClock`](adapters::SystemClock), [`ManualClock`](adapters::ManualClock) |
//! | [`config`] | [`PoolConfig`](config::PoolConfig) |
//! | [`pool`] | [`ConstantProductPool`](pool::ConstantProductPool) and the quote helpers |
//! | [`math`] | 256-bit `mul_div`, integer square root, checked counters |
//! | [`error`] | [`PoolError`](error::PoolError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod math;
pub mod pool;
pub mod prelude;
pub mod traits;
