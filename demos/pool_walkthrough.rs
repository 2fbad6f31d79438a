//! Constant-product pool walkthrough.
//!
//! Seeds a pool, trades against it in both directions, quotes prices,
//! shows a rejected over-withdrawal, and finally drains the pool.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=pairswap=debug cargo run --example pool_walkthrough
//! ```

use pairswap::adapters::{InMemoryLedger, ManualClock};
use pairswap::config::PoolConfig;
use pairswap::domain::{
    Account, AddLiquidity, Amount, Liquidity, PairSide, RemoveLiquidity, SwapExactIn, Timestamp,
    TokenAddress, TokenPair,
};
use pairswap::pool::{get_amount_in, get_amount_out, ConstantProductPool};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== Constant Product Pool (x · y = k) ===\n");

    // ── 1. Assets, accounts and ledgers ─────────────────────────────────
    let usdc: TokenAddress = "0x0101010101010101010101010101010101010101010101010101010101010101".parse()?;
    let weth = TokenAddress::from_bytes([2u8; 32]);
    let custody = Account::from_bytes([0xcc; 32]);
    let lp = Account::from_bytes([0x01; 32]);
    let trader = Account::from_bytes([0x02; 32]);

    let ledger_usdc = InMemoryLedger::new(usdc, custody);
    let ledger_weth = InMemoryLedger::new(weth, custody);
    ledger_usdc.mint(lp, Amount::new(1_000_000))?;
    ledger_weth.mint(lp, Amount::new(4_000_000))?;
    ledger_usdc.mint(trader, Amount::new(50_000))?;
    ledger_weth.mint(trader, Amount::new(50_000))?;
    ledger_usdc.approve(lp, custody, Amount::MAX);
    ledger_weth.approve(lp, custody, Amount::MAX);
    ledger_usdc.approve(trader, custody, Amount::MAX);
    ledger_weth.approve(trader, custody, Amount::MAX);

    // ── 2. Create the pool ──────────────────────────────────────────────
    let config = PoolConfig::new(TokenPair::new(usdc, weth)?, custody)?;
    let clock = ManualClock::new(Timestamp::from_secs(1_700_000_000));
    let pool = ConstantProductPool::new(config, ledger_usdc, ledger_weth, clock)?;
    let deadline = Timestamp::from_secs(1_700_000_300);

    // ── 3. First deposit fixes the price ────────────────────────────────
    let minted = pool.add_liquidity(
        lp,
        &AddLiquidity {
            token_a: usdc,
            token_b: weth,
            amount_a_desired: Amount::new(1_000_000),
            amount_b_desired: Amount::new(4_000_000),
            amount_a_min: Amount::ZERO,
            amount_b_min: Amount::ZERO,
            to: lp,
            deadline,
        },
    )?;
    println!("Seeded:       {minted}");
    let (ra, rb) = pool.reserves();
    println!("Reserves:     ({ra}, {rb})");
    println!("Price USDC:   {} WETH", pool.get_price(usdc, weth)?);

    // ── 4. Quote, then trade ────────────────────────────────────────────
    let quoted = get_amount_out(Amount::new(10_000), ra, rb)?;
    println!("\nQuote 10000 USDC -> {quoted} WETH");
    let sold = pool.swap_exact_tokens_for_tokens(
        trader,
        &SwapExactIn::new(Amount::new(10_000), quoted, usdc, weth, trader, deadline),
    )?;
    println!("Swapped:      {sold}");

    let (ra, rb) = pool.reserves();
    let needed = get_amount_in(Amount::new(5_000), rb, ra)?;
    println!("To get 5000 USDC back, sell at least {needed} WETH");
    let bought = pool.swap_exact_tokens_for_tokens(
        trader,
        &SwapExactIn::new(needed, Amount::new(5_000), weth, usdc, trader, deadline),
    )?;
    println!("Swapped:      {bought}");
    println!("Price USDC:   {} WETH", pool.get_price(usdc, weth)?);

    // ── 5. A rejected withdrawal leaves everything in place ─────────────
    let held = pool.liquidity_of(lp);
    let too_much = RemoveLiquidity {
        token_a: usdc,
        token_b: weth,
        liquidity: Liquidity::new(held.get() + 1),
        amount_a_min: Amount::ZERO,
        amount_b_min: Amount::ZERO,
        to: lp,
        deadline,
    };
    match pool.remove_liquidity(lp, &too_much) {
        Ok(outcome) => println!("\nUnexpected withdrawal: {outcome}"),
        Err(err) => println!("\nOver-withdrawal rejected: {err}"),
    }

    // ── 6. Drain the pool ───────────────────────────────────────────────
    let all = RemoveLiquidity {
        liquidity: held,
        ..too_much
    };
    let returned = pool.remove_liquidity(lp, &all)?;
    println!("Withdrew:     {returned}");
    println!(
        "LP balances:  {} USDC, {} WETH",
        pool.ledger(PairSide::A).balance_of(lp),
        pool.ledger(PairSide::B).balance_of(lp)
    );

    // ── 7. Event journal ────────────────────────────────────────────────
    println!("\nEvents:");
    for event in pool.take_events() {
        println!("  {event}");
    }
    pool.check_invariants()?;
    Ok(())
}
