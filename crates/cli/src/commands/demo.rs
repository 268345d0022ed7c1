//! Demo command: build and verify a chain of random transfers.

use anyhow::{ensure, Context, Result};
use clap::Args;
use colored::Colorize;
use microledger_chain::{
    encode_chain_pretty, ChainBuilder, ChainConfig, ChainValidator, DrainOrder,
};
use microledger_core::Ledger;
use std::fs;
use std::path::PathBuf;

use crate::generator::TxnGenerator;

#[derive(Args)]
pub struct DemoArgs {
    /// Number of random transfers to generate
    #[arg(short = 'n', long, default_value = "1000")]
    txns: usize,

    /// Maximum transactions per block
    #[arg(short, long, default_value = "10")]
    block_size: usize,

    /// Starting balance for each demo account
    #[arg(long, default_value = "100")]
    balance: i64,

    /// Seed for the random generator
    #[arg(short, long, default_value = "42")]
    seed: u64,

    /// Write the chain as pretty-printed JSON to this file
    #[arg(short, long)]
    out: Option<PathBuf>,
}

pub fn run(args: DemoArgs) -> Result<()> {
    println!("{}", "Building demo chain...".bold().cyan());
    println!();

    let initial: Ledger = [("Alice", args.balance), ("Bob", args.balance)]
        .into_iter()
        .collect();

    let config = ChainConfig {
        max_block_size: args.block_size,
        drain_order: DrainOrder::Fifo,
    };
    let mut builder = ChainBuilder::with_config(initial, config);
    builder.submit_all(TxnGenerator::new(args.seed).take(args.txns));

    let summary = builder.drain_with(|txn, reason| {
        println!("  {} {} ({})", "ignored".yellow(), txn, reason);
    });

    println!();
    println!(
        "{}  Sealed {} blocks ({} accepted, {} ignored)",
        "✓".green().bold(),
        summary.blocks_sealed,
        summary.accepted,
        summary.rejected.len()
    );

    println!();
    println!("{}", "Balances after build:".bold());
    for (account, balance) in builder.ledger().accounts() {
        println!("  {}: {}", account, balance.to_string().bright_yellow());
    }

    let expected = builder.ledger().clone();
    let chain = builder.into_chain();

    let replayed = ChainValidator::verify(&chain)
        .context("freshly built chain failed verification")?;
    ensure!(replayed == expected, "replayed balances diverge from builder state");

    println!();
    println!(
        "{}  Replayed {} blocks from genesis",
        "✓".green().bold(),
        chain.len()
    );
    println!();
    println!("{}", "Replayed balances:".bold());
    for (account, balance) in replayed.accounts() {
        println!("  {}: {}", account, balance.to_string().bright_yellow());
    }

    if let Some(path) = args.out {
        fs::write(&path, encode_chain_pretty(&chain))
            .with_context(|| format!("Failed to write chain to {:?}", path))?;
        println!("{}  Wrote chain to {}", "✓".green().bold(), path.display());
    }

    Ok(())
}
