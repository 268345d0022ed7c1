//! Verify command: replay a chain from its JSON wire form.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use microledger_chain::ChainValidator;
use std::fs;
use std::path::PathBuf;

#[derive(Args)]
pub struct VerifyArgs {
    /// Path to a JSON-encoded chain
    chain: PathBuf,
}

pub fn run(args: VerifyArgs) -> Result<()> {
    let input = fs::read_to_string(&args.chain)
        .with_context(|| format!("Failed to read chain file: {:?}", args.chain))?;

    let ledger = ChainValidator::verify_json(&input)
        .with_context(|| format!("Chain {:?} failed verification", args.chain))?;

    println!("{}  Chain verified", "✓".green().bold());
    println!();
    println!("{}", "Final balances:".bold());
    for (account, balance) in ledger.accounts() {
        println!("  {}: {}", account, balance.to_string().bright_yellow());
    }

    Ok(())
}
