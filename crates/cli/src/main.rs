//! microledger CLI entry point.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod commands;
mod generator;

#[derive(Parser)]
#[command(name = "microledger")]
#[command(about = "A minimal append-only ledger", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<commands::Commands>,
}

fn init_tracing() {
    // RUST_LOG overrides the default level.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Some(cmd) => {
            if let Err(e) = commands::run(cmd) {
                eprintln!("Error: {:#}", e);
                std::process::exit(1);
            }
        }
        None => {
            println!("microledger - A minimal append-only ledger");
            println!("Run 'microledger --help' for usage information.");
        }
    }
}
