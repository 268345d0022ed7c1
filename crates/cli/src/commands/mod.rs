//! CLI commands module.

use anyhow::Result;
use clap::Subcommand;

mod demo;
mod verify;

#[derive(Subcommand)]
pub enum Commands {
    /// Build a demo chain from randomly generated transfers
    Demo(demo::DemoArgs),
    /// Replay and verify a JSON-encoded chain
    Verify(verify::VerifyArgs),
}

pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Demo(args) => demo::run(args),
        Commands::Verify(args) => verify::run(args),
    }
}
