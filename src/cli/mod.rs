mod commands;
mod logging;

pub use commands::*;
pub use logging::*;

use clap::{Parser, Subcommand};

/// Pad symbolic sequences to a fixed length and encode them.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    #[command(flatten)]
    pub logging: LogArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Pad sequences and print one row per line.
    Pad(PadArgs),
    /// Pad, then label or one-hot encode into `.npy` files.
    Encode(EncodeArgs),
    /// Check the length invariant of every policy on random batches.
    Check(CheckArgs),
}

impl Command {
    pub fn run(&self) -> anyhow::Result<()> {
        match self {
            Command::Pad(args) => args.run(),
            Command::Encode(args) => args.run(),
            Command::Check(args) => args.run(),
        }
    }
}
