use clap::Parser;

mod cli;

use cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.logging.setup_logging(3)?;

    cli.command.run()
}
