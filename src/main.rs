use clap::Parser;
use truckrig::{init_logging, Cli};

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let cli = Cli::parse();
    truckrig::cli::run(cli)
}
