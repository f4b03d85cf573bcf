use anyhow::Result;
use clap::Parser;
use diagscore::cli::{self, Cli};
use env_logger::Env;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    cli::run(cli)
}
