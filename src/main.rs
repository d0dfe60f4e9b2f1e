//! CLI entry point for tiling enumeration and level assembly

use clap::Parser;
use nominofill::io::cli::{Cli, LevelRunner};

fn main() -> nominofill::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut runner = LevelRunner::new(cli);
    runner.run()
}
