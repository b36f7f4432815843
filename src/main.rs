use anyhow::Result;
use clap::Parser;
use log::error;
use std::process::ExitCode;

use paper_wallet::cli::Cli;
use paper_wallet::commands::paper_wallet as pipeline;
use paper_wallet::output;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let wallet = pipeline::generate()?;
    pipeline::emit(&wallet, &cli.output_dir, output::now())?;
    Ok(())
}
