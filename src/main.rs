use std::io;
use std::process;

use anyhow::Result;
use clap::CommandFactory;
use tofu_apply::cli::{self, Cli, LogLevel};
use tracing::error;

fn main() -> Result<()> {
    let args = cli::parse_args()?;

    let log_level = match &args.command {
        cli::Commands::Render(opts) => opts.log_level,
        cli::Commands::Validate(opts) => opts.log_level,
        cli::Commands::Completions(_) => LogLevel::Error,
    };
    tofu_apply::init_logging(log_level)?;

    let result = match &args.command {
        cli::Commands::Render(opts) => tofu_apply::run_render(opts).map(|command| {
            println!("{}", command);
        }),
        cli::Commands::Validate(opts) => tofu_apply::run_validate(opts),
        cli::Commands::Completions(opts) => {
            let mut cmd = Cli::command();
            clap_complete::generate(opts.shell, &mut cmd, env!("CARGO_PKG_NAME"), &mut io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        error!("{:#}", e);
        process::exit(1);
    }

    Ok(())
}
