pub mod cli;
pub mod command;
pub mod config;
pub mod diagnostics;
pub mod error;
mod serde_helpers;

pub use command::{CommandAssembler, ExecutionMode, TofuCommand, build};
pub use config::{ApplyInputs, InputKey};
pub use error::TofuApplyError;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{FmtSubscriber, filter::LevelFilter};

use crate::diagnostics::{RecordingDiagnostics, TracingDiagnostics};

pub fn init_logging(log_level: cli::LogLevel) -> Result<()> {
    let filter = match log_level {
        cli::LogLevel::Trace => LevelFilter::TRACE,
        cli::LogLevel::Debug => LevelFilter::DEBUG,
        cli::LogLevel::Info => LevelFilter::INFO,
        cli::LogLevel::Warn => LevelFilter::WARN,
        cli::LogLevel::Error => LevelFilter::ERROR,
    };

    tracing::subscriber::set_global_default(
        FmtSubscriber::builder()
            .with_max_level(filter)
            .with_writer(std::io::stderr)
            .finish(),
    )
    .context("failed to set global default tracing subscriber")
}

/// Loads the input record from the optional file and layers the overrides on top.
pub fn load_record(opts: &cli::InputArgs) -> Result<ApplyInputs> {
    let mut inputs = match &opts.file {
        Some(path) => config::load_inputs(path)
            .with_context(|| format!("failed to load inputs from {}", path))?,
        None => ApplyInputs::new(),
    };
    inputs.apply_overrides(&opts.overrides);
    Ok(inputs)
}

/// Builds the command for `render`; the caller prints it.
pub fn run_render(opts: &cli::RenderArgs) -> Result<String> {
    let inputs = load_record(&opts.inputs)?;
    let command = CommandAssembler::new(&TracingDiagnostics)
        .with_program(opts.program.as_str())
        .build(&inputs);
    Ok(command)
}

/// Checks the input record, failing if any option could not be interpreted.
pub fn run_validate(opts: &cli::ValidateArgs) -> Result<()> {
    let inputs = load_record(&opts.inputs)?;
    let diagnostics = RecordingDiagnostics::new();
    let command = CommandAssembler::new(&diagnostics).assemble(&inputs);

    let warnings = diagnostics.messages();
    if !warnings.is_empty() {
        return Err(TofuApplyError::Validation(warnings.join("; ")))
            .context("input validation failed");
    }

    info!(
        "validation successful: mode={}, {} input(s), {} argument(s)",
        command.mode(),
        inputs.iter().count(),
        command.args().len()
    );
    Ok(())
}
