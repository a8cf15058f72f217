//! Construction of the `tofu apply` command line.
//!
//! [`CommandAssembler`] is the entry point. It picks the [`ExecutionMode`]
//! from the input record, lays down the program, the optional global
//! `-chdir` option and the `apply` subcommand, then walks the option tables
//! in [`options`] in order. Per-option rendering lives in [`flag`].

mod args;
pub mod flag;
pub mod options;

use std::fmt;

use strum::Display;
use tracing::{debug, info};

pub use args::CommandArgsBuilder;
pub use flag::{FlagKind, expand_repeatable, format_flag};
pub use options::{APPLY_SCOPE, OptionForm, OptionSpec, PLAN_SCOPE};

use crate::config::{ApplyInputs, InputKey};
use crate::diagnostics::{Diagnostics, TracingDiagnostics};

/// Program invoked when no override is given.
pub const DEFAULT_PROGRAM: &str = "tofu";

/// The subcommand every built command runs.
pub const SUBCOMMAND: &str = "apply";

/// How `tofu apply` obtains its plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ExecutionMode {
    /// Apply a plan file produced earlier by `tofu plan -out`.
    SavedPlan,
    /// Let `tofu apply` compute the plan itself.
    AutomaticPlan,
}

impl ExecutionMode {
    /// Selects the mode from the `plan-file` input alone.
    pub fn select(inputs: &ApplyInputs) -> Self {
        if inputs.get(InputKey::PlanFile).is_some() {
            Self::SavedPlan
        } else {
            Self::AutomaticPlan
        }
    }

    /// Returns true if planning options are emitted in this mode.
    pub fn accepts_plan_options(self) -> bool {
        matches!(self, Self::AutomaticPlan)
    }
}

/// A fully assembled command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TofuCommand {
    mode: ExecutionMode,
    tokens: Vec<String>,
}

impl TofuCommand {
    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }

    /// All tokens, starting with the program name.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// The program name (first token).
    pub fn program(&self) -> &str {
        self.tokens.first().map(String::as_str).unwrap_or_default()
    }

    /// Everything after the program name.
    pub fn args(&self) -> &[String] {
        self.tokens.get(1..).unwrap_or_default()
    }

    pub fn into_tokens(self) -> Vec<String> {
        self.tokens
    }
}

impl fmt::Display for TofuCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join(" "))
    }
}

/// Builds `tofu apply` command lines from input records.
///
/// The assembler keeps no state between builds; one instance can serve any
/// number of records.
pub struct CommandAssembler<'a> {
    program: String,
    diagnostics: &'a dyn Diagnostics,
}

impl<'a> CommandAssembler<'a> {
    /// Creates an assembler for [`DEFAULT_PROGRAM`] reporting warnings to `diagnostics`.
    pub fn new(diagnostics: &'a dyn Diagnostics) -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            diagnostics,
        }
    }

    /// Replaces the program name placed at the head of the command.
    #[must_use]
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Assembles the command tokens for `inputs`.
    #[tracing::instrument(skip_all)]
    pub fn assemble(&self, inputs: &ApplyInputs) -> TofuCommand {
        let mode = ExecutionMode::select(inputs);
        debug!("execution mode: {}", mode);

        let mut builder = CommandArgsBuilder::new();
        builder.push_arg(self.program.as_str());
        if let Some(dir) = inputs.get(InputKey::Chdir) {
            builder.push_global(InputKey::Chdir.name(), dir);
        }
        builder.push_arg(SUBCOMMAND);

        if let Some(plan_file) = inputs.get(InputKey::PlanFile) {
            builder.push_arg(plan_file);
        }

        for spec in APPLY_SCOPE {
            builder.extend(spec.tokens(inputs, self.diagnostics));
        }

        if mode.accepts_plan_options() {
            for spec in PLAN_SCOPE {
                builder.extend(spec.tokens(inputs, self.diagnostics));
            }
        } else {
            for spec in PLAN_SCOPE.iter().filter(|s| inputs.get(s.key).is_some()) {
                debug!("ignoring {} with a saved plan", spec.key);
            }
        }

        TofuCommand {
            mode,
            tokens: builder.into_args(),
        }
    }

    /// Assembles the command for `inputs` and joins it with single spaces.
    pub fn build(&self, inputs: &ApplyInputs) -> String {
        let command = self.assemble(inputs).to_string();
        info!("built command: {}", command);
        command
    }
}

/// Builds the `tofu apply` command for `inputs`, logging warnings through `tracing`.
pub fn build(inputs: &ApplyInputs) -> String {
    CommandAssembler::new(&TracingDiagnostics).build(inputs)
}
