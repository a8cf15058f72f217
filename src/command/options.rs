//! Ordered option tables for `tofu apply`.
//!
//! [`APPLY_SCOPE`] holds the options accepted in both execution modes and
//! [`PLAN_SCOPE`] the options that only make sense while `tofu` computes
//! its own plan. Table order is emission order.

use super::flag::{FlagKind, expand_repeatable, format_flag, parse_bool};
use crate::config::{ApplyInputs, InputKey};
use crate::diagnostics::Diagnostics;

/// How an option turns into tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionForm {
    /// `--name` on `"true"`.
    Switch,
    /// `--name=false` on `"false"`; `"true"` is the tool's default and emits nothing.
    Negatable,
    /// `--name=value`, suppressed when the value equals `sentinel`.
    Value { sentinel: Option<&'static str> },
    /// One `--name=element` per comma-separated element.
    Repeatable,
}

/// One row of an option table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSpec {
    pub key: InputKey,
    pub form: OptionForm,
}

impl OptionSpec {
    const fn switch(key: InputKey) -> Self {
        Self {
            key,
            form: OptionForm::Switch,
        }
    }

    const fn negatable(key: InputKey) -> Self {
        Self {
            key,
            form: OptionForm::Negatable,
        }
    }

    const fn value(key: InputKey) -> Self {
        Self {
            key,
            form: OptionForm::Value { sentinel: None },
        }
    }

    const fn value_with_default(key: InputKey, sentinel: &'static str) -> Self {
        Self {
            key,
            form: OptionForm::Value {
                sentinel: Some(sentinel),
            },
        }
    }

    const fn repeatable(key: InputKey) -> Self {
        Self {
            key,
            form: OptionForm::Repeatable,
        }
    }

    /// Renders this option from `inputs`. Suppressed options yield no tokens.
    pub fn tokens(&self, inputs: &ApplyInputs, diagnostics: &dyn Diagnostics) -> Vec<String> {
        let name = self.key.name();
        let value = inputs.get(self.key);

        let token = match self.form {
            OptionForm::Switch => format_flag(name, value, FlagKind::Boolean, diagnostics),
            OptionForm::Negatable => match parse_bool(name, value, diagnostics) {
                Some(false) => format!("--{}=false", name),
                _ => String::new(),
            },
            OptionForm::Value { sentinel } => {
                let value = value.filter(|v| sentinel.is_none_or(|s| s != *v));
                format_flag(name, value, FlagKind::String, diagnostics)
            }
            OptionForm::Repeatable => return expand_repeatable(name, value),
        };

        if token.is_empty() {
            Vec::new()
        } else {
            vec![token]
        }
    }
}

/// Options valid in both saved-plan and automatic-plan mode.
pub const APPLY_SCOPE: &[OptionSpec] = &[
    OptionSpec::switch(InputKey::AutoApprove),
    OptionSpec::switch(InputKey::CompactWarnings),
    OptionSpec::switch(InputKey::ConsolidateWarnings),
    OptionSpec::switch(InputKey::ConsolidateErrors),
    OptionSpec::negatable(InputKey::Input),
    OptionSpec::switch(InputKey::Json),
    OptionSpec::negatable(InputKey::Lock),
    OptionSpec::value_with_default(InputKey::LockTimeout, "0s"),
    OptionSpec::switch(InputKey::NoColor),
    OptionSpec::switch(InputKey::Concise),
    OptionSpec::value_with_default(InputKey::Parallelism, "10"),
    OptionSpec::value(InputKey::State),
    OptionSpec::value(InputKey::StateOut),
    OptionSpec::value(InputKey::Backup),
    OptionSpec::switch(InputKey::ShowSensitive),
    OptionSpec::value_with_default(InputKey::Deprecation, "module:all"),
];

/// Planning options, only valid when no saved plan is given.
///
/// `destroy` and `refresh-only` are passed through together if both are
/// set; `tofu` itself rejects the combination.
pub const PLAN_SCOPE: &[OptionSpec] = &[
    OptionSpec::switch(InputKey::Destroy),
    OptionSpec::switch(InputKey::RefreshOnly),
    OptionSpec::negatable(InputKey::Refresh),
    OptionSpec::repeatable(InputKey::Replace),
    OptionSpec::repeatable(InputKey::Target),
    OptionSpec::value(InputKey::TargetFile),
    OptionSpec::repeatable(InputKey::Exclude),
    OptionSpec::value(InputKey::ExcludeFile),
    OptionSpec::repeatable(InputKey::Var),
    OptionSpec::repeatable(InputKey::VarFile),
];
