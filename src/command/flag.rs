//! Formatting of individual options into flag tokens.

use strum::Display;

use crate::diagnostics::Diagnostics;

/// How a single-valued option is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum FlagKind {
    /// `--name` when the value is `"true"`, nothing otherwise.
    Boolean,
    /// `--name=value` when the value is non-empty.
    String,
}

/// Interprets a boolean-ish input value.
///
/// Returns `None` for absent or empty values. Any literal other than
/// `"true"`/`"false"` is reported through `diagnostics` and also yields
/// `None`.
pub(crate) fn parse_bool(
    name: &str,
    value: Option<&str>,
    diagnostics: &dyn Diagnostics,
) -> Option<bool> {
    match value {
        None | Some("") => None,
        Some("true") => Some(true),
        Some("false") => Some(false),
        Some(other) => {
            diagnostics.warning(&format!(
                "Unexpected value for boolean flag '{}': {}",
                name, other
            ));
            None
        }
    }
}

/// Formats one option into at most one flag token.
///
/// Returns an empty string when the option produces no flag. Values are
/// passed through unquoted.
pub fn format_flag(
    name: &str,
    value: Option<&str>,
    kind: FlagKind,
    diagnostics: &dyn Diagnostics,
) -> String {
    match kind {
        FlagKind::Boolean => match parse_bool(name, value, diagnostics) {
            Some(true) => format!("--{}", name),
            _ => String::new(),
        },
        FlagKind::String => match value {
            Some(value) if !value.is_empty() => format!("--{}={}", name, value),
            _ => String::new(),
        },
    }
}

/// Expands a comma-delimited list option into one `--name=element` token per element.
///
/// Elements are trimmed. Empty elements (`a,,b`) are kept and render as `--name=`.
pub fn expand_repeatable(name: &str, value: Option<&str>) -> Vec<String> {
    match value {
        None | Some("") => Vec::new(),
        Some(value) => value
            .split(',')
            .map(|element| format!("--{}={}", name, element.trim()))
            .collect(),
    }
}
