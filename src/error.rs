//! Domain-specific error types for tofu-apply.
//!
//! The command construction engine itself never fails. `TofuApplyError`
//! covers the surface around it: loading an input record from disk,
//! parsing it, and validating command-line overrides. Public functions on
//! that surface return `Result<T, TofuApplyError>`, while the binary and
//! the `run_*` entry points use `anyhow::Result`.

use std::io;

/// Formats an IO error kind into a human-readable message.
///
/// Provides consistent messages for common IO error kinds
/// (e.g., "I/O error: not found") instead of the OS-level messages
/// (e.g., "No such file or directory (os error 2)"). Unrecognized kinds
/// fall back to the OS-level message.
pub(crate) fn io_error_kind_message(err: &io::Error) -> String {
    match err.kind() {
        io::ErrorKind::NotFound => "I/O error: not found".to_string(),
        io::ErrorKind::PermissionDenied => "I/O error: permission denied".to_string(),
        io::ErrorKind::IsADirectory => "I/O error: is a directory".to_string(),
        _ => format!("I/O error: {}", err),
    }
}

/// Domain-specific error type for tofu-apply.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum TofuApplyError {
    /// A validation constraint was violated (bad override, malformed boolean input).
    #[error("validation error: {0}")]
    Validation(String),

    /// An input file could not be parsed.
    #[error("configuration error: {0}")]
    Config(String),

    /// An I/O operation failed with contextual information.
    #[error("{context}: {message}")]
    Io {
        /// What was being done when the error occurred, usually a file path.
        context: String,
        /// Human-readable description derived from [`io_error_kind_message`].
        message: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl TofuApplyError {
    /// Creates an `Io` variant with the `message` field derived from `source`.
    pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            message: io_error_kind_message(&source),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display() {
        let err = TofuApplyError::Validation("unknown input key: colour".to_string());
        assert_eq!(err.to_string(), "validation error: unknown input key: colour");
    }

    #[test]
    fn test_config_display() {
        let err = TofuApplyError::Config("YAML parse error at line 3".to_string());
        assert_eq!(err.to_string(), "configuration error: YAML parse error at line 3");
    }

    #[test]
    fn test_io_display() {
        let source = io::Error::new(io::ErrorKind::NotFound, "entity not found");
        let err = TofuApplyError::io("/path/to/inputs.yml", source);
        assert_eq!(err.to_string(), "/path/to/inputs.yml: I/O error: not found");
    }

    #[test]
    fn test_io_source_preserved() {
        let source = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err = TofuApplyError::io("/etc/tofu/inputs.yml", source);
        match &err {
            TofuApplyError::Io { source, message, .. } => {
                assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
                assert_eq!(message, "I/O error: permission denied");
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_io_error_kind_message_is_a_directory() {
        let err = io::Error::new(io::ErrorKind::IsADirectory, "is a directory");
        assert_eq!(io_error_kind_message(&err), "I/O error: is a directory");
    }

    #[test]
    fn test_io_error_kind_message_other() {
        let err = io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused");
        let msg = io_error_kind_message(&err);
        assert!(msg.starts_with("I/O error: "));
    }

    #[test]
    fn test_into_anyhow_error() {
        let err = TofuApplyError::Validation("test".to_string());
        let anyhow_err: anyhow::Error = err.into();
        let downcast = anyhow_err.downcast_ref::<TofuApplyError>();
        assert!(matches!(downcast, Some(TofuApplyError::Validation(_))));
    }
}
