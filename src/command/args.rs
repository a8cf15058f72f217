//! Token accumulator used by the command assembler.

/// Builder for the ordered token list of a command.
///
/// Empty tokens are dropped on the way in, so suppressed flags never
/// reach the joined command string.
#[derive(Debug, Default)]
pub struct CommandArgsBuilder {
    args: Vec<String>,
}

impl CommandArgsBuilder {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self { args: Vec::new() }
    }

    /// Append a raw argument (program name, subcommand, positional).
    pub fn push_arg<S: Into<String>>(&mut self, arg: S) {
        let arg = arg.into();
        if !arg.is_empty() {
            self.args.push(arg);
        }
    }

    /// Append a single-dash global option rendered as `-name=value`, if the value is not empty.
    pub fn push_global(&mut self, name: &str, value: &str) {
        if value.is_empty() {
            return;
        }
        self.args.push(format!("-{}={}", name, value));
    }

    /// Append every non-empty token from `tokens`, keeping their order.
    pub fn extend<I>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = String>,
    {
        for token in tokens {
            self.push_arg(token);
        }
    }

    /// Return the collected arguments.
    pub fn into_args(self) -> Vec<String> {
        self.args
    }
}
