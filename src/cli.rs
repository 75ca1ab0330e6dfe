// src/cli.rs

//! CLI argument capture using `clap`.
//!
//! There are deliberately no flags here: everything after the program name is
//! the child command and its arguments, passed through verbatim. Logging is
//! controlled via the `FANOUT_LOG` environment variable instead (see
//! [`crate::logging`]), so that a child argument like `--verbose` is never
//! swallowed by our own parser.

use clap::Parser;

/// Command-line arguments for `fanout`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "fanout",
    version,
    about = "Repeatedly run a command in parallel on every logical CPU.",
    long_about = None
)]
pub struct CliArgs {
    /// Command to execute, plus its arguments.
    ///
    /// One instance of this command is launched per logical CPU, every round.
    #[arg(
        value_name = "COMMAND",
        required = true,
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command: Vec<String>,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_command_and_args_verbatim() {
        let args = CliArgs::try_parse_from(["fanout", "/bin/echo", "hi"]).unwrap();
        assert_eq!(args.command, vec!["/bin/echo", "hi"]);
    }

    #[test]
    fn hyphen_arguments_after_the_program_are_not_parsed_as_flags() {
        let args =
            CliArgs::try_parse_from(["fanout", "/bin/echo", "-n", "--version"]).unwrap();
        assert_eq!(args.command, vec!["/bin/echo", "-n", "--version"]);
    }

    #[test]
    fn missing_command_is_a_usage_error() {
        assert!(CliArgs::try_parse_from(["fanout"]).is_err());
    }
}
