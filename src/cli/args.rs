//! CLI argument definitions using clap
//!
//! The host invokes `pm-ext-test-rust <command> [args...]`. There are no
//! flags: clap's own help and version handling is switched off so that every
//! argument list, including `--help`, ends up in [`CommandKind::from_arg`].

use std::ffi::OsString;

use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(name = "pm-ext-test-rust")]
#[command(author, about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Command to run: deploy, check or config
    #[arg(allow_hyphen_values = true)]
    pub command: Option<String>,

    /// Ignored
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub rest: Vec<String>,
}

impl Cli {
    /// Parse arguments, treating anything clap rejects as "no command".
    ///
    /// A leading `--` is a command word like any other, not an escape.
    pub fn parse_lenient<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        if args.get(1).is_some_and(|first| first == "--") {
            return Self::default();
        }
        Self::try_parse_from(args).unwrap_or_else(|e| {
            tracing::debug!("argument parsing failed, showing help: {:?}", e.kind());
            Self::default()
        })
    }

    pub fn command_kind(&self) -> CommandKind {
        CommandKind::from_arg(self.command.as_deref())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Deploy,
    Check,
    Config,
    Help,
}

impl CommandKind {
    /// Exact, case-sensitive match on the first argument; everything else is help.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            Some("deploy") => Self::Deploy,
            Some("check") => Self::Check,
            Some("config") => Self::Config,
            _ => Self::Help,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&["pm-ext-test-rust"], CommandKind::Help)]
    #[case(&["pm-ext-test-rust", "deploy"], CommandKind::Deploy)]
    #[case(&["pm-ext-test-rust", "check"], CommandKind::Check)]
    #[case(&["pm-ext-test-rust", "config"], CommandKind::Config)]
    #[case(&["pm-ext-test-rust", ""], CommandKind::Help)]
    #[case(&["pm-ext-test-rust", "--help"], CommandKind::Help)]
    #[case(&["pm-ext-test-rust", "-h"], CommandKind::Help)]
    #[case(&["pm-ext-test-rust", "--version"], CommandKind::Help)]
    #[case(&["pm-ext-test-rust", "Deploy"], CommandKind::Help)]
    #[case(&["pm-ext-test-rust", "dep"], CommandKind::Help)]
    #[case(&["pm-ext-test-rust", "status"], CommandKind::Help)]
    #[case(&["pm-ext-test-rust", "check", "--verbose", "extra"], CommandKind::Check)]
    #[case(&["pm-ext-test-rust", "--", "deploy"], CommandKind::Help)]
    fn given_arguments_when_parsing_then_dispatches(
        #[case] args: &[&str],
        #[case] expected: CommandKind,
    ) {
        assert_eq!(Cli::parse_lenient(args).command_kind(), expected);
    }

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
