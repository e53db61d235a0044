//! This file defines the command-line interface (CLI) for the numstat application,
//! including all available commands and their arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "numstat",
    author = "Obscura Team (Relay)",
    version = env!("CARGO_PKG_VERSION"),
    about = "Descriptive statistics for numbers pasted as free-form text",
    long_about = "numstat reads free-form text such as \"1, 2; 3 4\", keeps every token that is a finite number and reports the mean, population standard deviation, count, min, max and range. Tokens that are not numbers are counted and discarded. Use `calc` for one-shot use in scripts and pipes, or `tui` for an interactive editor.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress logging and non-error status messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// Explicitly disable debug logging, even if RUST_LOG is set to DEBUG
    #[arg(long = "disable-debug", global = true, help = "Disable debug logging, overriding RUST_LOG.")]
    pub disable_debug: bool,

    /// Specify the path to a custom YAML theme file.
    #[arg(long = "theme", value_name = "FILE", global = true, help = "Specify the path to a custom YAML theme file.")]
    pub theme: Option<PathBuf>,

    /// Path to a YAML settings file.
    #[arg(long = "config", value_name = "FILE", global = true, env = "NUMSTAT_CONFIG", help = "Path to a YAML settings file (defaults to <config dir>/numstat/config.yaml).")]
    pub config: Option<PathBuf>,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `numstat` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Computes statistics for text given as an argument, a file or stdin.
    #[command(about = "Compute statistics for text given as an argument, a file or stdin.")]
    Calc(CalcCommand),

    /// Opens the interactive editor.
    #[command(about = "Open the interactive editor (Ctrl+Enter or F5 to calculate).")]
    Tui(TuiCommand),
}

/// Arguments for the `calc` command.
#[derive(Parser, Debug)]
pub struct CalcCommand {
    /// Numbers to analyse (reads the input file or stdin if omitted).
    #[arg(value_name = "TEXT", conflicts_with = "input_file", help = "Numbers separated by spaces, commas or semicolons.")]
    pub text: Option<String>,

    /// Path to an input file.
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Print the result as JSON.
    #[arg(long = "json", help = "Print the result as a JSON object instead of a table.")]
    pub json: bool,

    #[command(flatten)]
    pub parsing: ParsingArgs,
}

/// Arguments for the `tui` command.
#[derive(Parser, Debug)]
pub struct TuiCommand {
    /// Pause between the trigger and the calculation.
    #[arg(long = "delay-ms", value_name = "MS", help = "Pause before each calculation, in milliseconds.")]
    pub delay_ms: Option<u64>,

    #[command(flatten)]
    pub parsing: ParsingArgs,
}

/// Parsing and formatting flags shared by both commands.
#[derive(clap::Args, Debug, Clone, Copy)]
pub struct ParsingArgs {
    /// Reject tokens with trailing non-numeric characters.
    #[arg(long = "strict", help = "Only accept tokens that are entirely numeric (\"12abc\" is rejected).")]
    pub strict: bool,

    /// Digits after the decimal point.
    #[arg(long = "decimals", value_name = "N", value_parser = clap::value_parser!(u8).range(0..=20), help = "Digits after the decimal point (0-20, default 6).")]
    pub decimals: Option<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_calc_flags() {
        let cli = Cli::try_parse_from(["numstat", "-q", "calc", "1 2 3", "--json", "--strict", "--decimals", "2"]).unwrap();
        assert!(cli.quiet);
        let Commands::Calc(cmd) = cli.command else { panic!("expected calc") };
        assert_eq!(cmd.text.as_deref(), Some("1 2 3"));
        assert!(cmd.json);
        assert!(cmd.parsing.strict);
        assert_eq!(cmd.parsing.decimals, Some(2));
    }

    #[test]
    fn rejects_out_of_range_decimals() {
        assert!(Cli::try_parse_from(["numstat", "calc", "1", "--decimals", "21"]).is_err());
    }

    #[test]
    fn text_conflicts_with_input_file() {
        assert!(Cli::try_parse_from(["numstat", "calc", "1", "-i", "data.txt"]).is_err());
    }
}
