// numstat/src/main.rs
//! numstat entry point.
//!
//! Resolves logging, theme and settings from the global flags, then hands
//! off to the selected subcommand.

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use numstat::cli::{Cli, Commands};
use numstat::commands::calculate::{exit_code, run_calc_opts, warn_msg, CalcOptions};
use numstat::logger;
use numstat::tui::run_tui;
use numstat::ui::theme::build_theme_map;
use numstat::utils::input::InputSource;
use numstat::utils::settings::{load_settings, Overrides};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let level = logger::level_from_flags(cli.quiet, cli.debug, cli.disable_debug);
    match (&cli.command, logger::default_log_path()) {
        // The TUI draws on the terminal, so its records go to a file.
        (Commands::Tui(_), Some(path)) => {
            if logger::init_file_logger(level, &path).is_err() {
                logger::init_logger(Some(log::LevelFilter::Off));
            }
        }
        (Commands::Tui(_), None) => logger::init_logger(Some(log::LevelFilter::Off)),
        (Commands::Calc(_), _) => logger::init_logger(level),
    }
    info!("numstat started. Version: {}", env!("CARGO_PKG_VERSION"));

    let theme_map = build_theme_map(cli.theme.as_ref()).context("Theme error")?;
    let settings = load_settings(cli.config.as_deref()).context("Settings error")?;

    match cli.command {
        Commands::Calc(cmd) => {
            let config = Overrides {
                strict: cmd.parsing.strict,
                decimals: cmd.parsing.decimals.map(usize::from),
                delay_ms: None,
            }
            .apply(settings)?;
            debug!("Effective settings: {:?}", config);

            let source = InputSource::select(cmd.text.as_deref(), cmd.input_file.as_deref());
            if source.is_interactive_stdin() {
                warn_msg(
                    "Reading numbers from the terminal. Press Ctrl+D when done.",
                    &theme_map,
                );
            }
            let input = source.read()?;

            let opts = CalcOptions {
                input,
                json: cmd.json,
                quiet: cli.quiet,
            };
            let alert = run_calc_opts(opts, &config, &theme_map)?;
            let code = exit_code(&alert);
            if code != 0 {
                std::process::exit(code);
            }
        }
        Commands::Tui(cmd) => {
            let config = Overrides {
                strict: cmd.parsing.strict,
                decimals: cmd.parsing.decimals.map(usize::from),
                delay_ms: cmd.delay_ms,
            }
            .apply(settings)?;
            debug!("Effective settings: {:?}", config);

            run_tui(config, theme_map).await.context("TUI failure")?;
        }
    }

    Ok(())
}
