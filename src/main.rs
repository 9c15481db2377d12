//! qt-settings - Quantower settings installer
//!
//! Locates the data folder of an installed Quantower and installs the bundled settings,
//! workspaces and templates into its `Settings` folder, backing up anything it replaces.
//!
//! Exit status: `0` on success, `1` when no data folder was found or picked, `2` when
//! the user chose not to continue while Quantower runs, `-1` on any other failure.

use clap::Parser;
use console::Style;
use miette::Diagnostic;

mod audit;
mod cli;
mod clock;
mod commands;
mod error;
mod installer;
mod layout;
mod progress;
mod resolver;
mod session;
mod source;
#[cfg(test)]
mod test_fixtures;
mod ui;

use cli::{Cli, Commands};
use error::{FATAL_EXIT, SettingsError};

/// Render an error for the user and return the exit status
fn report(err: &SettingsError) -> i32 {
    if err.is_decline() {
        eprintln!("{}", Style::new().yellow().apply_to(err));
    } else {
        eprintln!("{} {err}", Style::new().red().bold().apply_to("Error:"));
        if let Some(code) = err.code() {
            eprintln!("  {}", Style::new().dim().apply_to(code));
        }
    }
    if let Some(help) = err.help() {
        eprintln!("  {} {help}", Style::new().bold().apply_to("help:"));
    }
    err.exit_code()
}

/// Print a command line error (or the requested help) and return the exit status
///
/// Usage errors are fatal errors; they must not share a status with the declines.
fn usage_exit(err: &clap::Error) -> i32 {
    let _ = err.print();
    if err.use_stderr() { FATAL_EXIT } else { 0 }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => std::process::exit(usage_exit(&e)),
    };

    let result = match cli.command {
        Commands::Install(args) => commands::install::run(args, cli.verbose),
        Commands::Locate(args) => commands::locate::run(args, cli.verbose),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(&args),
    };

    if let Err(e) = result {
        std::process::exit(report(&e));
    }
}
