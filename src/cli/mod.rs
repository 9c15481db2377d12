//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - install: Install command arguments
//! - locate: Locate command arguments and the resolution options both share
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub mod completions;
pub mod install;
pub mod locate;

pub use completions::CompletionsArgs;
pub use install::InstallArgs;
pub use locate::{LocateArgs, ResolveArgs};

/// qt-settings - Quantower settings installer
///
/// Finds the Quantower data folder and installs the bundled settings into it.
#[derive(Parser, Debug)]
#[command(
    name = "qt-settings",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Install bundled settings into an existing Quantower data folder",
    long_about = "qt-settings locates the Quantower data folder (the folder holding Settings) \
                  and installs the bundled settings, workspaces and templates into it. \
                  Files that would be overwritten are backed up to Backups/Settings first.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  qt-settings install                      \x1b[90m# Find Quantower and install\x1b[0m\n   \
                  qt-settings install --root D:\\Quantower  \x1b[90m# Install into a known folder\x1b[0m\n   \
                  qt-settings install --dry-run            \x1b[90m# Show what would change\x1b[0m\n   \
                  qt-settings locate                       \x1b[90m# Only print the data folder\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install the bundled settings
    Install(InstallArgs),

    /// Print the Quantower data folder
    Locate(LocateArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
