use clap::Parser;
use std::path::PathBuf;

use super::ResolveArgs;

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Find Quantower and install:\n    qt-settings install\n\n\
                   Install into a known folder:\n    qt-settings install --root D:\\Quantower\n\n\
                   Use another bundle directory:\n    qt-settings install --bundle ./bundle\n\n\
                   Preview changes:\n    qt-settings install --dry-run")]
pub struct InstallArgs {
    /// Data folder to install into; skips the search
    #[arg(long, value_name = "DIR", env = "QT_SETTINGS_ROOT")]
    pub root: Option<PathBuf>,

    /// Settings bundle directory (defaults to `bundle` next to the executable)
    #[arg(long, value_name = "DIR", env = "QT_SETTINGS_BUNDLE")]
    pub bundle: Option<PathBuf>,

    /// Continue without asking even if Quantower is running
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Show what would be installed and backed up without changing anything
    #[arg(long)]
    pub dry_run: bool,

    #[command(flatten)]
    pub resolve: ResolveArgs,
}
