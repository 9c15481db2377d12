//! Install command implementation
//!
//! The installation process:
//! 1. Open and validate the settings bundle
//! 2. Resolve the data root (or take --root as given)
//! 3. Make sure Quantower is not running, unless told otherwise
//! 4. Back up and copy every bundle file under `<root>/Settings`
//! 5. Print a summary with the audit log location

use crate::cli::InstallArgs;
use crate::clock::SystemClock;
use crate::commands::helpers::{absolute, ensure_not_running, resolve_root, with_resolver};
use crate::error::{Result, bundle};
use crate::installer::Installer;
use crate::resolver::{Resolved, Strategy};
use crate::session::Session;
use crate::source::DirBundle;
use crate::ui;

/// Run install command
pub fn run(args: InstallArgs, verbose: bool) -> Result<()> {
    let bundle_dir = args
        .bundle
        .clone()
        .or_else(DirBundle::default_location)
        .ok_or_else(|| bundle::not_found("bundle"))?;
    let source = DirBundle::open(bundle_dir)?;

    let resolved = with_resolver(&args.resolve, verbose, |resolver, prompt| {
        let resolved = match &args.root {
            Some(root) => Resolved::new(absolute(root), Strategy::Explicit),
            None => resolve_root(resolver)?,
        };

        if !args.dry_run && !args.yes {
            ensure_not_running(resolver, prompt)?;
        }

        Ok(resolved)
    })?;

    let clock = SystemClock;
    let session = Session::start(&resolved.root, &clock);

    let report = Installer::new(session.root(), &clock)
        .with_dry_run(args.dry_run)
        .with_progress(!args.dry_run && console::user_attended_stderr())
        .install(&source, session.log())?;

    if report.dry_run {
        ui::print_plan(&resolved, &report);
    } else {
        ui::print_summary(&resolved, &source, &report, session.log().path());
    }

    Ok(())
}
