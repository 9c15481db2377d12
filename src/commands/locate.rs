//! Locate command implementation

use crate::cli::LocateArgs;
use crate::commands::helpers::{resolve_root, with_resolver};
use crate::error::Result;
use crate::ui;

/// Resolve the data root and print it
pub fn run(args: LocateArgs, verbose: bool) -> Result<()> {
    let resolved = with_resolver(&args.resolve, verbose, |resolver, _prompt| {
        resolve_root(resolver)
    })?;
    ui::print_located(&resolved, verbose);
    Ok(())
}
