//! Wiring shared by the commands that need a data root

use std::path::{Path, PathBuf};

use crate::audit::ConsoleLog;
use crate::cli::ResolveArgs;
use crate::error::{Result, SettingsError};
use crate::resolver::prompt::{NoPrompt, TerminalPrompt};
use crate::resolver::{Prompt, Resolved, RootResolver, SystemProcesses};

/// Build a resolver over the local machine and hand it to `f`
pub fn with_resolver<T>(
    args: &ResolveArgs,
    verbose: bool,
    f: impl FnOnce(&RootResolver<'_>, &dyn Prompt) -> Result<T>,
) -> Result<T> {
    let processes = SystemProcesses;
    let console = ConsoleLog::new(verbose);
    let prompt: &dyn Prompt = if args.no_prompt {
        &NoPrompt
    } else {
        &TerminalPrompt
    };

    let resolver = RootResolver::new(args.products(), &processes, prompt, &console)
        .with_max_depth(args.max_depth);
    f(&resolver, prompt)
}

/// Run the resolver; an empty result is a resolution failure
pub fn resolve_root(resolver: &RootResolver<'_>) -> Result<Resolved> {
    let mut resolved = resolver.resolve().ok_or(SettingsError::RootNotResolved)?;
    resolved.root = absolute(&resolved.root);
    Ok(resolved)
}

/// Stop unless no product is running or the user agrees to go on
pub fn ensure_not_running(resolver: &RootResolver<'_>, prompt: &dyn Prompt) -> Result<()> {
    match resolver.running_product() {
        Some(product) if !prompt.confirm_continue_while_running(&product) => {
            Err(SettingsError::CloseDeclined { product })
        }
        _ => Ok(()),
    }
}

/// Canonical form of an existing path, without Windows verbatim prefixes
pub fn absolute(path: &Path) -> PathBuf {
    dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
