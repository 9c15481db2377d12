//! Locating the Quantower data root
//!
//! Resolution tries, in order, and stops at the first hit:
//! 1. Known locations: every product name under a fixed list of well-known folders
//! 2. Running process: the folder of a running product executable, or its parent
//! 3. Home folder search: a bounded walk below the user's home folder
//! 4. Manual selection: ask the user to pick the folder
//!
//! A candidate qualifies when it has a `Settings` subdirectory (see [`crate::layout::is_root`]).
//! Manual selection is trusted and skips that check. The first match wins even when a
//! later strategy would have found another installation.
//!
//! None of the probes fail: an unreadable folder or an inaccessible process is simply
//! not a match.

pub mod crawl;
pub mod known;
pub mod process;
pub mod prompt;

use std::fmt;
use std::path::PathBuf;

use crate::audit::Logger;

pub use process::{ProcessInspector, SystemProcesses};
pub use prompt::Prompt;

/// Product names tried by default, in order of preference
pub const DEFAULT_PRODUCTS: &[&str] = &["Quantower", "Quantower Terminal"];

/// How a root was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Passed on the command line
    Explicit,
    KnownLocation,
    RunningProcess,
    HomeSearch,
    Manual,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Strategy::Explicit => "given with --root",
            Strategy::KnownLocation => "known location",
            Strategy::RunningProcess => "running process",
            Strategy::HomeSearch => "home folder search",
            Strategy::Manual => "manual selection",
        };
        f.write_str(label)
    }
}

/// A resolved root and the strategy that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub root: PathBuf,
    pub strategy: Strategy,
}

impl Resolved {
    pub fn new(root: impl Into<PathBuf>, strategy: Strategy) -> Self {
        Self {
            root: root.into(),
            strategy,
        }
    }
}

/// Layered search for the data root
pub struct RootResolver<'a> {
    products: Vec<String>,
    known_bases: Vec<PathBuf>,
    crawl_start: Option<PathBuf>,
    max_depth: usize,
    processes: &'a dyn ProcessInspector,
    prompt: &'a dyn Prompt,
    logger: &'a dyn Logger,
}

impl<'a> RootResolver<'a> {
    /// Create a resolver over the machine's well-known folders and home directory
    pub fn new(
        products: Vec<String>,
        processes: &'a dyn ProcessInspector,
        prompt: &'a dyn Prompt,
        logger: &'a dyn Logger,
    ) -> Self {
        Self {
            products,
            known_bases: known::default_bases(),
            crawl_start: dirs::home_dir(),
            max_depth: crawl::DEFAULT_MAX_DEPTH,
            processes,
            prompt,
            logger,
        }
    }

    /// Replace the well-known base folders
    #[must_use]
    pub fn with_known_bases(mut self, bases: Vec<PathBuf>) -> Self {
        self.known_bases = known::dedup_bases(bases);
        self
    }

    /// Replace the folder the home search starts from
    #[must_use]
    pub fn with_crawl_start(mut self, start: Option<PathBuf>) -> Self {
        self.crawl_start = start;
        self
    }

    /// Limit how many levels below the start the home search looks
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Find the data root, or `None` if every strategy came up empty
    pub fn resolve(&self) -> Option<Resolved> {
        self.known_location()
            .or_else(|| self.running_process())
            .or_else(|| self.home_search())
            .or_else(|| self.manual())
            .inspect(|resolved| {
                self.trace(&format!(
                    "Resolved {} ({})",
                    resolved.root.display(),
                    resolved.strategy
                ));
            })
    }

    /// Name of a product that currently has a running process
    pub fn running_product(&self) -> Option<String> {
        process::find_running(&self.products, self.processes).map(|p| p.name)
    }

    fn known_location(&self) -> Option<Resolved> {
        self.trace(&format!(
            "Checking {} known location(s)",
            self.known_bases.len()
        ));
        known::probe(&self.products, &self.known_bases)
            .map(|root| Resolved::new(root, Strategy::KnownLocation))
    }

    fn running_process(&self) -> Option<Resolved> {
        self.trace("Checking running processes");
        process::probe(&self.products, self.processes)
            .map(|root| Resolved::new(root, Strategy::RunningProcess))
    }

    fn home_search(&self) -> Option<Resolved> {
        let start = self.crawl_start.as_ref()?;
        self.trace(&format!(
            "Searching {} up to {} level(s) deep",
            start.display(),
            self.max_depth
        ));
        crawl::crawl(start, &self.products, self.max_depth, self.logger)
            .map(|root| Resolved::new(root, Strategy::HomeSearch))
    }

    fn manual(&self) -> Option<Resolved> {
        self.trace("Asking for the folder");
        self.prompt
            .pick_root(&self.products)
            .map(|root| Resolved::new(root, Strategy::Manual))
    }

    fn trace(&self, line: &str) {
        // Tracing is best effort
        let _ = self.logger.log(line);
    }
}
