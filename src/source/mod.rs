//! Bundle sources
//!
//! A bundle is a read-only set of named byte streams. Every name is a slash-separated
//! logical path that starts with [`NAMESPACE`]; the prefix is stripped to obtain the
//! path relative to the root's `Settings` directory.
//!
//! How the bundle is packaged is up to the implementation:
//! - [`DirBundle`]: a directory shipped next to the executable
//! - `MemoryBundle`: entries held in memory, for tests

mod dir;
#[cfg(test)]
mod memory;

pub use dir::DirBundle;
#[cfg(test)]
pub use memory::MemoryBundle;

use std::io::Read;

use crate::error::{Result, bundle};

/// Prefix carried by every bundle name
pub const NAMESPACE: &str = "settings/";

/// An enumerable, read-only key to bytes store
pub trait BundleSource {
    /// Human readable description, used in summaries
    fn describe(&self) -> String;

    /// All names, in the source's natural order
    fn names(&self) -> Result<Vec<String>>;

    /// Open the content stream of a listed name
    ///
    /// A name returned by [`BundleSource::names`] that cannot be opened is an integrity
    /// error, never an empty stream.
    fn open(&self, name: &str) -> Result<Box<dyn Read + '_>>;
}

/// One file of the bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleEntry {
    /// Name as listed by the source
    pub source_id: String,
    /// Slash-separated path below `Settings`
    pub relative_path: String,
}

impl BundleEntry {
    /// Validate a listed name and strip the namespace
    pub fn from_name(name: &str) -> Result<Self> {
        let relative = name
            .strip_prefix(NAMESPACE)
            .ok_or_else(|| bundle::outside_namespace(name, NAMESPACE))?;

        if !is_safe_relative(relative) {
            return Err(bundle::unsafe_path(name));
        }

        Ok(Self {
            source_id: name.to_string(),
            relative_path: relative.to_string(),
        })
    }

    /// Final path segment
    pub fn file_name(&self) -> &str {
        self.relative_path
            .rsplit('/')
            .next()
            .unwrap_or(&self.relative_path)
    }
}

/// List and validate every entry of a source
///
/// Performs no filesystem mutation, so a broken bundle is rejected before anything is
/// written.
pub fn entries(source: &dyn BundleSource) -> Result<Vec<BundleEntry>> {
    source
        .names()?
        .iter()
        .map(|name| BundleEntry::from_name(name))
        .collect()
}

fn is_safe_relative(path: &str) -> bool {
    !path.is_empty()
        && path.split('/').all(|segment| {
            !segment.is_empty()
                && segment != "."
                && segment != ".."
                && !segment.contains('\\')
                && !segment.contains(':')
        })
}
