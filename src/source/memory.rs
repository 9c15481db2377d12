//! In-memory bundle

use std::io::{Cursor, Read};

use super::BundleSource;
use crate::error::{Result, bundle};

/// Ordered `(name, bytes)` pairs
#[derive(Debug, Clone, Default)]
pub struct MemoryBundle {
    entries: Vec<(String, Vec<u8>)>,
}

impl MemoryBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, keeping insertion order
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        self.entries.push((name.into(), content.into()));
        self
    }
}

impl BundleSource for MemoryBundle {
    fn describe(&self) -> String {
        format!("in-memory bundle ({} files)", self.entries.len())
    }

    fn names(&self) -> Result<Vec<String>> {
        Ok(self.entries.iter().map(|(name, _)| name.clone()).collect())
    }

    fn open(&self, name: &str) -> Result<Box<dyn Read + '_>> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, content)| Box::new(Cursor::new(content.as_slice())) as Box<dyn Read + '_>)
            .ok_or_else(|| bundle::resource_missing(name, "no such entry"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SettingsError;

    #[test]
    fn test_open_reads_content() {
        let source = MemoryBundle::new().with("settings/file.json", "{}");
        let mut content = String::new();
        source
            .open("settings/file.json")
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "{}");
    }

    #[test]
    fn test_open_unknown_name() {
        let source = MemoryBundle::new();
        let err = source.open("settings/missing.json").err().unwrap();
        assert!(matches!(err, SettingsError::BundleResourceMissing { .. }));
    }

    #[test]
    fn test_empty_names() {
        assert!(MemoryBundle::new().names().unwrap().is_empty());
    }
}
