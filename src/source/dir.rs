//! Bundle backed by a directory on disk

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::{BundleSource, NAMESPACE};
use crate::error::{Result, bundle, fs};

/// Every regular file below `root`, named `settings/<relative path>`
#[derive(Debug, Clone)]
pub struct DirBundle {
    root: PathBuf,
}

impl DirBundle {
    /// Open a bundle directory
    ///
    /// Fails if `root` is not an existing directory.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(bundle::not_found(root.display().to_string()));
        }
        Ok(Self { root })
    }

    /// Default bundle location: `bundle` next to the running executable
    pub fn default_location() -> Option<PathBuf> {
        let exe = std::env::current_exe().ok()?;
        Some(exe.parent()?.join("bundle"))
    }

    fn name_for(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(&self.root).ok()?;
        let segments: Vec<String> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        Some(format!("{NAMESPACE}{}", segments.join("/")))
    }

    fn path_for(&self, name: &str) -> Option<PathBuf> {
        let relative = name.strip_prefix(NAMESPACE)?;
        Some(
            relative
                .split('/')
                .fold(self.root.clone(), |path, segment| path.join(segment)),
        )
    }
}

impl BundleSource for DirBundle {
    fn describe(&self) -> String {
        self.root.display().to_string()
    }

    fn names(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in WalkDir::new(&self.root)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(&self.root).to_path_buf();
                fs::read_failed(path, e)
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            if let Some(name) = self.name_for(entry.path()) {
                names.push(name);
            }
        }
        Ok(names)
    }

    fn open(&self, name: &str) -> Result<Box<dyn Read + '_>> {
        let path = self
            .path_for(name)
            .ok_or_else(|| bundle::outside_namespace(name, NAMESPACE))?;
        let file = File::open(&path).map_err(|e| bundle::resource_missing(name, e))?;
        Ok(Box::new(BufReader::new(file)))
    }
}
