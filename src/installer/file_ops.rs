//! Basic file operations for bundle installation
//!
//! This module handles low-level file operations:
//! - Directory creation (ensure_parent_dir)
//! - Writing an entry's stream over a destination (write_stream)
//! - Copy-aside of an existing file (back_up)

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::error::{Result, fs};

/// Ensure parent directory exists for a path
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| fs::write_failed(parent, e))?;
    }
    Ok(())
}

/// Replace `target` with everything read from `content`
pub fn write_stream(content: &mut dyn Read, target: &Path) -> Result<u64> {
    let mut file = File::create(target).map_err(|e| fs::write_failed(target, e))?;
    io::copy(content, &mut file).map_err(|e| fs::write_failed(target, e))
}

/// Copy `source` to `backup`, replacing an earlier backup of the same name
pub fn back_up(source: &Path, backup: &Path) -> Result<()> {
    ensure_parent_dir(backup).map_err(|e| fs::backup_failed(source, backup, e))?;
    std::fs::copy(source, backup)
        .map(|_| ())
        .map_err(|e| fs::backup_failed(source, backup, e))
}
