//! Line-oriented loggers
//!
//! Both the resolver and the installer write through [`Logger`]. The audit trail of an
//! install goes to a [`FileLog`] under the root's `Backups` directory; resolver tracing
//! goes to a [`ConsoleLog`] that only speaks in verbose mode.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use console::Style;

use crate::error::{Result, fs};

/// A sink that accepts one line at a time
pub trait Logger {
    fn log(&self, line: &str) -> Result<()>;
}

/// Append-only plain-text log file
///
/// The file is opened, appended and closed on every call, so an interrupted run still
/// leaves every line written so far.
#[derive(Debug, Clone)]
pub struct FileLog {
    path: PathBuf,
}

impl FileLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Logger for FileLog {
    fn log(&self, line: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| fs::audit_log_failed(&self.path, e))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| fs::audit_log_failed(&self.path, e))?;
        writeln!(file, "{line}").map_err(|e| fs::audit_log_failed(&self.path, e))
    }
}

/// Dimmed trace lines on stderr, printed only when verbose
#[derive(Debug, Clone, Copy)]
pub struct ConsoleLog {
    verbose: bool,
}

impl ConsoleLog {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Logger for ConsoleLog {
    fn log(&self, line: &str) -> Result<()> {
        if self.verbose {
            eprintln!("{}", Style::new().dim().apply_to(line));
        }
        Ok(())
    }
}

/// Collects lines in memory
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryLog {
    lines: std::cell::RefCell<Vec<String>>,
}

#[cfg(test)]
impl MemoryLog {
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn count_prefix(&self, prefix: &str) -> usize {
        self.lines
            .borrow()
            .iter()
            .filter(|l| l.starts_with(prefix))
            .count()
    }
}

#[cfg(test)]
impl Logger for MemoryLog {
    fn log(&self, line: &str) -> Result<()> {
        self.lines.borrow_mut().push(line.to_string());
        Ok(())
    }
}
