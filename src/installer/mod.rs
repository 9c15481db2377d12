//! Applying a settings bundle to a data root
//!
//! Every bundle entry lands under `<root>/Settings`. A file that already exists at the
//! destination is first copied aside to `<root>/Backups/Settings` and the copy is
//! recorded in the audit log before the destination is replaced. Nothing is ever
//! deleted.
//!
//! The install is not transactional: an error stops the run where it happened, and the
//! audit log shows how far it got.

mod file_ops;

use std::fmt;
use std::path::{Path, PathBuf};

use crate::audit::Logger;
use crate::clock::Clock;
use crate::error::{Result, SettingsError};
use crate::layout;
use crate::progress::ProgressDisplay;
use crate::source::{self, BundleEntry, BundleSource};

/// What happened to one destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallAction {
    Copied,
    BackedUpThenCopied,
}

/// Audit record of one processed entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallRecord {
    pub source_id: String,
    pub destination: PathBuf,
    pub action: InstallAction,
    pub backup: Option<PathBuf>,
}

impl InstallRecord {
    /// `BACKUP  <dest> -> <backup>` line, if a backup was taken
    pub fn backup_line(&self) -> Option<String> {
        self.backup.as_ref().map(|backup| {
            format!(
                "BACKUP  {} -> {}",
                self.destination.display(),
                backup.display()
            )
        })
    }

    /// `COPY    <source> -> <dest>` line
    pub fn copy_line(&self) -> String {
        format!("COPY    {} -> {}", self.source_id, self.destination.display())
    }
}

impl fmt::Display for InstallRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(line) = self.backup_line() {
            writeln!(f, "{line}")?;
        }
        f.write_str(&self.copy_line())
    }
}

/// Outcome of an install run
#[derive(Debug, Clone, Default)]
pub struct InstallReport {
    pub records: Vec<InstallRecord>,
    /// Records describe what would have happened
    pub dry_run: bool,
}

impl InstallReport {
    pub fn copied(&self) -> usize {
        self.records.len()
    }

    pub fn backed_up(&self) -> usize {
        self.records.iter().filter(|r| r.backup.is_some()).count()
    }
}

/// File installer for one data root
pub struct Installer<'a> {
    /// Resolved data root
    root: &'a Path,

    /// Clock used to stamp backup names
    clock: &'a dyn Clock,

    /// Whether to perform a dry run (skip actual file operations)
    dry_run: bool,

    /// Whether to draw a progress bar
    show_progress: bool,
}

impl<'a> Installer<'a> {
    /// Create a new installer
    pub fn new(root: &'a Path, clock: &'a dyn Clock) -> Self {
        Self {
            root,
            clock,
            dry_run: false,
            show_progress: false,
        }
    }

    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    #[must_use]
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Install every entry of `source`, writing the audit trail to `logger`
    ///
    /// The whole bundle is listed and validated before anything is touched; an empty
    /// bundle is a packaging defect.
    pub fn install(&self, source: &dyn BundleSource, logger: &dyn Logger) -> Result<InstallReport> {
        let entries = source::entries(source)?;
        if entries.is_empty() {
            return Err(SettingsError::EmptyBundle);
        }

        if self.dry_run {
            return Ok(self.plan(&entries));
        }

        logger.log(&format!("Quantower root: {}", self.root.display()))?;

        let progress = self
            .show_progress
            .then(|| ProgressDisplay::new(entries.len() as u64));

        let mut report = InstallReport::default();
        for entry in &entries {
            match self.install_entry(source, entry, logger) {
                Ok(record) => {
                    if let Some(progress) = &progress {
                        progress.update_file(&entry.relative_path);
                    }
                    report.records.push(record);
                }
                Err(e) => {
                    if let Some(progress) = &progress {
                        progress.abandon();
                    }
                    return Err(e);
                }
            }
        }

        if let Some(progress) = &progress {
            progress.finish();
        }
        Ok(report)
    }

    fn install_entry(
        &self,
        source: &dyn BundleSource,
        entry: &BundleEntry,
        logger: &dyn Logger,
    ) -> Result<InstallRecord> {
        let destination = layout::destination(self.root, &entry.relative_path);
        let mut content = source.open(&entry.source_id)?;

        file_ops::ensure_parent_dir(&destination)?;

        let backup = if destination.is_file() {
            let backup = layout::backup_path(self.root, entry.file_name(), self.clock.now());
            file_ops::back_up(&destination, &backup)?;
            Some(backup)
        } else {
            None
        };

        let record = InstallRecord {
            source_id: entry.source_id.clone(),
            destination,
            action: if backup.is_some() {
                InstallAction::BackedUpThenCopied
            } else {
                InstallAction::Copied
            },
            backup,
        };

        if let Some(line) = record.backup_line() {
            logger.log(&line)?;
        }

        file_ops::write_stream(&mut content, &record.destination)?;
        logger.log(&record.copy_line())?;

        Ok(record)
    }

    fn plan(&self, entries: &[BundleEntry]) -> InstallReport {
        let now = self.clock.now();
        let records = entries
            .iter()
            .map(|entry| {
                let destination = layout::destination(self.root, &entry.relative_path);
                let backup = destination
                    .is_file()
                    .then(|| layout::backup_path(self.root, entry.file_name(), now));
                InstallRecord {
                    source_id: entry.source_id.clone(),
                    destination,
                    action: if backup.is_some() {
                        InstallAction::BackedUpThenCopied
                    } else {
                        InstallAction::Copied
                    },
                    backup,
                }
            })
            .collect();

        InstallReport {
            records,
            dry_run: true,
        }
    }
}
