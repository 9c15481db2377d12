//! On-disk layout of a Quantower data root
//!
//! A root is any directory with a `Settings` subdirectory. Everything this tool writes
//! lives under that root:
//!
//! ```text
//! <root>/Settings/...                                         installed bundle files
//! <root>/Backups/Settings/<file>.<yyyyMMddHHmmss>.bak         copies taken before overwrite
//! <root>/Backups/settings-installer-<yyyy-MM-dd_HHmmss>.txt   audit log, one per run
//! ```

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

/// Directory that marks a root and receives installed files
pub const SETTINGS_DIR: &str = "Settings";

/// Directory holding backups and audit logs
pub const BACKUPS_DIR: &str = "Backups";

const BACKUP_STAMP: &str = "%Y%m%d%H%M%S";
const LOG_STAMP: &str = "%Y-%m-%d_%H%M%S";

/// Check whether `path` qualifies as a data root
///
/// Only the existence of a `Settings` directory is checked. A regular file with that
/// name does not count.
pub fn is_root(path: &Path) -> bool {
    path.join(SETTINGS_DIR).is_dir()
}

/// `<root>/Settings`
pub fn settings_dir(root: &Path) -> PathBuf {
    root.join(SETTINGS_DIR)
}

/// `<root>/Backups/Settings`
pub fn backups_dir(root: &Path) -> PathBuf {
    root.join(BACKUPS_DIR).join(SETTINGS_DIR)
}

/// Map a slash-separated bundle path onto the host path under `<root>/Settings`
pub fn destination(root: &Path, relative_path: &str) -> PathBuf {
    relative_path
        .split('/')
        .fold(settings_dir(root), |path, segment| path.join(segment))
}

/// Backup location for `file_name` taken at `at`
///
/// Only the file name is kept, not its folder. Backups of equally named files taken
/// within the same second share one name and the later copy replaces the earlier one,
/// even when both come from one run.
pub fn backup_path(root: &Path, file_name: &str, at: NaiveDateTime) -> PathBuf {
    backups_dir(root).join(format!("{file_name}.{}.bak", at.format(BACKUP_STAMP)))
}

/// Audit log location for a run started at `at`
pub fn log_path(root: &Path, at: NaiveDateTime) -> PathBuf {
    root.join(BACKUPS_DIR)
        .join(format!("settings-installer-{}.txt", at.format(LOG_STAMP)))
}
