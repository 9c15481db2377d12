//! File system errors

use std::path::Path;

use super::SettingsError;

/// Creates a read failed error
pub fn read_failed(path: impl AsRef<Path>, reason: impl ToString) -> SettingsError {
    SettingsError::FileReadFailed {
        path: path.as_ref().display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a write failed error
pub fn write_failed(path: impl AsRef<Path>, reason: impl ToString) -> SettingsError {
    SettingsError::FileWriteFailed {
        path: path.as_ref().display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a backup failed error
pub fn backup_failed(
    path: impl AsRef<Path>,
    backup: impl AsRef<Path>,
    reason: impl ToString,
) -> SettingsError {
    SettingsError::BackupFailed {
        path: path.as_ref().display().to_string(),
        backup: backup.as_ref().display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates an audit log failure
pub fn audit_log_failed(path: impl AsRef<Path>, reason: impl ToString) -> SettingsError {
    SettingsError::AuditLogFailed {
        path: path.as_ref().display().to_string(),
        reason: reason.to_string(),
    }
}
