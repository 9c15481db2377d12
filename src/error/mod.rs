//! Error types and handling for qt-settings
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`bundle`]: Bundle source and packaging errors
//! - [`fs`]: File system errors

pub mod bundle;
pub mod fs;

use miette::Diagnostic;
use thiserror::Error;

/// Exit status of every fatal error, command line misuse included
pub const FATAL_EXIT: i32 = -1;

/// Main error type for qt-settings operations
#[derive(Error, Diagnostic, Debug)]
pub enum SettingsError {
    // Resolution errors
    #[error("Could not locate the Quantower data folder")]
    #[diagnostic(
        code(qt_settings::resolve::not_resolved),
        help("Pass the folder explicitly with --root, or run without --no-prompt to pick it")
    )]
    RootNotResolved,

    #[error("Installation cancelled: {product} is still running")]
    #[diagnostic(
        code(qt_settings::resolve::close_declined),
        help("Close {product} and run the installer again, or pass --yes")
    )]
    CloseDeclined { product: String },

    // Bundle errors
    #[error("Settings bundle is empty")]
    #[diagnostic(
        code(qt_settings::bundle::empty),
        help("The installer was packaged without any settings files")
    )]
    EmptyBundle,

    #[error("Settings bundle not found: {path}")]
    #[diagnostic(
        code(qt_settings::bundle::not_found),
        help("Pass the bundle directory with --bundle or QT_SETTINGS_BUNDLE")
    )]
    BundleNotFound { path: String },

    #[error("Bundle entry '{name}' is outside the '{namespace}' namespace")]
    #[diagnostic(code(qt_settings::bundle::outside_namespace))]
    BundleEntryOutsideNamespace { name: String, namespace: String },

    #[error("Bundle entry '{name}' has an unsafe path")]
    #[diagnostic(
        code(qt_settings::bundle::unsafe_path),
        help("Entry paths must be relative and must not contain '.', '..' or empty segments")
    )]
    UnsafeBundlePath { name: String },

    #[error("Bundle resource '{name}' is listed but cannot be opened: {reason}")]
    #[diagnostic(code(qt_settings::bundle::resource_missing))]
    BundleResourceMissing { name: String, reason: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(qt_settings::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(qt_settings::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to back up {path} to {backup}: {reason}")]
    #[diagnostic(
        code(qt_settings::fs::backup_failed),
        help("The original file was left untouched")
    )]
    BackupFailed {
        path: String,
        backup: String,
        reason: String,
    },

    #[error("Failed to append to audit log {path}: {reason}")]
    #[diagnostic(code(qt_settings::fs::audit_log_failed))]
    AuditLogFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(qt_settings::fs::io_error))]
    IoError { message: String },
}

impl SettingsError {
    /// Process exit status for this error
    ///
    /// Declines are ordinary outcomes with their own small codes; everything else is fatal.
    pub fn exit_code(&self) -> i32 {
        match self {
            SettingsError::RootNotResolved => 1,
            SettingsError::CloseDeclined { .. } => 2,
            _ => FATAL_EXIT,
        }
    }

    /// Whether this error is a user decline rather than a failure
    pub fn is_decline(&self) -> bool {
        matches!(
            self,
            SettingsError::RootNotResolved | SettingsError::CloseDeclined { .. }
        )
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(err: std::io::Error) -> Self {
        SettingsError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for SettingsError {
    fn from(err: inquire::InquireError) -> Self {
        SettingsError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, SettingsError>;

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_error_contains {
        ($test_name:ident, $err:expr, $($contains:expr),+ $(,)?) => {
            #[test]
            fn $test_name() {
                let err = $err;
                let error_string = err.to_string();
                $(
                    assert!(error_string.contains($contains),
                        "Error message should contain '{}', got: {}",
                        $contains,
                        error_string
                    );
                )+
            }
        };
    }

    #[test]
    fn test_error_code() {
        let err = SettingsError::EmptyBundle;
        assert_eq!(
            err.code().map(|c| c.to_string()),
            Some("qt_settings::bundle::empty".to_string())
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SettingsError = io_err.into();
        assert!(matches!(err, SettingsError::IoError { .. }));
    }

    #[test]
    fn test_inquire_error_conversion() {
        let err: SettingsError = inquire::InquireError::OperationCanceled.into();
        assert!(matches!(err, SettingsError::IoError { .. }));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(SettingsError::RootNotResolved.exit_code(), 1);
        assert_eq!(
            SettingsError::CloseDeclined {
                product: "Quantower".to_string()
            }
            .exit_code(),
            2
        );
        assert_eq!(SettingsError::EmptyBundle.exit_code(), -1);
        assert_eq!(fs::write_failed("/qt/a.json", "disk full").exit_code(), -1);
    }

    #[test]
    fn test_declines() {
        assert!(SettingsError::RootNotResolved.is_decline());
        assert!(!SettingsError::EmptyBundle.is_decline());
    }

    test_error_contains!(
        test_root_not_resolved_error,
        SettingsError::RootNotResolved,
        "Could not locate"
    );

    test_error_contains!(
        test_close_declined_error,
        SettingsError::CloseDeclined {
            product: "Quantower".to_string()
        },
        "cancelled",
        "Quantower"
    );

    test_error_contains!(
        test_outside_namespace_error,
        SettingsError::BundleEntryOutsideNamespace {
            name: "other/file.json".to_string(),
            namespace: "settings/".to_string(),
        },
        "other/file.json",
        "settings/"
    );

    #[test]
    fn test_resource_missing() {
        let err = bundle::resource_missing("settings/a.json", "gone");
        assert!(matches!(err, SettingsError::BundleResourceMissing { .. }));
        assert!(err.to_string().contains("cannot be opened"));
    }

    #[test]
    fn test_read_failed_shows_reason() {
        let err = fs::read_failed("/bundle/Workspaces", "permission denied");
        assert!(matches!(err, SettingsError::FileReadFailed { .. }));
        assert_eq!(
            err.to_string(),
            "Failed to read file: /bundle/Workspaces: permission denied"
        );
    }

    #[test]
    fn test_write_failed() {
        let err = fs::write_failed("/path/to/file.txt", "disk full");
        assert!(matches!(err, SettingsError::FileWriteFailed { .. }));
        assert!(err.to_string().contains("disk full"));
    }
}
