//! Bundle-related errors

use super::SettingsError;

/// Creates a bundle not found error
pub fn not_found(path: impl Into<String>) -> SettingsError {
    SettingsError::BundleNotFound { path: path.into() }
}

/// Creates an error for a name that lacks the bundle namespace prefix
pub fn outside_namespace(name: impl Into<String>, namespace: impl Into<String>) -> SettingsError {
    SettingsError::BundleEntryOutsideNamespace {
        name: name.into(),
        namespace: namespace.into(),
    }
}

/// Creates an unsafe entry path error
pub fn unsafe_path(name: impl Into<String>) -> SettingsError {
    SettingsError::UnsafeBundlePath { name: name.into() }
}

/// Creates an error for a listed resource that cannot be opened
pub fn resource_missing(name: impl Into<String>, reason: impl ToString) -> SettingsError {
    SettingsError::BundleResourceMissing {
        name: name.into(),
        reason: reason.to_string(),
    }
}
