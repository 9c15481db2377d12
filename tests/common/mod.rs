//! Common test utilities for qt-settings integration tests

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch machine for integration tests
///
/// Holds a fake home folder, a settings bundle and room for Quantower data folders.
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create a new test workspace with an empty home folder
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        std::fs::create_dir_all(path.join("home")).expect("Failed to create home directory");
        Self { temp, path }
    }

    /// Fake home folder handed to the binary
    pub fn home(&self) -> PathBuf {
        self.path.join("home")
    }

    /// Bundle folder handed to the binary with --bundle
    pub fn bundle(&self) -> PathBuf {
        self.path.join("bundle")
    }

    /// Add a file to the bundle; `rel` is where it lands below `<root>/Settings`
    pub fn bundle_file(&self, rel: &str, content: &str) {
        self.write_file(&format!("bundle/{rel}"), content);
    }

    /// Create a Quantower data folder (a folder holding `Settings`)
    pub fn create_root(&self, rel: &str) -> PathBuf {
        let root = self.path.join(rel);
        std::fs::create_dir_all(root.join("Settings")).expect("Failed to create root");
        root
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// File names inside a workspace folder, sorted
    pub fn list_dir(&self, path: &str) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.path.join(path))
            .map(|entries| {
                entries
                    .filter_map(Result::ok)
                    .map(|e| e.file_name().to_string_lossy().into_owned())
                    .collect()
            })
            .unwrap_or_default();
        names.sort();
        names
    }

    /// Audit logs written under `<root>/Backups`
    pub fn audit_logs(&self, root: &str) -> Vec<String> {
        self.list_dir(&format!("{root}/Backups"))
            .into_iter()
            .filter(|name| name.starts_with("settings-installer-") && name.ends_with(".txt"))
            .collect()
    }

    /// The binary, isolated from the real machine's folders
    pub fn cmd(&self) -> Command {
        qt_settings_cmd_for_home(&self.home())
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn qt_settings_cmd() -> Command {
    Command::cargo_bin("qt-settings").unwrap()
}

/// The binary with home and well-known folders pointed into `home`
#[allow(dead_code)]
pub fn qt_settings_cmd_for_home(home: &Path) -> Command {
    let mut cmd = qt_settings_cmd();
    cmd.env("HOME", home)
        .env("USERPROFILE", home)
        .env("XDG_DATA_HOME", home.join(".local/share"))
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("ProgramFiles")
        .env_remove("ProgramFiles(x86)")
        .env_remove("PUBLIC")
        .env_remove("QT_SETTINGS_ROOT")
        .env_remove("QT_SETTINGS_BUNDLE")
        .current_dir(home);
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_creation() {
        let workspace = TestWorkspace::new();
        assert!(workspace.home().is_dir());
    }

    #[test]
    fn test_workspace_bundle_files() {
        let workspace = TestWorkspace::new();
        workspace.bundle_file("Workspaces/main.xml", "<workspace/>");
        assert_eq!(
            workspace.read_file("bundle/Workspaces/main.xml"),
            "<workspace/>"
        );
    }

    #[test]
    fn test_workspace_create_root() {
        let workspace = TestWorkspace::new();
        let root = workspace.create_root("Qt");
        assert!(root.join("Settings").is_dir());
        assert!(workspace.list_dir("Qt/Settings").is_empty());
    }
}
