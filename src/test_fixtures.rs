//! Test fixtures shared by unit tests.
//!
//! ```ignore
//! use crate::test_fixtures::{create_root, create_temp_dir};
//!
//! #[test]
//! fn my_test() {
//!     let temp = create_temp_dir();
//!     create_root(&temp.path().join("Quantower"));
//! }
//! ```

use std::env;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Absolute base for temporary directories
///
/// Never relative, so temp dirs are never created under the current working directory
/// (e.g. when TMPDIR=tmp).
fn temp_dir_base() -> PathBuf {
    let t = env::temp_dir();
    if t.is_absolute() {
        t
    } else if cfg!(windows) {
        env::var("TEMP")
            .or_else(|_| env::var("TMP"))
            .map_or_else(|_| PathBuf::from("C:\\Windows\\Temp"), PathBuf::from)
    } else {
        PathBuf::from("/tmp")
    }
}

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new_in(temp_dir_base()).expect("Failed to create temp directory")
}

/// Make `path` a valid data root by creating `path/Settings`.
///
/// # Panics
///
/// Panics if the directories cannot be created.
pub fn create_root(path: &Path) {
    std::fs::create_dir_all(path.join(crate::layout::SETTINGS_DIR))
        .expect("Failed to create Settings directory");
}
