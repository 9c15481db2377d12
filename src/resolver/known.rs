//! Probe of well-known install folders

use std::path::PathBuf;

use crate::layout::is_root;

/// Well-known base folders of this machine, in probe order
///
/// Documents, local app data, Program Files, Program Files (x86), the user's desktop,
/// the shared desktop and the system drive root. Folders that cannot be determined on
/// this platform are left out.
pub fn default_bases() -> Vec<PathBuf> {
    dedup_bases(
        [
            dirs::document_dir(),
            dirs::data_local_dir(),
            env_dir("ProgramFiles"),
            env_dir("ProgramFiles(x86)"),
            dirs::desktop_dir(),
            env_dir("PUBLIC").map(|public| public.join("Desktop")),
            Some(drive_root()),
        ]
        .into_iter()
        .flatten(),
    )
}

/// Drop empty and repeated folders, keeping the first occurrence
pub fn dedup_bases(bases: impl IntoIterator<Item = PathBuf>) -> Vec<PathBuf> {
    let mut unique: Vec<PathBuf> = Vec::new();
    for base in bases {
        if base.as_os_str().is_empty() || unique.contains(&base) {
            continue;
        }
        unique.push(base);
    }
    unique
}

/// First `base/product` that qualifies as a root
///
/// Product-major: every base is tried for the first product before moving to the next.
pub fn probe(products: &[String], bases: &[PathBuf]) -> Option<PathBuf> {
    products
        .iter()
        .flat_map(|product| bases.iter().map(move |base| base.join(product)))
        .find(|candidate| is_root(candidate))
}

fn env_dir(var: &str) -> Option<PathBuf> {
    std::env::var_os(var)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

#[cfg(windows)]
fn drive_root() -> PathBuf {
    let drive = std::env::var("SystemDrive").unwrap_or_else(|_| "C:".to_string());
    PathBuf::from(format!("{drive}\\"))
}

#[cfg(not(windows))]
fn drive_root() -> PathBuf {
    PathBuf::from("/")
}
