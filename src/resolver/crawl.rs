//! Bounded search below the user's home folder

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::audit::Logger;
use crate::layout::is_root;

/// How many levels below the start a candidate may sit
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// Search `start` for a folder named after a product that qualifies as a root
///
/// All subdirectories of a folder are checked before descending into any of them, so a
/// shallow match beats a deeper one on the same branch. Candidates are never more than
/// `depth` levels below `start`. Symbolic links are not followed, and a folder that cannot
/// be listed yields nothing without stopping the search.
pub fn crawl(
    start: &Path,
    products: &[String],
    depth: usize,
    logger: &dyn Logger,
) -> Option<PathBuf> {
    if depth == 0 {
        return None;
    }

    let children = match subdirectories(start) {
        Ok(children) => children,
        Err(e) => {
            let _ = logger.log(&format!("Skipping {}: {e}", start.display()));
            return None;
        }
    };

    if let Some(hit) = children
        .iter()
        .find(|child| matches_product(child, products) && is_root(child))
    {
        return Some(hit.clone());
    }

    children
        .iter()
        .find_map(|child| crawl(child, products, depth - 1, logger))
}

/// Real (non-symlink) subdirectories, sorted by path
fn subdirectories(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut children: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_ok_and(|t| t.is_dir()))
        .map(|entry| entry.path())
        .collect();
    children.sort();
    Ok(children)
}

fn matches_product(dir: &Path, products: &[String]) -> bool {
    let Some(name) = dir.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    let name = name.to_lowercase();
    products.iter().any(|product| product.to_lowercase() == name)
}
