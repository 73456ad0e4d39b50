//! Depth-first walk of root paths into a shared [`SizeMap`].
//!
//! Every directory is claimed at most once per run. A directory reached a
//! second time, through an overlapping root or a repeated root, is skipped
//! together with its whole subtree, so no file is ever counted twice.
//! Symbolic links are not followed.

use super::size_map::SizeMap;
use crate::utils::error::AggregateError;
use crate::utils::paths::resolve_absolute;
use log::debug;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Walk every root in order and collect per-directory sizes
///
/// **Public** - main entry point for aggregation
///
/// # Arguments
/// * `roots` - Absolute root paths, in caller order
///
/// # Returns
/// The size map for all roots
///
/// # Errors
/// The first path resolution or filesystem error aborts the run.
pub fn aggregate(roots: &[PathBuf]) -> Result<SizeMap, AggregateError> {
    let mut map = SizeMap::new();

    for root in roots {
        traverse(root, &mut map)?;
    }

    debug!("Aggregated {} directories from {} roots", map.len(), roots.len());
    Ok(map)
}

/// Walk a single root into an existing map
///
/// **Public** - lets callers share one map across several roots
///
/// Directories already present in `map` are neither re-initialised nor
/// descended into. On error, entries added before the failure stay in `map`.
pub fn traverse(root: &Path, map: &mut SizeMap) -> Result<(), AggregateError> {
    debug!("Traversing {}", root.display());

    let mut walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter();

    while let Some(entry) = walker.next() {
        let entry = entry?;
        let path = resolve_absolute(entry.path())?;

        // A root given as a symlink is followed, so it walks like a directory
        let is_dir = entry.file_type().is_dir() || (entry.depth() == 0 && entry.path().is_dir());

        if is_dir {
            if !map.claim_dir(&path) {
                debug!("{} : already traversed", path.display());
                walker.skip_current_dir();
            }
            continue;
        }

        // lstat size: a symlink counts as itself, never as its target
        let size = entry.metadata()?.len();
        debug!("{} : {} bytes", path.display(), size);

        let dir = path.parent().unwrap_or(path.as_path());
        map.add_file(dir, size);
    }

    Ok(())
}
