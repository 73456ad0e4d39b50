//! Absolute path resolution for root paths and walked entries.
//!
//! Paths are normalized lexically (like a shell would print them), without
//! touching the filesystem: `.` segments are dropped and `..` collapses the
//! preceding segment. Symbolic links are never resolved here.

use crate::utils::error::AggregateError;
use std::path::{Component, Path, PathBuf};

/// Make `path` absolute against the current directory and normalize it
///
/// **Public** - used for roots and every entry seen during traversal
pub fn resolve_absolute(path: &Path) -> Result<PathBuf, AggregateError> {
    let absolute = std::path::absolute(path).map_err(|source| AggregateError::PathResolution {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(normalize_lexically(&absolute))
}

/// Resolve every caller-supplied root, keeping the original order
///
/// Fails on the first root that cannot be resolved.
pub fn resolve_roots<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<PathBuf>, AggregateError> {
    paths.iter().map(|p| resolve_absolute(p.as_ref())).collect()
}

/// Collapse `.` and `..` segments without consulting the filesystem
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // ".." at the root stays at the root
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }

    if out.is_empty() {
        return PathBuf::from(".");
    }

    out.iter().map(|c| c.as_os_str()).collect()
}
