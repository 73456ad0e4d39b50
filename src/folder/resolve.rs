//! Resolution of directory paths against the root set.

use log::debug;
use std::path::{Component, Path, PathBuf};

/// Outcome of resolving a directory against the root set
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// The directory is the root itself
    Root(&'a Path),

    /// The directory relative to the chosen root (may start with `..`)
    Nested { root: &'a Path, relative: PathBuf },

    /// No root produced a relative path; the path is used as-is
    Unresolved,
}

/// Compute `target` relative to `base` lexically
///
/// Both paths must be of the same kind (absolute or relative) and share the
/// same prefix on platforms that have one. The result may climb above `base`
/// with `..` segments; `.` is returned when the two paths are equal.
pub fn relative_path(base: &Path, target: &Path) -> Option<PathBuf> {
    if base.is_absolute() != target.is_absolute() {
        return None;
    }

    let base: Vec<Component<'_>> = base.components().filter(|c| *c != Component::CurDir).collect();
    let target: Vec<Component<'_>> =
        target.components().filter(|c| *c != Component::CurDir).collect();

    // Different drives or UNC shares have no relative path between them
    if let (Some(Component::Prefix(a)), Some(Component::Prefix(b))) = (base.first(), target.first()) {
        if a != b {
            return None;
        }
    }

    let common = base.iter().zip(&target).take_while(|(a, b)| a == b).count();

    // Climbing out of an unknown parent cannot be expressed
    if base[common..].iter().any(|c| *c == Component::ParentDir) {
        return None;
    }

    let mut relative = PathBuf::new();
    for _ in common..base.len() {
        relative.push("..");
    }
    for component in &target[common..] {
        relative.push(component.as_os_str());
    }

    if relative.as_os_str().is_empty() {
        relative.push(".");
    }

    Some(relative)
}

/// Pick the root a directory is displayed under
///
/// **Public** - used by the folder for every map entry
///
/// The first root, in order, that contains `path` wins. When no root contains
/// it, the first root a relative path can be computed against wins, even if
/// that path climbs above the root.
pub fn resolve_against_roots<'a>(path: &Path, roots: &'a [PathBuf]) -> Resolution<'a> {
    let mut fallback = None;

    for root in roots {
        let root = root.as_path();
        let Some(relative) = relative_path(root, path) else {
            continue;
        };

        if relative == Path::new(".") {
            return Resolution::Root(root);
        }

        let climbs = relative.components().next() == Some(Component::ParentDir);
        if !climbs {
            return Resolution::Nested { root, relative };
        }

        if fallback.is_none() {
            fallback = Some(Resolution::Nested { root, relative });
        }
    }

    match fallback {
        Some(resolution) => {
            debug!("{} : outside every root", path.display());
            resolution
        }
        None => Resolution::Unresolved,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_path_descendant() {
        assert_eq!(
            relative_path(Path::new("/data"), Path::new("/data/a/b")),
            Some(PathBuf::from("a/b"))
        );
    }

    #[test]
    fn test_relative_path_identity() {
        assert_eq!(
            relative_path(Path::new("/data"), Path::new("/data")),
            Some(PathBuf::from("."))
        );
    }

    #[test]
    fn test_relative_path_climbs() {
        assert_eq!(
            relative_path(Path::new("/a"), Path::new("/b/x")),
            Some(PathBuf::from("../b/x"))
        );
        assert_eq!(
            relative_path(Path::new("/data/a/b"), Path::new("/data")),
            Some(PathBuf::from("../.."))
        );
    }

    #[test]
    fn test_relative_path_mixed_kinds() {
        assert_eq!(relative_path(Path::new("/data"), Path::new("data/a")), None);
        assert_eq!(relative_path(Path::new("data"), Path::new("/data/a")), None);
    }

    #[test]
    fn test_relative_path_unknown_parent() {
        assert_eq!(relative_path(Path::new("../x"), Path::new("y")), None);
    }

    #[test]
    fn test_resolve_prefers_containing_root() {
        let roots = vec![PathBuf::from("/a"), PathBuf::from("/b")];
        assert_eq!(
            resolve_against_roots(Path::new("/b/x"), &roots),
            Resolution::Nested { root: Path::new("/b"), relative: PathBuf::from("x") }
        );
    }

    #[test]
    fn test_resolve_root_identity() {
        let roots = vec![PathBuf::from("/a"), PathBuf::from("/b")];
        assert_eq!(resolve_against_roots(Path::new("/b"), &roots), Resolution::Root(Path::new("/b")));
    }

    #[test]
    fn test_resolve_outside_roots_uses_first_root() {
        let roots = vec![PathBuf::from("/a"), PathBuf::from("/b")];
        assert_eq!(
            resolve_against_roots(Path::new("/c/d"), &roots),
            Resolution::Nested { root: Path::new("/a"), relative: PathBuf::from("../c/d") }
        );
    }

    #[test]
    fn test_resolve_unresolved() {
        let roots = vec![PathBuf::from("relative/root")];
        assert_eq!(resolve_against_roots(Path::new("/abs"), &roots), Resolution::Unresolved);
        assert_eq!(resolve_against_roots(Path::new("/abs"), &[]), Resolution::Unresolved);
    }
}
