//! Per-directory byte totals collected during traversal.
//!
//! Keys are absolute, normalized directory paths. Iteration is in sorted
//! path order so folded output is reproducible between runs.

use std::collections::btree_map::{self, BTreeMap};
use std::path::{Path, PathBuf};

/// Mapping from absolute directory path to the bytes of the files directly inside it
///
/// **Public** - produced by the aggregator, read by the folder
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SizeMap {
    entries: BTreeMap<PathBuf, u64>,
}

impl SizeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim a directory for traversal
    ///
    /// Returns `false` when the directory is already a key, in which case the
    /// caller must not descend into it. A claimed directory starts at 0 bytes.
    pub fn claim_dir(&mut self, dir: &Path) -> bool {
        match self.entries.entry(dir.to_path_buf()) {
            btree_map::Entry::Occupied(_) => false,
            btree_map::Entry::Vacant(slot) => {
                slot.insert(0);
                true
            }
        }
    }

    /// Add a file's size to its containing directory
    pub fn add_file(&mut self, dir: &Path, bytes: u64) {
        let total = self.entries.entry(dir.to_path_buf()).or_insert(0);
        *total = total.saturating_add(bytes);
    }

    pub fn get(&self, dir: &Path) -> Option<u64> {
        self.entries.get(dir).copied()
    }

    pub fn contains(&self, dir: &Path) -> bool {
        self.entries.contains_key(dir)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of every directory's own size
    pub fn total_bytes(&self) -> u64 {
        self.entries.values().fold(0u64, |acc, v| acc.saturating_add(*v))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Path, u64)> {
        self.entries.iter().map(|(path, size)| (path.as_path(), *size))
    }
}

impl FromIterator<(PathBuf, u64)> for SizeMap {
    fn from_iter<I: IntoIterator<Item = (PathBuf, u64)>>(iter: I) -> Self {
        let mut map = SizeMap::new();
        for (dir, bytes) in iter {
            map.add_file(&dir, bytes);
        }
        map
    }
}
