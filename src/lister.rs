//! The listing primitive used to probe the asset namespace.
//!
//! The namespace only answers one question: "what are the children of this path?". There is
//! no stat call, so a failing listing is the only hint that a path names a file.

use std::collections::BTreeMap;
use std::fs::{self, DirEntry};
use std::path::PathBuf;

use thiserror::Error;

use crate::asset_paths::{child_path, is_root, normalise_asset_path};

/// Returned when a path cannot be listed: either a leaf or an entry that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("asset path `{path}` is not listable")]
pub struct NotListable {
    /// Asset path that failed to list.
    pub path: String,
}

impl NotListable {
    /// Failure for the given asset path.
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

/// Capability for listing the children of an asset path.
pub trait Lister {
    /// Return the names directly under `path`, in the namespace's own order.
    fn list(&self, path: &str) -> Result<Vec<String>, NotListable>;
}

impl<F> Lister for F
where
    F: Fn(&str) -> Result<Vec<String>, NotListable>,
{
    fn list(&self, path: &str) -> Result<Vec<String>, NotListable> {
        self(path)
    }
}

/// Lister backed by a directory on the host filesystem.
///
/// Listing a regular file fails the same way a missing entry does. Names come back sorted so
/// manifests built from the same tree match on every host.
///
/// Symlinks to directories and dangling symlinks are left out, which keeps the namespace a
/// tree even when the host directory contains link cycles. Names that are not valid UTF-8
/// are left out too, since an asset path has to round-trip through `list`.
#[derive(Debug, Clone)]
pub struct DirLister {
    root: PathBuf,
}

impl DirLister {
    /// Create a lister rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        if is_root(path) {
            self.root.clone()
        } else {
            path.split('/')
                .fold(self.root.clone(), |acc, segment| acc.join(segment))
        }
    }
}

impl Lister for DirLister {
    fn list(&self, path: &str) -> Result<Vec<String>, NotListable> {
        let entries = fs::read_dir(self.resolve(path)).map_err(|_| NotListable::new(path))?;
        let mut names = entries
            .flatten()
            .filter(keeps_tree_shape)
            .filter_map(|entry| match entry.file_name().into_string() {
                Ok(name) => Some(name),
                Err(raw) => {
                    tracing::warn!(
                        parent = path,
                        name = %raw.to_string_lossy(),
                        "skipping asset with a non UTF-8 name"
                    );
                    None
                }
            })
            .collect::<Vec<_>>();
        names.sort();
        Ok(names)
    }
}

/// Symlinks are only followed when they point at a regular file.
fn keeps_tree_shape(entry: &DirEntry) -> bool {
    let Ok(file_type) = entry.file_type() else {
        return false;
    };
    if !file_type.is_symlink() {
        return true;
    }
    match fs::metadata(entry.path()) {
        Ok(target) if target.is_file() => true,
        _ => {
            tracing::debug!(path = %entry.path().display(), "skipping symlink");
            false
        }
    }
}

/// In-memory namespace, mostly useful for tests and for replaying a recorded layout.
///
/// Children keep the order in which they were first inserted.
#[derive(Debug, Clone)]
pub struct MemoryLister {
    directories: BTreeMap<String, Vec<String>>,
}

impl Default for MemoryLister {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryLister {
    /// Empty namespace: the root lists successfully with no children.
    pub fn new() -> Self {
        let mut directories = BTreeMap::new();
        directories.insert(String::new(), Vec::new());
        Self { directories }
    }

    /// Build a namespace holding the given file paths.
    pub fn from_files<I, S>(files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lister = Self::new();
        for file in files {
            lister.add_file(file.as_ref());
        }
        lister
    }

    /// Insert a file, creating its parent directories on the way.
    pub fn add_file(&mut self, path: &str) -> &mut Self {
        let path = normalise_asset_path(path);
        if let Some((parent, name)) = path.rsplit_once('/') {
            let parent = parent.to_string();
            self.add_dir(&parent);
            self.push_child(&parent, name);
        } else if !path.is_empty() {
            self.push_child("", &path);
        }
        self
    }

    /// Insert a directory, including any missing ancestors. The directory may stay empty.
    pub fn add_dir(&mut self, path: &str) -> &mut Self {
        let path = normalise_asset_path(path);
        let mut current = String::new();
        for segment in path.split('/').filter(|segment| !segment.is_empty()) {
            self.push_child(&current, segment);
            current = child_path(&current, segment);
            self.directories.entry(current.clone()).or_default();
        }
        self
    }

    fn push_child(&mut self, parent: &str, name: &str) {
        let children = self.directories.entry(parent.to_string()).or_default();
        if !children.iter().any(|existing| existing == name) {
            children.push(name.to_string());
        }
    }
}

impl Lister for MemoryLister {
    fn list(&self, path: &str) -> Result<Vec<String>, NotListable> {
        self
            .directories
            .get(path)
            .cloned()
            .ok_or_else(|| NotListable::new(path))
    }
}
