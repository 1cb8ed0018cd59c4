//! Flat, ordered list of leaf asset paths.

use serde::{Deserialize, Serialize};

/// Every leaf path discovered under the namespace root, in traversal order.
///
/// The list is never sorted or deduplicated: each leaf is reached exactly once and the order
/// follows whatever the listing primitive returned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    entries: Vec<String>,
}

impl Manifest {
    pub(crate) fn from_entries(entries: Vec<String>) -> Self {
        Self { entries }
    }

    /// Number of leaf paths.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no leaves were found.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate the leaf paths in traversal order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.entries.iter()
    }

    /// Borrow the leaf paths.
    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }

    /// Returns `true` when `path` is one of the leaves.
    pub fn contains(&self, path: &str) -> bool {
        self.entries.iter().any(|entry| entry == path)
    }

    /// Owned copy of the list, in the shape handed across the native boundary.
    pub fn to_vec(&self) -> Vec<String> {
        self.entries.clone()
    }
}

impl<'a> IntoIterator for &'a Manifest {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
