//! Depth-first enumeration of the asset namespace.
//!
//! The only signal available is whether `list` succeeded and how many names it returned:
//!
//! * failure on a non-root path: the path is a leaf and goes into the manifest
//! * success with names: every child is visited, in the order returned
//! * success with no names: an empty directory, which contributes nothing
//!
//! The traversal uses an explicit stack instead of recursion so deeply nested namespaces are
//! bounded by heap rather than by the call stack. Children are pushed in reverse so they pop
//! in listing order, which keeps the output identical to a recursive pre-order walk.

use std::time::{Duration, Instant};

use crate::asset_paths::{child_path, is_root};
use crate::lister::Lister;
use crate::manifest::Manifest;

/// Counters gathered while building a manifest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ManifestSummary {
    /// Leaf paths added to the manifest.
    pub leaves: usize,
    /// Paths that listed successfully with at least one child.
    pub directories: usize,
    /// Paths that listed successfully with no children.
    pub empty_directories: usize,
    /// Whether the root itself failed to list.
    pub root_unlistable: bool,
    /// Wall-clock time spent walking.
    pub elapsed: Duration,
}

/// Enumerate every leaf reachable from the namespace root.
///
/// Never fails: an unlistable root yields an empty manifest.
pub fn build_manifest<L: Lister + ?Sized>(lister: &L) -> Manifest {
    build_manifest_with_summary(lister).0
}

/// Like [`build_manifest`], also returning traversal counters.
pub fn build_manifest_with_summary<L: Lister + ?Sized>(lister: &L) -> (Manifest, ManifestSummary) {
    let started = Instant::now();
    let mut summary = ManifestSummary::default();
    let mut entries = Vec::new();
    let mut pending = vec![String::new()];

    while let Some(path) = pending.pop() {
        match lister.list(&path) {
            Err(_) if is_root(&path) => {
                summary.root_unlistable = true;
                tracing::warn!("asset namespace root is not listable, manifest will be empty");
            }
            Err(_) => entries.push(path),
            Ok(names) if names.is_empty() => {
                summary.empty_directories += 1;
                tracing::trace!(path = %path, "skipping empty asset directory");
            }
            Ok(names) => {
                summary.directories += 1;
                pending.extend(
                    names
                        .iter()
                        .rev()
                        .filter(|name| !name.is_empty())
                        .map(|name| child_path(&path, name)),
                );
            }
        }
    }

    summary.leaves = entries.len();
    summary.elapsed = started.elapsed();
    tracing::debug!(
        leaves = summary.leaves,
        directories = summary.directories,
        empty_directories = summary.empty_directories,
        elapsed_ms = summary.elapsed.as_millis() as u64,
        "built asset manifest"
    );

    (Manifest::from_entries(entries), summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lister::{MemoryLister, NotListable};
    use proptest::prelude::*;
    use std::cell::RefCell;
    use std::collections::BTreeSet;

    fn fails(path: &str) -> Result<Vec<String>, NotListable> {
        Err(NotListable::new(path))
    }

    fn names(values: &[&str]) -> Result<Vec<String>, NotListable> {
        Ok(values.iter().map(|value| value.to_string()).collect())
    }

    #[test]
    fn single_file_under_root() {
        let lister = |path: &str| match path {
            "" => names(&["a.txt"]),
            other => fails(other),
        };

        assert_eq!(build_manifest(&lister).to_vec(), vec!["a.txt"]);
    }

    #[test]
    fn nested_files_keep_listing_order() {
        let lister = |path: &str| match path {
            "" => names(&["sub"]),
            "sub" => names(&["x.bin", "y.bin"]),
            other => fails(other),
        };

        assert_eq!(build_manifest(&lister).to_vec(), vec!["sub/x.bin", "sub/y.bin"]);
    }

    #[test]
    fn empty_directory_contributes_nothing() {
        let lister = |path: &str| match path {
            "" => names(&["f1.dat", "dir"]),
            "dir" => names(&[]),
            other => fails(other),
        };

        let (manifest, summary) = build_manifest_with_summary(&lister);
        assert_eq!(manifest.to_vec(), vec!["f1.dat"]);
        assert_eq!(summary.empty_directories, 1);
        assert_eq!(summary.leaves, 1);
    }

    #[test]
    fn empty_names_are_not_revisited() {
        let lister = |path: &str| match path {
            "" => names(&["", "sub", "a.txt"]),
            "sub" => names(&[""]),
            other => fails(other),
        };

        assert_eq!(build_manifest(&lister).to_vec(), vec!["a.txt"]);
    }

    #[test]
    fn unlistable_root_yields_empty_manifest() {
        let lister = |path: &str| fails(path);

        let (manifest, summary) = build_manifest_with_summary(&lister);
        assert!(manifest.is_empty());
        assert!(summary.root_unlistable);
    }

    #[test]
    fn empty_root_yields_empty_manifest() {
        let (manifest, summary) = build_manifest_with_summary(&MemoryLister::new());
        assert!(manifest.is_empty());
        assert!(!summary.root_unlistable);
        assert_eq!(summary.empty_directories, 1);
    }

    #[test]
    fn traversal_is_depth_first_pre_order() {
        let lister = |path: &str| match path {
            "" => names(&["b", "a.txt", "c"]),
            "b" => names(&["inner", "b1"]),
            "b/inner" => names(&["deep.bin"]),
            "c" => names(&["c1"]),
            other => fails(other),
        };

        assert_eq!(build_manifest(&lister).to_vec(), vec![
            "b/inner/deep.bin",
            "b/b1",
            "a.txt",
            "c/c1",
        ]);
    }

    #[test]
    fn each_path_is_listed_once() {
        let calls = RefCell::new(Vec::new());
        let lister = |path: &str| {
            calls.borrow_mut().push(path.to_string());
            match path {
                "" => names(&["sub", "top.txt"]),
                "sub" => names(&["x.bin"]),
                other => fails(other),
            }
        };

        build_manifest(&lister);
        assert_eq!(*calls.borrow(), vec!["", "sub", "sub/x.bin", "top.txt"]);
    }

    #[test]
    fn survives_very_deep_nesting() {
        let depth = 2_000;
        let mut path = String::new();
        let mut lister = MemoryLister::new();
        for _ in 0..depth {
            path = child_path(&path, "d");
        }
        lister.add_file(&child_path(&path, "leaf.bin"));

        let manifest = build_manifest(&lister);
        assert_eq!(manifest.len(), 1);
        assert!(manifest.as_slice()[0].ends_with("d/leaf.bin"));
    }

    fn arb_path() -> impl Strategy<Value = String> {
        let segment = prop::sample::select(vec!["a", "b", "c", "d"]);
        prop::collection::vec(segment, 1..5).prop_map(|parts| parts.join("/"))
    }

    fn arb_tree() -> impl Strategy<Value = (Vec<String>, Vec<String>)> {
        (
            prop::collection::vec(arb_path(), 0..20),
            prop::collection::vec(arb_path(), 0..5),
        )
    }

    /// Build a namespace, dropping any path that would have to be both a file and a directory.
    fn namespace(files: &[String], dirs: &[String]) -> (MemoryLister, BTreeSet<String>) {
        let mut lister = MemoryLister::new();
        let mut directories = BTreeSet::new();
        let mut leaves = BTreeSet::new();

        for dir in dirs {
            lister.add_dir(dir);
            let mut current = String::new();
            for part in dir.split('/') {
                current = child_path(&current, part);
                directories.insert(current.clone());
            }
        }

        for file in files {
            let mut prefixes = Vec::new();
            let mut current = String::new();
            for part in file.split('/') {
                current = child_path(&current, part);
                prefixes.push(current.clone());
            }
            let (own, ancestors) = prefixes.split_last().expect("paths have a segment");
            let clashes = directories.contains(own) || ancestors.iter().any(|p| leaves.contains(p));
            if clashes {
                continue;
            }
            directories.extend(ancestors.iter().cloned());
            leaves.insert(own.clone());
            lister.add_file(file);
        }

        (lister, leaves)
    }

    proptest! {
        #[test]
        fn manifest_holds_exactly_the_leaves((files, dirs) in arb_tree()) {
            let (lister, leaves) = namespace(&files, &dirs);
            let manifest = build_manifest(&lister);

            for entry in &manifest {
                prop_assert!(lister.list(entry).is_err());
            }
            let found: BTreeSet<String> = manifest.iter().cloned().collect();
            prop_assert_eq!(found.len(), manifest.len());
            prop_assert_eq!(found, leaves);
        }

        #[test]
        fn rebuilding_gives_the_same_sequence((files, dirs) in arb_tree()) {
            let (lister, _) = namespace(&files, &dirs);
            prop_assert_eq!(build_manifest(&lister), build_manifest(&lister));
        }

        #[test]
        fn empty_directories_never_appear((files, dirs) in arb_tree()) {
            let (lister, _) = namespace(&files, &dirs);
            let manifest = build_manifest(&lister);

            for dir in &dirs {
                if lister.list(dir).is_ok_and(|children| children.is_empty()) {
                    let prefix = format!("{dir}/");
                    prop_assert!(!manifest.contains(dir));
                    prop_assert!(manifest.iter().all(|entry| !entry.starts_with(&prefix)));
                }
            }
        }
    }
}
