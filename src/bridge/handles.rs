//! Opaque handles passed across the native boundary.

use std::fmt;
use std::sync::Arc;

use crate::lister::{Lister, NotListable};

/// Application-wide platform context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformContext {
    /// Package identifier the context belongs to.
    pub package: String,
}

impl PlatformContext {
    /// Context for the given package.
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
        }
    }
}

/// The foreground activity or window the engine renders into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityHandle {
    /// Platform assigned identifier, unique per activity instance.
    pub id: u64,
    /// Activity name, used for diagnostics.
    pub name: String,
}

impl ActivityHandle {
    /// Handle for activity `id`.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Shared access to the asset namespace for native code that wants to look up paths later.
#[derive(Clone)]
pub struct AssetAccessor {
    lister: Arc<dyn Lister + Send + Sync>,
}

impl AssetAccessor {
    /// Accessor bound to `lister`.
    pub fn new(lister: Arc<dyn Lister + Send + Sync>) -> Self {
        Self { lister }
    }

    /// List the children of `path` through the bound primitive.
    pub fn list(&self, path: &str) -> Result<Vec<String>, NotListable> {
        self.lister.list(path)
    }
}

impl fmt::Debug for AssetAccessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssetAccessor").finish_non_exhaustive()
    }
}
