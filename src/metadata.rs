//! Package version lookups with sentinel fallbacks.

use thiserror::Error;

/// Failure to resolve a package metadata field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetadataError {
    /// The package or the requested field is unknown.
    #[error("package metadata field `{0}` not found")]
    NotFound(&'static str),
}

/// Source of package version information.
pub trait PackageMetadata {
    /// Integer version code of the installed package.
    fn version_code(&self) -> Result<i64, MetadataError>;
    /// Human readable version name of the installed package.
    fn version_name(&self) -> Result<String, MetadataError>;
}

/// Version code, or `0` when the lookup fails.
pub fn resolve_version_code<M: PackageMetadata + ?Sized>(metadata: &M) -> i64 {
    metadata.version_code().unwrap_or_else(|err| {
        tracing::debug!(error = %err, "falling back to version code 0");
        0
    })
}

/// Version name, or `None` when the lookup fails.
pub fn resolve_version_name<M: PackageMetadata + ?Sized>(metadata: &M) -> Option<String> {
    match metadata.version_name() {
        Ok(name) => Some(name),
        Err(err) => {
            tracing::debug!(error = %err, "version name unavailable");
            None
        }
    }
}

/// Metadata supplied up front, typically from configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticMetadata {
    /// Known version code.
    pub version_code: Option<i64>,
    /// Known version name.
    pub version_name: Option<String>,
}

impl PackageMetadata for StaticMetadata {
    fn version_code(&self) -> Result<i64, MetadataError> {
        self.version_code.ok_or(MetadataError::NotFound("version_code"))
    }

    fn version_name(&self) -> Result<String, MetadataError> {
        self
            .version_name
            .clone()
            .ok_or(MetadataError::NotFound("version_name"))
    }
}
