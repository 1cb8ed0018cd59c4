//! Resolution of the writable external storage directory handed to the engine.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::ShimConfig;

/// Failure to determine the external storage path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// The platform exposes no documents directory.
    #[error("no documents directory is available on this platform")]
    NoDocumentsDir,
    /// The resolved path could not be made absolute.
    #[error("external storage path {0} is not absolute")]
    NotAbsolute(PathBuf),
}

/// Compute the external storage path once for the whole launch.
///
/// An explicit `external_storage_dir` wins; otherwise the documents directory is joined with
/// the configured application folder. The engine keeps user data here, so it survives
/// reinstalls.
pub fn external_storage_path(config: &ShimConfig) -> Result<String, StorageError> {
    let path = match config.external_storage_dir.as_deref() {
        Some(explicit) => absolutize(Path::new(explicit))?,
        None => dirs::document_dir()
            .ok_or(StorageError::NoDocumentsDir)?
            .join(&config.app_folder_name),
    };

    if !path.is_absolute() {
        return Err(StorageError::NotAbsolute(path));
    }
    Ok(path.to_string_lossy().into_owned())
}

fn absolutize(path: &Path) -> Result<PathBuf, StorageError> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .map_err(|_| StorageError::NotAbsolute(path.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn explicit_directory_is_passed_through() {
        let dir = tempdir().unwrap();
        let config = ShimConfig {
            external_storage_dir: Some(dir.path().to_string_lossy().into_owned()),
            ..ShimConfig::default()
        };

        let resolved = external_storage_path(&config).unwrap();
        assert_eq!(resolved, dir.path().to_string_lossy());
    }

    #[test]
    fn relative_override_becomes_absolute() {
        let config = ShimConfig {
            external_storage_dir: Some("user-data".into()),
            ..ShimConfig::default()
        };

        let resolved = external_storage_path(&config).unwrap();
        assert!(Path::new(&resolved).is_absolute());
        assert!(resolved.ends_with("user-data"));
    }

    #[test]
    fn documents_directory_gets_app_folder() {
        let config = ShimConfig::default();
        match dirs::document_dir() {
            Some(documents) => {
                let resolved = external_storage_path(&config).unwrap();
                assert_eq!(
                    PathBuf::from(&resolved),
                    documents.join(&config.app_folder_name)
                );
            }
            None => assert_eq!(
                external_storage_path(&config),
                Err(StorageError::NoDocumentsDir)
            ),
        }
    }
}
