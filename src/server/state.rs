//! Application state for the viewer server.
//!
//! The metadata route needs to distinguish "preprocessing has not run yet"
//! from "the file exists but could not be delivered", so the read capability
//! is a trait rather than ambient filesystem access. The production
//! implementation reads `metadata.json` from the processed root; tests
//! substitute an in-memory source to exercise the failure paths without a
//! real filesystem.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Read capability for the externally generated metadata file.
pub trait MetadataSource: Send + Sync {
    /// Whether the metadata file currently exists.
    fn exists(&self) -> bool;

    /// Read the metadata file's full contents.
    fn read(&self) -> io::Result<Vec<u8>>;
}

/// `MetadataSource` backed by `<processed root>/metadata.json`.
pub struct FsMetadataSource {
    path: PathBuf,
}

impl FsMetadataSource {
    pub fn new(processed_root: &Path) -> Self {
        Self {
            path: processed_root.join("metadata.json"),
        }
    }
}

impl MetadataSource for FsMetadataSource {
    fn exists(&self) -> bool {
        self.path.is_file()
    }

    fn read(&self) -> io::Result<Vec<u8>> {
        fs::read(&self.path)
    }
}

/// Shared state passed to request handlers through Axum's State extractor.
#[derive(Clone)]
pub struct AppState {
    pub metadata: Arc<dyn MetadataSource>,
}

impl AppState {
    /// State reading metadata from the processed root on disk.
    pub fn new(processed_root: &Path) -> Self {
        Self {
            metadata: Arc::new(FsMetadataSource::new(processed_root)),
        }
    }

    /// State with an injected metadata source, for tests.
    pub fn with_source(source: Arc<dyn MetadataSource>) -> Self {
        Self { metadata: source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fs_source_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = FsMetadataSource::new(dir.path());
        assert!(!source.exists());
        assert!(source.read().is_err());
    }

    #[test]
    fn test_fs_source_reads_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let contents = br#"{"studies":[]}"#;
        fs::write(dir.path().join("metadata.json"), contents).unwrap();

        let source = FsMetadataSource::new(dir.path());
        assert!(source.exists());
        assert_eq!(source.read().unwrap(), contents);
    }

    #[test]
    fn test_fs_source_directory_is_not_a_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("metadata.json")).unwrap();

        let source = FsMetadataSource::new(dir.path());
        assert!(!source.exists());
    }

    #[test]
    fn test_app_state_clone_shares_source() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("metadata.json"), b"{}").unwrap();

        let state = AppState::new(dir.path());
        let cloned = state.clone();
        assert!(cloned.metadata.exists());
    }
}
