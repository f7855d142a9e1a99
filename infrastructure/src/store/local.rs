//! File store over the local filesystem
//!
//! Locations are absolute paths. Folder locations carry a trailing `/`,
//! and parent chains run from the nearest folder up to `/`.

use async_trait::async_trait;
use jsctx_application::ports::file_store::{FileStore, StoreError};
use jsctx_domain::FileMetadata;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, trace};

/// [`FileStore`] backed by `tokio::fs`
#[derive(Debug, Clone, Default)]
pub struct LocalFileStore;

impl LocalFileStore {
    pub fn new() -> Self {
        Self
    }

    fn metadata_for(path: &Path, directory: bool) -> FileMetadata {
        let location = location_of(path, directory);
        let meta = if directory {
            FileMetadata::folder(location)
        } else {
            FileMetadata::file(location)
        };
        meta.with_parents(parents_of(path))
    }
}

fn location_of(path: &Path, directory: bool) -> String {
    let mut location = path.to_string_lossy().into_owned();
    if directory && !location.ends_with('/') {
        location.push('/');
    }
    location
}

/// Ancestor folders of `path`, nearest first.
fn parents_of(path: &Path) -> Vec<String> {
    path.ancestors()
        .skip(1)
        .filter(|p| !p.as_os_str().is_empty())
        .map(|p| location_of(p, true))
        .collect()
}

fn store_error(location: &str, e: std::io::Error) -> StoreError {
    match e.kind() {
        ErrorKind::NotFound => StoreError::NotFound(location.to_string()),
        ErrorKind::PermissionDenied => StoreError::PermissionDenied(location.to_string()),
        _ => StoreError::Io(format!("{}: {}", location, e)),
    }
}

#[async_trait]
impl FileStore for LocalFileStore {
    async fn read(&self, location: &str) -> Result<Option<String>, StoreError> {
        trace!("read {}", location);
        match fs::read_to_string(location).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::IsADirectory) => {
                Ok(None)
            }
            Err(e) => Err(store_error(location, e)),
        }
    }

    async fn read_metadata(&self, location: &str) -> Result<Option<FileMetadata>, StoreError> {
        trace!("stat {}", location);
        match fs::metadata(location).await {
            Ok(meta) => Ok(Some(Self::metadata_for(Path::new(location), meta.is_dir()))),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(store_error(location, e)),
        }
    }

    async fn write(&self, location: &str, contents: &str) -> Result<(), StoreError> {
        debug!("write {}", location);
        fs::write(location, contents)
            .await
            .map_err(|e| store_error(location, e))
    }

    async fn create_file(&self, parent: &str, name: &str) -> Result<FileMetadata, StoreError> {
        let path = Path::new(parent).join(name);
        let location = location_of(&path, false);
        debug!("create {}", location);
        fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .map_err(|e| store_error(&location, e))?;
        Ok(Self::metadata_for(&path, false))
    }

    async fn fetch_children(&self, location: &str) -> Result<Vec<FileMetadata>, StoreError> {
        trace!("list {}", location);
        let mut entries = fs::read_dir(location)
            .await
            .map_err(|e| store_error(location, e))?;

        let mut children = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| store_error(location, e))?
        {
            let directory = entry
                .file_type()
                .await
                .map(|t| t.is_dir())
                .unwrap_or(false);
            children.push(Self::metadata_for(&entry.path(), directory));
        }
        children.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(children)
    }

    /// Walks up from `location` and returns the first folder holding one
    /// of `markers`.
    async fn get_project(
        &self,
        location: &str,
        markers: &[&str],
    ) -> Result<Option<String>, StoreError> {
        let start = PathBuf::from(location);
        for folder in start.ancestors().skip(1) {
            if folder.as_os_str().is_empty() {
                continue;
            }
            for marker in markers {
                let candidate = folder.join(marker);
                let exists = fs::try_exists(&candidate)
                    .await
                    .map_err(|e| store_error(&candidate.to_string_lossy(), e))?;
                if exists {
                    debug!("Found {} for {}", candidate.display(), location);
                    return Ok(Some(location_of(folder, true)));
                }
            }
        }
        Ok(None)
    }
}
