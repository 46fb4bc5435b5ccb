//! Store file locations.

use std::path::{Path, PathBuf};

use crate::schema::Store;

/// Immutable set of store file paths, built once at startup and passed
/// explicitly to bootstrap, writer, and reader.
#[derive(Debug, Clone)]
pub struct StorePaths {
    data_dir: PathBuf,
}

impl StorePaths {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Full path of the backing file for `store`.
    pub fn path(&self, store: Store) -> PathBuf {
        self.data_dir.join(store.file_name())
    }
}
