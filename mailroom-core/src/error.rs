use std::path::PathBuf;

/// Errors produced while touching a store file.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The underlying file operation failed (create, open, append).
    #[error("cannot access '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV encoding or decoding failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The store file is absent at read time. Bootstrap should have created
    /// it; this guards against external deletion and is recoverable.
    #[error("file not found: '{}'", path.display())]
    NotFound { path: PathBuf },
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}
