//! One-time store file creation.

use std::fs::File;

use tracing::{debug, info};

use crate::config::StorePaths;
use crate::error::StoreError;
use crate::schema::Store;
use crate::writer::csv_writer;

/// Guarantees every store file exists with its header row.
///
/// Idempotent: files that already exist are left untouched, including their
/// header, so pre-existing data is never rewritten. Intended to run once at
/// startup; any error here is a fatal startup condition for the caller.
pub fn ensure_stores(paths: &StorePaths) -> Result<(), StoreError> {
    for store in Store::ALL {
        let path = paths.path(store);
        if path.exists() {
            debug!(file = %path.display(), "store already present");
            continue;
        }

        let file = File::create(&path).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;
        let mut writer = csv_writer(file);
        writer.write_record(store.schema().header())?;
        writer.flush().map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;

        info!(file = %path.display(), "created store file");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn creates_all_three_stores_with_exact_headers() {
        let dir = TempDir::new().unwrap();
        let paths = StorePaths::new(dir.path());

        ensure_stores(&paths).unwrap();

        assert_eq!(
            fs::read_to_string(paths.path(Store::Dairy)).unwrap(),
            "ID,Date,From,Subject,Received By,Remarks\r\n"
        );
        assert_eq!(
            fs::read_to_string(paths.path(Store::Dispatch)).unwrap(),
            "ID,Date,To,Subject,Dispatched By,Mode,Remarks\r\n"
        );
        assert_eq!(
            fs::read_to_string(paths.path(Store::FileMovement)).unwrap(),
            "File ID,From Section,To Section,Moved By,Date,Remarks\r\n"
        );
    }

    #[test]
    fn second_run_leaves_existing_files_alone() {
        let dir = TempDir::new().unwrap();
        let paths = StorePaths::new(dir.path());

        ensure_stores(&paths).unwrap();
        fs::write(
            paths.path(Store::Dairy),
            "ID,Date,From,Subject,Received By,Remarks\r\n1,2024-01-01 09:00:00,HQ,Test,Clerk,none\r\n",
        )
        .unwrap();

        ensure_stores(&paths).unwrap();

        let contents = fs::read_to_string(paths.path(Store::Dairy)).unwrap();
        assert!(contents.contains("2024-01-01 09:00:00"));
        assert_eq!(contents.lines().count(), 2);
    }

    #[test]
    fn mismatched_header_is_not_repaired() {
        let dir = TempDir::new().unwrap();
        let paths = StorePaths::new(dir.path());

        fs::write(paths.path(Store::Dispatch), "garbage header\r\n").unwrap();
        ensure_stores(&paths).unwrap();

        assert_eq!(
            fs::read_to_string(paths.path(Store::Dispatch)).unwrap(),
            "garbage header\r\n"
        );
    }

    #[test]
    fn unwritable_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let paths = StorePaths::new(dir.path().join("does-not-exist"));

        let err = ensure_stores(&paths).unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }
}
