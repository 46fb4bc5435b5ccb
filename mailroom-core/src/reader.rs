//! Reading a store file back for display.

use std::fs::File;
use std::io::ErrorKind;

use tracing::debug;

use crate::config::StorePaths;
use crate::error::StoreError;
use crate::schema::Store;

/// Everything a viewer needs: the header row and the data rows, in file
/// order (oldest first, since writes are append-only).
#[derive(Debug, Clone, Default)]
pub struct StoreContents {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Reads the store file in full.
///
/// The first row becomes `headers`; every subsequent row is a record. Rows
/// are accepted even when their field count disagrees with the header, so
/// files touched by other tools still display. A missing file yields
/// [`StoreError::NotFound`] and is never created here.
pub fn read_store(paths: &StorePaths, store: Store) -> Result<StoreContents, StoreError> {
    let path = paths.path(store);
    let file = File::open(&path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => StoreError::NotFound { path: path.clone() },
        _ => StoreError::Io {
            path: path.clone(),
            source,
        },
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut contents = StoreContents::default();
    for record in reader.records() {
        let record = record?;
        let fields: Vec<String> = record.iter().map(str::to_string).collect();
        if contents.headers.is_empty() {
            contents.headers = fields;
        } else {
            contents.rows.push(fields);
        }
    }

    debug!(file = %path.display(), rows = contents.rows.len(), "read store");
    Ok(contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::ensure_stores;
    use crate::writer::append_row;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn row(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn header_and_rows_come_back_in_file_order() {
        let dir = TempDir::new().unwrap();
        let paths = StorePaths::new(dir.path());
        ensure_stores(&paths).unwrap();

        for id in ["1", "2", "3"] {
            append_row(
                &paths,
                Store::Dairy,
                &row(&[id, "2025-08-29 10:00:00", "HQ", "Subj", "Clerk", "none"]),
            )
            .unwrap();
        }

        let contents = read_store(&paths, Store::Dairy).unwrap();
        assert_eq!(
            contents.headers,
            ["ID", "Date", "From", "Subject", "Received By", "Remarks"]
        );
        assert_eq!(contents.rows.len(), 3);
        assert_eq!(contents.rows[0][0], "1");
        assert_eq!(contents.rows[2][0], "3");
    }

    #[test]
    fn header_only_file_has_zero_rows() {
        let dir = TempDir::new().unwrap();
        let paths = StorePaths::new(dir.path());
        ensure_stores(&paths).unwrap();

        let contents = read_store(&paths, Store::FileMovement).unwrap();
        assert_eq!(contents.headers.len(), 6);
        assert!(contents.rows.is_empty());
    }

    #[test]
    fn missing_file_is_not_found_and_is_not_created() {
        let dir = TempDir::new().unwrap();
        let paths = StorePaths::new(dir.path());

        let err = read_store(&paths, Store::Dispatch).unwrap_err();
        assert!(err.is_not_found());
        assert!(!paths.path(Store::Dispatch).exists());
    }

    #[test]
    fn empty_file_reads_as_empty_contents() {
        let dir = TempDir::new().unwrap();
        let paths = StorePaths::new(dir.path());
        std::fs::write(paths.path(Store::Dairy), "").unwrap();

        let contents = read_store(&paths, Store::Dairy).unwrap();
        assert!(contents.headers.is_empty());
        assert!(contents.rows.is_empty());
    }

    #[test]
    fn short_and_long_rows_still_display() {
        let dir = TempDir::new().unwrap();
        let paths = StorePaths::new(dir.path());
        std::fs::write(
            paths.path(Store::Dairy),
            "ID,Date,From,Subject,Received By,Remarks\r\n1,only-two\r\n1,2,3,4,5,6,7,8\r\n",
        )
        .unwrap();

        let contents = read_store(&paths, Store::Dairy).unwrap();
        assert_eq!(contents.rows.len(), 2);
        assert_eq!(contents.rows[0].len(), 2);
        assert_eq!(contents.rows[1].len(), 8);
    }

    #[test]
    fn quoted_fields_round_trip() {
        let dir = TempDir::new().unwrap();
        let paths = StorePaths::new(dir.path());
        ensure_stores(&paths).unwrap();

        append_row(
            &paths,
            Store::Dairy,
            &row(&["1", "2025-08-29 10:00:00", "HQ, North Wing", "Subj", "Clerk", "none"]),
        )
        .unwrap();

        let contents = read_store(&paths, Store::Dairy).unwrap();
        assert_eq!(contents.rows[0][2], "HQ, North Wing");
    }
}
