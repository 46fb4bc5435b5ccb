//! Appending rows to a store file.

use std::fs::{File, OpenOptions};
use std::io::Write;

use tracing::debug;

use crate::config::StorePaths;
use crate::error::StoreError;
use crate::schema::Store;

/// CSV writer with the conventions every store file uses: CRLF row
/// terminator (matching files created by earlier versions of the tool)
/// and standard minimal quoting.
pub(crate) fn csv_writer<W: Write>(inner: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(inner)
}

/// Appends one row of values to the store file.
///
/// The row is written as-is; field count is not checked against the header.
/// The file is created empty if it is somehow absent, matching plain
/// append-mode semantics.
pub fn append_row(paths: &StorePaths, store: Store, values: &[String]) -> Result<(), StoreError> {
    let path = paths.path(store);
    let file: File = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;

    let mut writer = csv_writer(file);
    writer.write_record(values)?;
    writer.flush().map_err(|source| StoreError::Io {
        path: path.clone(),
        source,
    })?;

    debug!(file = %path.display(), fields = values.len(), "appended row");
    Ok(())
}
