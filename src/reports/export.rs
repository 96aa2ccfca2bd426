//! CSV export.

use crate::error::{ReportError, ReportResult};
use crate::models::ContactStore;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Default export location, relative to the working directory.
pub const DEFAULT_EXPORT_FILE: &str = "contacts_export.csv";

/// Header row of the export.
pub const CSV_HEADER: [&str; 5] = ["Name", "Phone", "Email", "Address", "Group"];

/// Write the header and one row per contact, in store order.
///
/// Missing email or address becomes an empty cell. Returns the number of
/// data rows written.
pub fn write_csv<W: Write>(store: &ContactStore, writer: W) -> ReportResult<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(CSV_HEADER)?;

    let mut rows = 0;
    for (name, contact) in store.iter() {
        csv_writer.write_record([
            name,
            contact.phone.as_str(),
            contact.email_str(),
            contact.address_str(),
            contact.group.as_str(),
        ])?;
        rows += 1;
    }

    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(rows)
}

/// Create (or truncate) `path` and export the store to it.
pub fn export_csv(store: &ContactStore, path: impl AsRef<Path>) -> ReportResult<usize> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let rows = write_csv(store, file)?;
    info!(path = %path.display(), rows, "Exported contacts to CSV");
    Ok(rows)
}
