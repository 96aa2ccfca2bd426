//! Read-only reports over the contact store.
//!
//! - **export**: CSV export of every contact
//! - **statistics**: total count and per-group frequency table

pub mod export;
pub mod statistics;

pub use export::{export_csv, write_csv, CSV_HEADER, DEFAULT_EXPORT_FILE};
pub use statistics::ContactStatistics;
