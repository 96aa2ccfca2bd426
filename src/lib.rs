//! Contact Book - a single-user, local contact book.
//!
//! Contacts are kept in memory for one run, loaded from and saved to a
//! JSON file, and managed through a numbered console menu. CSV export and
//! per-group statistics are read-only reports over the same store.
//!
//! # Architecture
//!
//! - **domain**: Value objects and validation (`clean_phone`, `validate_email`)
//! - **models**: The contact record and the ordered in-memory store
//! - **repositories**: Loading and saving the whole store
//! - **services**: Add, search, update, delete and list
//! - **reports**: CSV export and group statistics
//! - **cli**: The interactive menu loop
//! - **config**: Configuration from environment variables
//! - **error**: Custom error types for precise error handling

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod reports;
pub mod repositories;
pub mod services;

pub use cli::Menu;
pub use config::Config;
pub use domain::{clean_phone, validate_email, ValidationError};
pub use error::{ConfigError, ContactError, ReportError, StorageError};
pub use models::{Contact, ContactStore};
pub use reports::ContactStatistics;
pub use repositories::{ContactRepository, JsonFileRepository};
pub use services::{ContactService, ContactUpdate, DeleteOutcome, NewContact};
