#![doc = include_str!("../README.md")]

mod entry;
pub use entry::DenylistEntry;
mod error;
pub use error::EntryError;
mod migrations;
mod schema_version;
pub use schema_version::SchemaVersion;
mod validation;
pub use validation::KeyValidation;
