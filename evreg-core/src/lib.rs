//! Core types for the evreg events API.
//!
//! This crate owns everything below the HTTP surface:
//! - `Event`, the single record type managed by the API
//! - the CSV row codec (`csv` module)
//! - the pluggable `EventStore` trait with CSV and in-memory backends
//! - integrity utilities (SHA-256 digest, compressed archive)

pub mod config;
pub mod csv;
pub mod error;
pub mod event;
pub mod integrity;
pub mod store;

// Re-export the types nearly every consumer needs at crate root
pub use error::{EvRegError, EvRegResult};
pub use event::Event;
pub use store::{CsvStore, EventStore, MemoryStore};
