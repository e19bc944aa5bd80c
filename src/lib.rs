//! Singles Catalog Server Library
//!
//! This library exposes the internal modules for testing and potential reuse.

pub mod catalog;
pub mod catalog_store;
pub mod config;
pub mod server;

// Re-export commonly used types for convenience
pub use catalog::{MusicSingleRelease, SingleFields, ValidationError};
pub use catalog_store::{InMemorySinglesStore, SinglesStore, StoreError};
pub use server::{make_app, run_server, RequestsLoggingLevel, ServerConfig};
