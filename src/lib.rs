//! Anime Catalog Server Library
//!
//! A small server-rendered catalog of anime backed by a single JSON file.
//! This library exposes the internal modules for testing and potential reuse.

pub mod anime_store;
pub mod config;
pub mod server;

// Re-export commonly used types for convenience
pub use anime_store::{AnimeStore, JsonFilePersistence};
pub use server::{run_server, RequestsLoggingLevel, ServerConfig};
