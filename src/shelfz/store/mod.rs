//! # Storage Layer
//!
//! Whole-document persistence for the catalog. The [`CatalogStore`] trait
//! abstracts the backend so commands stay decoupled from the filesystem:
//!
//! - [`fs::FileStore`]: production storage. `books.json` holds the full
//!   collection as a pretty-printed JSON array, `config.json` holds the
//!   configuration. Every write rewrites the whole document; there is no
//!   append-only log and no versioning.
//! - [`memory::InMemoryStore`]: in-memory storage for fast, isolated tests.
//!
//! ## Failure contract
//!
//! Loading a catalog document that exists but does not parse is *not* an
//! error: the load reports an empty collection with `recovered` set, and the
//! offending file stays on disk untouched until the next write replaces it.
//! I/O errors on reads and writes surface as `Err`; callers keep their
//! in-memory state as the last known good value.
//!
//! Single-process, single-user: no file locking, and read-modify-write
//! cycles are not atomic across processes.

use crate::config::AppConfig;
use crate::error::Result;
use crate::model::Book;

pub mod fs;
pub mod memory;

/// Result of loading the catalog document.
#[derive(Debug, Default)]
pub struct LoadedCatalog {
    pub books: Vec<Book>,
    /// True when the document existed but could not be parsed and the
    /// collection was recovered as empty.
    pub recovered: bool,
}

/// Abstract interface for catalog persistence.
pub trait CatalogStore {
    /// Load the full collection. Missing document yields an empty catalog;
    /// an unparseable document yields an empty catalog flagged `recovered`.
    fn load_books(&self) -> Result<LoadedCatalog>;

    /// Read the collection, add one record, write the collection back.
    fn append_book(&mut self, book: &Book) -> Result<()>;

    /// Overwrite the entire document with the given collection. This is the
    /// primary mutation path for edits, moves, progress and bulk updates.
    fn replace_all(&mut self, books: &[Book]) -> Result<()>;

    /// Read, filter out the matching id, write back. A missing id is a
    /// no-op, not an error.
    fn remove_book(&mut self, id: &str) -> Result<()>;

    /// Load configuration; a missing document yields the defaults.
    fn load_config(&self) -> Result<AppConfig>;

    /// Overwrite the configuration document wholesale.
    fn save_config(&mut self, config: &AppConfig) -> Result<()>;
}
