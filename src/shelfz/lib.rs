//! # Shelfz Architecture
//!
//! Shelfz is a **UI-agnostic book catalog library**. The CLI binary is just
//! one client of it; the same core could sit behind a desktop shell or a web
//! UI without changes.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns application state: collection snapshot, the staged  │
//! │    transition workflow, the lookup guard                    │
//! │  - Normalizes inputs (selectors → ids)                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business rules: shelf transitions, merges, view math     │
//! │  - Operates on Rust types, returns Result<CmdResult>        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract CatalogStore trait, whole-document JSON         │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Staged shelf transitions
//!
//! Moving a book to Finished or Dropped is a two-step workflow: the move
//! request yields a pre-filled capture form (sentiment, ratings, notes), and
//! nothing persists until that form is submitted. Moves to Reading or
//! Planned apply immediately. See [`commands::move_shelf`] and the state
//! machine in [`api`].
//!
//! ## Persistence contract
//!
//! Both documents (catalog and config) are whole-file JSON, rewritten on
//! every mutation. Corrupt documents recover as empty without being touched
//! on disk; I/O failures surface as errors while the in-memory snapshot
//! keeps the last known good state.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Book`, `Shelf`, `Sentiment`, `SortBy`)
//! - [`config`]: Configuration management
//! - [`lookup`]: Metadata enrichment client (Google Books)
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod lookup;
pub mod model;
pub mod store;
