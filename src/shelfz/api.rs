//! # API Facade
//!
//! `CatalogApi` is the single entry point for all catalog operations and the
//! owner of application state: the in-memory collection snapshot, the staged
//! shelf-transition workflow, and the lookup-in-flight guard. All UI clients
//! drive the engine through this facade; it never touches stdout or stderr.
//!
//! ## State model
//!
//! - The collection snapshot is refreshed from every successful command
//!   result. When a store write fails, the snapshot keeps the last known
//!   good value; in-memory and durable state are only eventually consistent
//!   and the caller decides how loudly to warn.
//! - Staged transitions live in a two-state machine: `Idle` or
//!   `Pending(TransitionForm)`. Submit and cancel are the only ways out of
//!   `Pending`; starting another staged move while one is pending is an
//!   error.
//! - One metadata lookup may be in flight per form session; a second
//!   request is rejected while the flag is held.

use crate::commands::config::ConfigAction;
use crate::commands::move_shelf::{ShelfMove, TransitionForm};
use crate::commands::{self, BookDraft, CmdResult};
use crate::error::{Result, ShelfzError};
use crate::lookup::{LookupHit, MetadataSource};
use crate::model::{Book, Shelf, SortBy};
use crate::store::CatalogStore;

#[derive(Debug)]
enum Staging {
    Idle,
    Pending(TransitionForm),
}

/// Outcome of a shelf-move request through the facade.
#[derive(Debug)]
pub enum MoveOutcome {
    /// Applied and persisted immediately.
    Applied(CmdResult),
    /// Staged behind the rating/notes capture form, now pending on this
    /// facade until submitted or cancelled.
    Staged(TransitionForm),
}

pub struct CatalogApi<S: CatalogStore> {
    store: S,
    books: Vec<Book>,
    staging: Staging,
    lookup_in_flight: bool,
}

impl<S: CatalogStore> CatalogApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            books: Vec::new(),
            staging: Staging::Idle,
            lookup_in_flight: false,
        }
    }

    /// Load the collection snapshot from the store. Returns whether the
    /// stored document had to be recovered as empty.
    pub fn load(&mut self) -> Result<bool> {
        let loaded = self.store.load_books()?;
        self.books = loaded.books;
        Ok(loaded.recovered)
    }

    /// The current in-memory snapshot (last known good).
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Pure view over the snapshot for one shelf.
    pub fn view(&self, shelf: Shelf, query: &str, sort_by: SortBy) -> Vec<Book> {
        commands::view::compute(&self.books, shelf, query, sort_by)
    }

    pub fn shelf_counts(&self) -> Vec<(Shelf, usize)> {
        commands::view::shelf_counts(&self.books)
    }

    /// Resolve a user-facing selector (id or title fragment) against the
    /// snapshot.
    pub fn resolve(&self, selector: &str) -> Result<String> {
        commands::helpers::resolve_selector(&self.books, selector)
    }

    pub fn add(&mut self, draft: &BookDraft) -> Result<CmdResult> {
        let result = commands::add::run(&mut self.store, draft)?;
        self.refresh(&result);
        Ok(result)
    }

    pub fn edit(&mut self, id: &str, draft: &BookDraft) -> Result<CmdResult> {
        let result = commands::edit::run(&mut self.store, id, draft)?;
        self.refresh(&result);
        Ok(result)
    }

    pub fn bulk_add(&mut self, text: &str) -> Result<CmdResult> {
        let result = commands::bulk_add::run(&mut self.store, text)?;
        self.refresh(&result);
        Ok(result)
    }

    pub fn delete(&mut self, id: &str) -> Result<CmdResult> {
        let result = commands::delete::run(&mut self.store, id)?;
        self.refresh(&result);
        Ok(result)
    }

    pub fn set_progress(&mut self, id: &str, raw_page: &str) -> Result<CmdResult> {
        let result = commands::progress::run(&mut self.store, id, raw_page)?;
        self.refresh(&result);
        Ok(result)
    }

    /// Request a shelf move. Finished/Dropped targets stage a capture form
    /// on this facade instead of mutating anything.
    pub fn move_shelf(&mut self, id: &str, target: Shelf) -> Result<MoveOutcome> {
        if matches!(self.staging, Staging::Pending(_)) {
            return Err(ShelfzError::Api(
                "A shelf transition is already pending; submit or cancel it first".into(),
            ));
        }

        match commands::move_shelf::run(&mut self.store, id, target)? {
            ShelfMove::Applied(result) => {
                self.refresh(&result);
                Ok(MoveOutcome::Applied(result))
            }
            ShelfMove::Staged(form) => {
                self.staging = Staging::Pending(form.clone());
                Ok(MoveOutcome::Staged(form))
            }
        }
    }

    /// The staged transition form, if one is pending.
    pub fn pending(&self) -> Option<&TransitionForm> {
        match &self.staging {
            Staging::Pending(form) => Some(form),
            Staging::Idle => None,
        }
    }

    /// Commit the pending transition with the amended form draft. The draft
    /// carries the ratings/sentiment/notes captured since staging.
    pub fn submit_transition(&mut self, draft: BookDraft) -> Result<CmdResult> {
        let form = match std::mem::replace(&mut self.staging, Staging::Idle) {
            Staging::Pending(form) => form,
            Staging::Idle => {
                return Err(ShelfzError::Api("No shelf transition is pending".into()))
            }
        };

        let amended = TransitionForm { draft, ..form };
        match commands::move_shelf::commit(&mut self.store, &amended) {
            Ok(result) => {
                self.refresh(&result);
                Ok(result)
            }
            Err(e) => {
                // Keep the form so the user can retry or cancel explicitly.
                self.staging = Staging::Pending(amended);
                Err(e)
            }
        }
    }

    /// Abandon the pending transition; the record keeps its current shelf.
    pub fn cancel_transition(&mut self) -> Option<TransitionForm> {
        match std::mem::replace(&mut self.staging, Staging::Idle) {
            Staging::Pending(form) => Some(form),
            Staging::Idle => None,
        }
    }

    /// One enrichment lookup per form session. A second call while one is
    /// in flight is rejected; the flag clears when the lookup resolves
    /// either way.
    pub fn lookup(
        &mut self,
        source: &dyn MetadataSource,
        title: &str,
        author: &str,
    ) -> Result<Option<LookupHit>> {
        if self.lookup_in_flight {
            return Err(ShelfzError::Api("A lookup is already in progress".into()));
        }
        self.lookup_in_flight = true;
        let outcome = source.lookup(title, author);
        self.lookup_in_flight = false;
        outcome
    }

    pub fn config(&mut self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&mut self.store, action)
    }

    pub fn load_config(&self) -> Result<crate::config::AppConfig> {
        self.store.load_config()
    }

    fn refresh(&mut self, result: &CmdResult) {
        self.books.clone_from(&result.books);
    }
}
