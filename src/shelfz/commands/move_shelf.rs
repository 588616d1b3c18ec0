use crate::commands::{BookDraft, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Shelf;
use crate::store::CatalogStore;

use super::helpers::{find_book, load_books};

/// A staged shelf transition: the target shelf wants a rating/notes capture
/// step before committing. Nothing is persisted until the form is submitted
/// through [`commit`]; cancelling is simply dropping the form.
#[derive(Debug, Clone)]
pub struct TransitionForm {
    pub id: String,
    /// Pre-populated with the record's current fields and the proposed
    /// status; the caller fills in sentiment, ratings and notes.
    pub draft: BookDraft,
    pub proposed: Shelf,
}

#[derive(Debug)]
pub enum ShelfMove {
    /// The transition was applied and persisted immediately.
    Applied(CmdResult),
    /// The transition needs the capture step first.
    Staged(TransitionForm),
}

/// Move a record to a target shelf. Reading and Planned (including the
/// re-read case from Finished) apply immediately; Finished and Dropped are
/// staged behind the capture form.
pub fn run<S: CatalogStore>(store: &mut S, id: &str, target: Shelf) -> Result<ShelfMove> {
    let mut books = load_books(store)?;

    if target.requires_capture() {
        let book = find_book(&books, id)?;
        let mut draft = BookDraft::from_book(book);
        draft.status = Some(target);
        return Ok(ShelfMove::Staged(TransitionForm {
            id: book.id.clone(),
            draft,
            proposed: target,
        }));
    }

    let book = books
        .iter_mut()
        .find(|b| b.id == id)
        .ok_or_else(|| crate::error::ShelfzError::BookNotFound(id.to_string()))?;
    book.status = target;
    let moved = book.clone();

    store.replace_all(&books)?;

    let mut result = CmdResult::default().with_books(books);
    result.add_message(CmdMessage::success(format!(
        "Moved to {}: {}",
        target, moved.title
    )));
    result.affected.push(moved);
    Ok(ShelfMove::Applied(result))
}

/// Commit a staged transition with the (possibly caller-amended) form.
pub fn commit<S: CatalogStore>(store: &mut S, form: &TransitionForm) -> Result<CmdResult> {
    super::edit::run(store, &form.id, &form.draft)
}
