use crate::commands::{BookDraft, CmdMessage, CmdResult};
use crate::error::{Result, ShelfzError};
use crate::store::CatalogStore;

use super::helpers::load_books;

/// Merge a complete replacement payload into the record with the given id
/// and persist the whole collection. This is the commit path for edit forms
/// and for staged shelf transitions.
pub fn run<S: CatalogStore>(store: &mut S, id: &str, draft: &BookDraft) -> Result<CmdResult> {
    if draft.title.trim().is_empty() {
        return Err(ShelfzError::Api("Title cannot be empty".into()));
    }

    let mut books = load_books(store)?;
    let book = books
        .iter_mut()
        .find(|b| b.id == id)
        .ok_or_else(|| ShelfzError::BookNotFound(id.to_string()))?;

    draft.apply_to(book);
    let updated = book.clone();

    store.replace_all(&books)?;

    let mut result = CmdResult::default().with_books(books);
    result.add_message(CmdMessage::success(format!("Updated: {}", updated.title)));
    result.affected.push(updated);
    Ok(result)
}
