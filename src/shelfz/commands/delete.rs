use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::CatalogStore;

use super::helpers::load_books;

/// Remove one record by id. Deleting an id that is not in the collection is
/// a no-op success.
pub fn run<S: CatalogStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    let before = load_books(store)?;
    let removed = before.iter().find(|b| b.id == id).cloned();

    store.remove_book(id)?;

    let mut result = CmdResult::default().with_books(load_books(store)?);
    match removed {
        Some(book) => {
            result.add_message(CmdMessage::success(format!("Deleted: {}", book.title)));
            result.affected.push(book);
        }
        None => result.add_message(CmdMessage::info(format!("No book with id {}", id))),
    }
    Ok(result)
}
