use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShelfzError};
use crate::store::CatalogStore;

use super::helpers::load_books;

/// Set the current page from raw user input and persist the collection.
/// Unparsable or negative input becomes 0 rather than blocking the save.
/// Reaching the last page never changes the shelf; finishing goes through
/// the staged transition.
pub fn run<S: CatalogStore>(store: &mut S, id: &str, raw_page: &str) -> Result<CmdResult> {
    let page = parse_page(raw_page);

    let mut books = load_books(store)?;
    let book = books
        .iter_mut()
        .find(|b| b.id == id)
        .ok_or_else(|| ShelfzError::BookNotFound(id.to_string()))?;
    book.current_page = page;
    let updated = book.clone();

    store.replace_all(&books)?;

    let mut result = CmdResult::default().with_books(books);
    let detail = if updated.total_pages > 0 {
        format!("{}: page {} / {}", updated.title, page, updated.total_pages)
    } else {
        format!("{}: page {}", updated.title, page)
    };
    result.add_message(CmdMessage::success(detail));
    if updated.finishable() {
        result.add_message(CmdMessage::info(format!(
            "{} looks finished; move it when you're ready to rate it",
            updated.title
        )));
    }
    result.affected.push(updated);
    Ok(result)
}

fn parse_page(raw: &str) -> u32 {
    raw.trim()
        .parse::<i64>()
        .map(|n| n.clamp(0, i64::from(u32::MAX)) as u32)
        .unwrap_or(0)
}
