use crate::commands::{BookDraft, CmdMessage, CmdResult};
use crate::error::{Result, ShelfzError};
use crate::model::{Book, Shelf};
use crate::store::CatalogStore;

use super::helpers::load_books;

/// Create a new record from the draft and persist it via the single-record
/// append path. Edits of existing records never come through here.
pub fn run<S: CatalogStore>(store: &mut S, draft: &BookDraft) -> Result<CmdResult> {
    if draft.title.trim().is_empty() {
        return Err(ShelfzError::Api("Title cannot be empty".into()));
    }

    let mut book = Book::new(draft.title.clone());
    draft.apply_to(&mut book);
    if draft.status.is_none() {
        book.status = Shelf::Planned;
    }

    store.append_book(&book)?;

    let mut result = CmdResult::default().with_books(load_books(store)?);
    result.add_message(CmdMessage::success(format!("Added: {}", book.title)));
    result.affected.push(book);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Sentiment;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn defaults_to_planned_with_zeroed_fields() {
        let mut store = InMemoryStore::new();
        let draft = BookDraft {
            title: "Dune".to_string(),
            author: String::new(),
            ..BookDraft::default()
        };
        let result = run(&mut store, &draft).unwrap();

        let book = &result.affected[0];
        assert_eq!(book.status, Shelf::Planned);
        assert!(!book.id.is_empty());
        assert_eq!(book.enjoyment, 0.0);
        assert_eq!(book.emotional_impact, 0.0);
        assert_eq!(book.effort, 0.0);
        assert_eq!(book.reread_potential, 0.0);
        assert_eq!(book.total_pages, 0);
        assert_eq!(result.books.len(), 1);
    }

    #[test]
    fn explicit_shelf_is_respected() {
        let mut store = InMemoryStore::new();
        let draft = BookDraft {
            status: Some(Shelf::Reading),
            ..BookDraft::titled("Hyperion")
        };
        let result = run(&mut store, &draft).unwrap();
        assert_eq!(result.affected[0].status, Shelf::Reading);
    }

    #[test]
    fn empty_title_is_rejected() {
        let mut store = InMemoryStore::new();
        assert!(run(&mut store, &BookDraft::titled("   ")).is_err());
        assert!(store.load_books().unwrap().books.is_empty());
    }

    #[test]
    fn sentiment_and_ratings_carry_through() {
        let mut store = InMemoryStore::new();
        let draft = BookDraft {
            status: Some(Shelf::Finished),
            sentiment: Some(Sentiment::Loved),
            enjoyment: 4.5,
            ..BookDraft::titled("Piranesi")
        };
        let result = run(&mut store, &draft).unwrap();
        assert_eq!(result.affected[0].sentiment, Some(Sentiment::Loved));
        assert_eq!(result.affected[0].enjoyment, 4.5);
    }
}
