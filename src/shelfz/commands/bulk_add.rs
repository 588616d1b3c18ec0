use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{generate_id, Book};
use crate::store::CatalogStore;

use super::helpers::load_books;

/// Create one Planned record per non-empty trimmed line and persist the
/// whole resulting collection in a single write.
pub fn run<S: CatalogStore>(store: &mut S, text: &str) -> Result<CmdResult> {
    let mut books = load_books(store)?;
    let mut added = Vec::new();

    for line in text.lines() {
        let title = line.trim();
        if title.is_empty() {
            continue;
        }

        let mut book = Book::new(title.to_string());
        // Ids are time-based; a batch can easily land inside one
        // millisecond, so regenerate until unique within collection + batch.
        while books.iter().chain(added.iter()).any(|b: &Book| b.id == book.id) {
            book.id = generate_id();
        }
        added.push(book);
    }

    if added.is_empty() {
        let mut result = CmdResult::default().with_books(books);
        result.add_message(CmdMessage::info("Nothing to add"));
        return Ok(result);
    }

    books.extend(added.iter().cloned());
    store.replace_all(&books)?;

    let mut result = CmdResult::default().with_books(books).with_affected(added);
    result.add_message(CmdMessage::success(format!(
        "Added {} book(s) to Planned",
        result.affected.len()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Shelf;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use std::collections::HashSet;

    #[test]
    fn one_planned_record_per_nonempty_line() {
        let mut store = InMemoryStore::new();
        let result = run(
            &mut store,
            "A Study in Scarlet\n\n  The Sign of Four  \n\t\nThe Valley of Fear",
        )
        .unwrap();

        assert_eq!(result.affected.len(), 3);
        assert!(result.affected.iter().all(|b| b.status == Shelf::Planned));
        assert_eq!(result.affected[1].title, "The Sign of Four");
    }

    #[test]
    fn ids_stay_distinct_across_back_to_back_batches() {
        // Two batches in (almost certainly) the same millisecond.
        let mut store = InMemoryStore::new();
        run(&mut store, "One\nTwo\nThree").unwrap();
        run(&mut store, "Four\nFive\nSix").unwrap();

        let books = store.load_books().unwrap().books;
        assert_eq!(books.len(), 6);
        let ids: HashSet<&str> = books.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn existing_entries_are_untouched() {
        let mut fixture = StoreFixture::new().with_reading_book("Dune", 10, 412);
        run(&mut fixture.store, "Hyperion\nIlium").unwrap();

        let books = fixture.store.load_books().unwrap().books;
        assert_eq!(books.len(), 3);
        assert_eq!(books[0].title, "Dune");
        assert_eq!(books[0].status, Shelf::Reading);
        assert_eq!(books[0].current_page, 10);
    }

    #[test]
    fn blank_input_is_a_noop() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, "  \n\n\t").unwrap();
        assert!(result.affected.is_empty());
        assert!(store.load_books().unwrap().books.is_empty());
    }
}
