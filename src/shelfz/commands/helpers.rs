use crate::error::{Result, ShelfzError};
use crate::model::Book;
use crate::store::CatalogStore;

pub fn load_books<S: CatalogStore>(store: &S) -> Result<Vec<Book>> {
    Ok(store.load_books()?.books)
}

pub fn find_book<'a>(books: &'a [Book], id: &str) -> Result<&'a Book> {
    books
        .iter()
        .find(|b| b.id == id)
        .ok_or_else(|| ShelfzError::BookNotFound(id.to_string()))
}

/// Resolve a user-supplied selector to a record id: an exact id match wins,
/// otherwise a case-insensitive title substring that matches exactly one
/// record. Ambiguity is an error naming the candidates.
pub fn resolve_selector(books: &[Book], selector: &str) -> Result<String> {
    if let Some(book) = books.iter().find(|b| b.id == selector) {
        return Ok(book.id.clone());
    }

    let needle = selector.to_lowercase();
    let matches: Vec<&Book> = books
        .iter()
        .filter(|b| b.title.to_lowercase().contains(&needle))
        .collect();

    match matches.as_slice() {
        [] => Err(ShelfzError::Api(format!(
            "No book matches '{}'",
            selector
        ))),
        [single] => Ok(single.id.clone()),
        many => {
            let titles: Vec<&str> = many.iter().map(|b| b.title.as_str()).collect();
            Err(ShelfzError::Api(format!(
                "'{}' is ambiguous: {}",
                selector,
                titles.join(", ")
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_exact_id_first() {
        let mut a = Book::new("Dune".to_string());
        a.id = "100".to_string();
        let mut b = Book::new("100 Years of Solitude".to_string());
        b.id = "200".to_string();

        let id = resolve_selector(&[a, b], "100").unwrap();
        assert_eq!(id, "100");
    }

    #[test]
    fn resolves_unique_title_substring() {
        let books = vec![Book::new("Dune".to_string()), Book::new("Hyperion".to_string())];
        let id = resolve_selector(&books, "hype").unwrap();
        assert_eq!(id, books[1].id);
    }

    #[test]
    fn ambiguous_selector_names_candidates() {
        let books = vec![
            Book::new("Dune".to_string()),
            Book::new("Dune Messiah".to_string()),
        ];
        let err = resolve_selector(&books, "dune").unwrap_err();
        assert!(err.to_string().contains("Dune Messiah"));
    }

    #[test]
    fn unknown_selector_errors() {
        let books = vec![Book::new("Dune".to_string())];
        assert!(resolve_selector(&books, "zardoz").is_err());
    }
}
