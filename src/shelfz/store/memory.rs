use super::{CatalogStore, LoadedCatalog};
use crate::config::AppConfig;
use crate::error::Result;
use crate::model::Book;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    books: Vec<Book>,
    config: AppConfig,
    /// Simulates an unparseable document for the next load.
    corrupt_once: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The next `load_books` call reports a recovered-as-empty catalog, as a
    /// corrupt on-disk document would. The first write clears it.
    pub fn poison(&mut self) {
        self.corrupt_once = true;
    }
}

impl CatalogStore for InMemoryStore {
    fn load_books(&self) -> Result<LoadedCatalog> {
        if self.corrupt_once {
            return Ok(LoadedCatalog {
                books: Vec::new(),
                recovered: true,
            });
        }
        Ok(LoadedCatalog {
            books: self.books.clone(),
            recovered: false,
        })
    }

    fn append_book(&mut self, book: &Book) -> Result<()> {
        let mut books = self.load_books()?.books;
        books.push(book.clone());
        self.replace_all(&books)
    }

    fn replace_all(&mut self, books: &[Book]) -> Result<()> {
        self.corrupt_once = false;
        self.books = books.to_vec();
        Ok(())
    }

    fn remove_book(&mut self, id: &str) -> Result<()> {
        self.corrupt_once = false;
        self.books.retain(|b| b.id != id);
        Ok(())
    }

    fn load_config(&self) -> Result<AppConfig> {
        Ok(self.config.clone())
    }

    fn save_config(&mut self, config: &AppConfig) -> Result<()> {
        self.config = config.clone();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Sentiment, Shelf};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_book(mut self, title: &str, shelf: Shelf) -> Self {
            let mut book = Book::new(title.to_string());
            book.status = shelf;
            self.store.append_book(&book).unwrap();
            self
        }

        pub fn with_reading_book(mut self, title: &str, current: u32, total: u32) -> Self {
            let mut book = Book::new(title.to_string());
            book.status = Shelf::Reading;
            book.current_page = current;
            book.total_pages = total;
            self.store.append_book(&book).unwrap();
            self
        }

        pub fn with_finished_book(mut self, title: &str, sentiment: Sentiment) -> Self {
            let mut book = Book::new(title.to_string());
            book.status = Shelf::Finished;
            book.sentiment = Some(sentiment);
            self.store.append_book(&book).unwrap();
            self
        }
    }
}
