use super::{CatalogStore, LoadedCatalog};
use crate::config::AppConfig;
use crate::error::{Result, ShelfzError};
use crate::model::Book;
use std::fs;
use std::path::{Path, PathBuf};

const BOOKS_FILENAME: &str = "books.json";

pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn books_path(&self) -> PathBuf {
        self.data_dir.join(BOOKS_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.data_dir.exists() {
            fs::create_dir_all(&self.data_dir).map_err(ShelfzError::Io)?;
        }
        Ok(())
    }

    fn write_books(&self, books: &[Book]) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(books).map_err(ShelfzError::Serialization)?;
        fs::write(self.books_path(), content).map_err(ShelfzError::Io)?;
        Ok(())
    }
}

impl CatalogStore for FileStore {
    fn load_books(&self) -> Result<LoadedCatalog> {
        let path = self.books_path();
        if !path.exists() {
            return Ok(LoadedCatalog::default());
        }

        let content = fs::read_to_string(&path).map_err(ShelfzError::Io)?;

        // The document is parsed loosely: anything that is not a JSON array
        // of records is treated as an empty collection. The corrupt file is
        // deliberately left on disk; only the next write replaces it.
        match serde_json::from_str::<Vec<Book>>(&content) {
            Ok(books) => Ok(LoadedCatalog {
                books,
                recovered: false,
            }),
            Err(_) => Ok(LoadedCatalog {
                books: Vec::new(),
                recovered: true,
            }),
        }
    }

    fn append_book(&mut self, book: &Book) -> Result<()> {
        let mut books = self.load_books()?.books;
        books.push(book.clone());
        self.write_books(&books)
    }

    fn replace_all(&mut self, books: &[Book]) -> Result<()> {
        self.write_books(books)
    }

    fn remove_book(&mut self, id: &str) -> Result<()> {
        let mut books = self.load_books()?.books;
        books.retain(|b| b.id != id);
        self.write_books(&books)
    }

    fn load_config(&self) -> Result<AppConfig> {
        AppConfig::load(&self.data_dir)
    }

    fn save_config(&mut self, config: &AppConfig) -> Result<()> {
        config.save(&self.data_dir)
    }
}
