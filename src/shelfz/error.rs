use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShelfzError {
    #[error("Book not found: {0}")]
    BookNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Lookup error: {0}")]
    Lookup(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, ShelfzError>;
