use crate::config::AppConfig;
use crate::model::{Book, Sentiment, Shelf};

pub mod add;
pub mod bulk_add;
pub mod config;
pub mod delete;
pub mod edit;
pub mod enrich;
pub mod helpers;
pub mod move_shelf;
pub mod progress;
pub mod view;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Outcome of an engine command. `books` is the full next-state collection
/// after the command; callers use it to refresh their in-memory snapshot.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub books: Vec<Book>,
    pub affected: Vec<Book>,
    pub listed: Vec<Book>,
    pub config: Option<AppConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_books(mut self, books: Vec<Book>) -> Self {
        self.books = books;
        self
    }

    pub fn with_affected(mut self, books: Vec<Book>) -> Self {
        self.affected = books;
        self
    }

    pub fn with_listed(mut self, books: Vec<Book>) -> Self {
        self.listed = books;
        self
    }

    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// A complete replacement payload for one record: everything but the id.
/// Edits overwrite every field from the draft; there is no partial patch.
#[derive(Debug, Clone, PartialEq)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    /// Target shelf; None keeps the record's current shelf (Planned for a
    /// brand-new record).
    pub status: Option<Shelf>,
    pub sentiment: Option<Sentiment>,
    pub enjoyment: f32,
    pub emotional_impact: f32,
    pub effort: f32,
    pub reread_potential: f32,
    pub notes: String,
    pub current_page: u32,
    pub total_pages: u32,
    pub cover_url: String,
    pub series: String,
    pub series_order: u32,
}

impl Default for BookDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            author: String::new(),
            status: None,
            sentiment: None,
            enjoyment: 0.0,
            emotional_impact: 0.0,
            effort: 0.0,
            reread_potential: 0.0,
            notes: String::new(),
            current_page: 0,
            total_pages: 0,
            cover_url: String::new(),
            series: String::new(),
            series_order: 1,
        }
    }
}

impl BookDraft {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Pre-populate a draft from an existing record, e.g. for an edit form
    /// or a staged shelf transition.
    pub fn from_book(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            status: Some(book.status),
            sentiment: book.sentiment,
            enjoyment: book.enjoyment,
            emotional_impact: book.emotional_impact,
            effort: book.effort,
            reread_potential: book.reread_potential,
            notes: book.notes.clone(),
            current_page: book.current_page,
            total_pages: book.total_pages,
            cover_url: book.cover_url.clone(),
            series: book.series.clone(),
            series_order: book.series_order,
        }
    }

    /// Shallow full-field overwrite onto an existing record. The id is the
    /// only thing that survives from the target.
    pub fn apply_to(&self, book: &mut Book) {
        book.title = self.title.clone();
        book.author = self.author.clone();
        book.status = self.status.unwrap_or(book.status);
        book.sentiment = self.sentiment;
        book.enjoyment = self.enjoyment;
        book.emotional_impact = self.emotional_impact;
        book.effort = self.effort;
        book.reread_potential = self.reread_potential;
        book.notes = self.notes.clone();
        book.current_page = self.current_page;
        book.total_pages = self.total_pages;
        book.cover_url = self.cover_url.clone();
        book.series = self.series.clone();
        book.series_order = self.series_order;
    }
}
