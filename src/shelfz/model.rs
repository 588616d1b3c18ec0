use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// The four life-cycle shelves a book can sit on. A book is on exactly one
/// shelf at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Shelf {
    Planned,
    Reading,
    Finished,
    Dropped,
}

impl Shelf {
    pub const ALL: [Shelf; 4] = [Shelf::Reading, Shelf::Planned, Shelf::Finished, Shelf::Dropped];

    pub fn as_str(&self) -> &'static str {
        match self {
            Shelf::Planned => "Planned",
            Shelf::Reading => "Reading",
            Shelf::Finished => "Finished",
            Shelf::Dropped => "Dropped",
        }
    }

    /// Shelves whose entry requires the rating/notes capture step.
    pub fn requires_capture(&self) -> bool {
        matches!(self, Shelf::Finished | Shelf::Dropped)
    }
}

impl Default for Shelf {
    fn default() -> Self {
        Shelf::Planned
    }
}

impl fmt::Display for Shelf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Shelf {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "planned" => Ok(Shelf::Planned),
            "reading" => Ok(Shelf::Reading),
            "finished" => Ok(Shelf::Finished),
            "dropped" => Ok(Shelf::Dropped),
            other => Err(format!("unknown shelf: {}", other)),
        }
    }
}

// Stored documents may predate the current shelf set; an unrecognized value
// falls back to Planned instead of failing the whole load.
impl<'de> Deserialize<'de> for Shelf {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(raw.parse().unwrap_or_default())
    }
}

/// Overall verdict on a finished or dropped book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentiment {
    Loved,
    Liked,
    Meh,
    NotForMe,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Loved => "Loved",
            Sentiment::Liked => "Liked",
            Sentiment::Meh => "Meh",
            Sentiment::NotForMe => "Not for me",
        }
    }

    /// Parse the stored representation. Empty or unrecognized input means
    /// "no sentiment recorded".
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "loved" => Some(Sentiment::Loved),
            "liked" => Some(Sentiment::Liked),
            "meh" => Some(Sentiment::Meh),
            "not for me" => Some(Sentiment::NotForMe),
            _ => None,
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// On disk an absent sentiment is the empty string, matching the catalog
/// document format. Serde round-trips through that representation.
pub(crate) mod sentiment_repr {
    use super::Sentiment;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<Sentiment>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(value.map(|s| s.as_str()).unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Sentiment>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Sentiment::parse(&raw))
    }
}

/// Persisted sort preference for shelf views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SortBy {
    Newest,
    Title,
    Author,
    Progress,
    Series,
}

impl Default for SortBy {
    fn default() -> Self {
        SortBy::Newest
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortBy::Newest => "Newest",
            SortBy::Title => "Title",
            SortBy::Author => "Author",
            SortBy::Progress => "Progress",
            SortBy::Series => "Series",
        };
        f.write_str(s)
    }
}

impl FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "newest" => Ok(SortBy::Newest),
            "title" => Ok(SortBy::Title),
            "author" => Ok(SortBy::Author),
            "progress" => Ok(SortBy::Progress),
            "series" => Ok(SortBy::Series),
            other => Err(format!("unknown sort key: {}", other)),
        }
    }
}

impl<'de> Deserialize<'de> for SortBy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(raw.parse().unwrap_or_default())
    }
}

/// A single catalog entry. Field names mirror the on-disk camelCase document
/// so existing catalogs load unchanged; every field defaults when missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub status: Shelf,
    #[serde(with = "sentiment_repr")]
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

impl Default for Book {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            author: String::new(),
            status: Shelf::Planned,
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

impl Book {
    pub fn new(title: String) -> Self {
        Self {
            id: generate_id(),
            title,
            ..Self::default()
        }
    }

    /// Fraction read, or None when the page count is unknown.
    pub fn progress(&self) -> Option<f64> {
        if self.total_pages > 0 {
            Some(f64::from(self.current_page) / f64::from(self.total_pages))
        } else {
            None
        }
    }

    /// Whether the current page has reached the end of a known page count.
    /// Finishing still goes through the staged transition; this only drives
    /// presentation hints.
    pub fn finishable(&self) -> bool {
        self.total_pages > 0 && self.current_page >= self.total_pages
    }

    /// Numeric value of the id for "Newest" ordering. Ids double as creation
    /// timestamps; anything unparseable sorts oldest.
    pub fn created_key(&self) -> f64 {
        self.id.parse().unwrap_or(0.0)
    }
}

/// Time-based id with a random suffix so ids minted in the same millisecond
/// stay distinct. The whole string parses as a number, which "Newest" sorting
/// relies on.
pub fn generate_id() -> String {
    let millis = Utc::now().timestamp_millis();
    let salt = Uuid::new_v4().as_u128() % 1_000_000;
    format!("{}.{:06}", millis, salt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_book_defaults_to_planned() {
        let book = Book::new("Dune".to_string());
        assert_eq!(book.status, Shelf::Planned);
        assert_eq!(book.current_page, 0);
        assert_eq!(book.total_pages, 0);
        assert_eq!(book.enjoyment, 0.0);
        assert_eq!(book.series_order, 1);
        assert!(!book.id.is_empty());
    }

    #[test]
    fn generated_ids_are_numeric_and_distinct() {
        let a = generate_id();
        let b = generate_id();
        assert_ne!(a, b);
        assert!(a.parse::<f64>().unwrap() > 0.0);
    }

    #[test]
    fn progress_is_undefined_without_page_count() {
        let mut book = Book::new("X".to_string());
        assert_eq!(book.progress(), None);
        book.total_pages = 200;
        book.current_page = 50;
        assert_eq!(book.progress(), Some(0.25));
    }

    #[test]
    fn finishable_requires_known_page_count() {
        let mut book = Book::new("X".to_string());
        book.current_page = 10;
        assert!(!book.finishable());
        book.total_pages = 10;
        assert!(book.finishable());
    }

    #[test]
    fn missing_fields_default_on_load() {
        let book: Book = serde_json::from_str(r#"{"id":"1700000000000","title":"Old"}"#).unwrap();
        assert_eq!(book.status, Shelf::Planned);
        assert_eq!(book.sentiment, None);
        assert_eq!(book.series_order, 1);
    }

    #[test]
    fn unknown_status_falls_back_to_planned() {
        let book: Book =
            serde_json::from_str(r#"{"id":"1","title":"T","status":"Archived"}"#).unwrap();
        assert_eq!(book.status, Shelf::Planned);
    }

    #[test]
    fn sentiment_round_trips_through_empty_string() {
        let mut book = Book::new("T".to_string());
        let json = serde_json::to_string(&book).unwrap();
        assert!(json.contains(r#""sentiment":"""#));

        book.sentiment = Some(Sentiment::NotForMe);
        let json = serde_json::to_string(&book).unwrap();
        assert!(json.contains(r#""sentiment":"Not for me""#));
        let back: Book = serde_json::from_str(&json).unwrap();
        assert_eq!(back.sentiment, Some(Sentiment::NotForMe));
    }

    #[test]
    fn camel_case_field_names_on_disk() {
        let book = Book::new("T".to_string());
        let json = serde_json::to_string(&book).unwrap();
        assert!(json.contains("currentPage"));
        assert!(json.contains("totalPages"));
        assert!(json.contains("coverUrl"));
        assert!(json.contains("seriesOrder"));
        assert!(json.contains("emotionalImpact"));
        assert!(json.contains("rereadPotential"));
    }
}
