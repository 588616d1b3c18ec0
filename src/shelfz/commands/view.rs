use crate::model::{Book, Shelf, SortBy};
use std::cmp::Ordering;

/// Pure view computation: filter to one shelf, match the query against
/// title or author case-insensitively (empty query matches everything),
/// then sort per the preference. Recomputed on every render, never
/// persisted.
pub fn compute(books: &[Book], shelf: Shelf, query: &str, sort_by: SortBy) -> Vec<Book> {
    let needle = query.to_lowercase();

    let mut view: Vec<Book> = books
        .iter()
        .filter(|b| b.status == shelf)
        .filter(|b| {
            needle.is_empty()
                || b.title.to_lowercase().contains(&needle)
                || b.author.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect();

    view.sort_by(|a, b| match sort_by {
        SortBy::Newest => b.created_key().total_cmp(&a.created_key()),
        SortBy::Title => cmp_text(&a.title, &b.title),
        SortBy::Author => cmp_text(&a.author, &b.author),
        SortBy::Progress => progress_ratio(b).total_cmp(&progress_ratio(a)),
        SortBy::Series => match cmp_text(&a.series, &b.series) {
            Ordering::Equal => a.series_order.cmp(&b.series_order),
            ord => ord,
        },
    });

    view
}

/// Per-shelf record counts, in shelf display order.
pub fn shelf_counts(books: &[Book]) -> Vec<(Shelf, usize)> {
    Shelf::ALL
        .iter()
        .map(|&shelf| (shelf, books.iter().filter(|b| b.status == shelf).count()))
        .collect()
}

// Case-insensitive lexicographic ordering, with the original strings as a
// tiebreak so the result is deterministic.
fn cmp_text(a: &str, b: &str) -> Ordering {
    match a.to_lowercase().cmp(&b.to_lowercase()) {
        Ordering::Equal => a.cmp(b),
        ord => ord,
    }
}

fn progress_ratio(book: &Book) -> f64 {
    book.progress().unwrap_or(0.0)
}
