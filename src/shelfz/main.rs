use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use shelfz::api::{CatalogApi, MoveOutcome};
use shelfz::commands::config::ConfigAction;
use shelfz::commands::{enrich, BookDraft, CmdMessage, MessageLevel};
use shelfz::config::AppConfig;
use shelfz::error::{Result, ShelfzError};
use shelfz::lookup::GoogleBooksClient;
use shelfz::model::{Book, Sentiment, Shelf, SortBy};
use shelfz::store::fs::FileStore;
use shelfz::store::CatalogStore;
use std::io::Read;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: CatalogApi<FileStore>,
    config: AppConfig,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Add {
            title,
            author,
            shelf,
            pages,
            page,
            series,
            vol,
            notes,
            cover,
            lookup,
        }) => handle_add(
            &mut ctx, title, author, shelf, pages, page, series, vol, notes, cover, lookup,
        ),
        Some(Commands::List {
            shelf,
            search,
            sort,
            counts,
        }) => handle_list(&ctx, shelf, search, sort, counts),
        Some(Commands::Edit {
            selector,
            title,
            author,
            pages,
            page,
            series,
            vol,
            notes,
            cover,
        }) => handle_edit(
            &mut ctx, selector, title, author, pages, page, series, vol, notes, cover,
        ),
        Some(Commands::Move {
            selector,
            shelf,
            sentiment,
            enjoyment,
            impact,
            effort,
            reread,
            notes,
        }) => handle_move(
            &mut ctx, selector, shelf, sentiment, enjoyment, impact, effort, reread, notes,
        ),
        Some(Commands::Progress { selector, page }) => handle_progress(&mut ctx, selector, page),
        Some(Commands::Delete { selector }) => handle_delete(&mut ctx, selector),
        Some(Commands::BulkAdd { file }) => handle_bulk_add(&mut ctx, file),
        Some(Commands::Enrich { selector }) => handle_enrich(&mut ctx, selector),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_list(&ctx, None, None, None, false),
    }
}

fn init_context() -> Result<AppContext> {
    // SHELFZ_HOME overrides the platform data directory (used by tests).
    let data_dir = match std::env::var_os("SHELFZ_HOME") {
        Some(dir) => PathBuf::from(dir),
        None => ProjectDirs::from("com", "shelfz", "shelfz")
            .ok_or_else(|| ShelfzError::Store("Could not determine data directory".into()))?
            .data_dir()
            .to_path_buf(),
    };

    let store = FileStore::new(data_dir);
    let config = store.load_config()?;
    let mut api = CatalogApi::new(store);

    if api.load()? {
        println!(
            "{}",
            "Catalog file could not be parsed; starting from an empty shelf. \
             The file is untouched until the next save."
                .yellow()
        );
    }

    Ok(AppContext { api, config })
}

fn parse_shelf(raw: &str) -> Result<Shelf> {
    raw.parse().map_err(ShelfzError::Api)
}

fn parse_sort(raw: &str) -> Result<SortBy> {
    raw.parse().map_err(ShelfzError::Api)
}

#[allow(clippy::too_many_arguments)]
fn handle_add(
    ctx: &mut AppContext,
    title: String,
    author: Option<String>,
    shelf: Option<String>,
    pages: Option<u32>,
    page: Option<u32>,
    series: Option<String>,
    vol: Option<u32>,
    notes: Option<String>,
    cover: Option<String>,
    lookup: bool,
) -> Result<()> {
    let status = shelf.as_deref().map(parse_shelf).transpose()?;
    let mut draft = BookDraft {
        title,
        author: author.unwrap_or_default(),
        status,
        notes: notes.unwrap_or_default(),
        current_page: page.unwrap_or(0),
        total_pages: pages.unwrap_or(0),
        cover_url: cover.unwrap_or_default(),
        series: series.unwrap_or_default(),
        series_order: vol.unwrap_or(1),
        ..BookDraft::default()
    };

    if lookup {
        run_lookup(ctx, &mut draft);
    }

    let result = ctx.api.add(&draft)?;
    print_messages(&result.messages);
    Ok(())
}

/// Best-effort enrichment of a draft. Misses and failures never block the
/// save; they only print a note.
fn run_lookup(ctx: &mut AppContext, draft: &mut BookDraft) {
    let client = GoogleBooksClient::new(ctx.config.api_key.clone());
    let title = draft.title.clone();
    let author = draft.author.clone();
    match ctx.api.lookup(&client, &title, &author) {
        Ok(Some(hit)) => enrich::apply_hit(draft, &hit),
        Ok(None) => println!("{}", "No metadata found; saving as entered.".dimmed()),
        Err(e) => println!("{}", format!("Metadata lookup failed: {}", e).yellow()),
    }
}

fn handle_list(
    ctx: &AppContext,
    shelf: Option<String>,
    search: Option<String>,
    sort: Option<String>,
    counts: bool,
) -> Result<()> {
    if counts {
        for (shelf, count) in ctx.api.shelf_counts() {
            println!("{:>9}  {}", shelf.to_string(), count);
        }
        return Ok(());
    }

    let shelf = match shelf {
        Some(raw) => parse_shelf(&raw)?,
        None => Shelf::Reading,
    };
    let sort_by = match sort {
        Some(raw) => parse_sort(&raw)?,
        None => ctx.config.sort_by,
    };
    let query = search.unwrap_or_default();

    let view = ctx.api.view(shelf, &query, sort_by);
    print_books(shelf, &view);
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn handle_edit(
    ctx: &mut AppContext,
    selector: String,
    title: Option<String>,
    author: Option<String>,
    pages: Option<u32>,
    page: Option<u32>,
    series: Option<String>,
    vol: Option<u32>,
    notes: Option<String>,
    cover: Option<String>,
) -> Result<()> {
    let id = ctx.api.resolve(&selector)?;
    let book = ctx
        .api
        .books()
        .iter()
        .find(|b| b.id == id)
        .cloned()
        .ok_or_else(|| ShelfzError::BookNotFound(id.clone()))?;

    // The engine takes a complete replacement payload; flags the user left
    // out keep the record's current values.
    let mut draft = BookDraft::from_book(&book);
    if let Some(v) = title {
        draft.title = v;
    }
    if let Some(v) = author {
        draft.author = v;
    }
    if let Some(v) = pages {
        draft.total_pages = v;
    }
    if let Some(v) = page {
        draft.current_page = v;
    }
    if let Some(v) = series {
        draft.series = v;
    }
    if let Some(v) = vol {
        draft.series_order = v;
    }
    if let Some(v) = notes {
        draft.notes = v;
    }
    if let Some(v) = cover {
        draft.cover_url = v;
    }

    let result = ctx.api.edit(&id, &draft)?;
    print_messages(&result.messages);
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn handle_move(
    ctx: &mut AppContext,
    selector: String,
    shelf: String,
    sentiment: Option<String>,
    enjoyment: Option<f32>,
    impact: Option<f32>,
    effort: Option<f32>,
    reread: Option<f32>,
    notes: Option<String>,
) -> Result<()> {
    let id = ctx.api.resolve(&selector)?;
    let target = parse_shelf(&shelf)?;

    match ctx.api.move_shelf(&id, target)? {
        MoveOutcome::Applied(result) => {
            print_messages(&result.messages);
        }
        MoveOutcome::Staged(form) => {
            // The rating flags are this UI's capture form; submitting
            // commits the staged transition.
            let mut draft = form.draft.clone();
            if let Some(raw) = sentiment {
                draft.sentiment = Sentiment::parse(&raw);
            }
            if let Some(v) = enjoyment {
                draft.enjoyment = v;
            }
            if let Some(v) = impact {
                draft.emotional_impact = v;
            }
            if let Some(v) = effort {
                draft.effort = v;
            }
            if let Some(v) = reread {
                draft.reread_potential = v;
            }
            if let Some(v) = notes {
                draft.notes = v;
            }

            let result = ctx.api.submit_transition(draft)?;
            print_messages(&result.messages);
        }
    }
    Ok(())
}

fn handle_progress(ctx: &mut AppContext, selector: String, page: String) -> Result<()> {
    let id = ctx.api.resolve(&selector)?;
    let result = ctx.api.set_progress(&id, &page)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, selector: String) -> Result<()> {
    let id = ctx.api.resolve(&selector)?;
    let result = ctx.api.delete(&id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_bulk_add(ctx: &mut AppContext, file: Option<PathBuf>) -> Result<()> {
    let text = match file {
        Some(path) => std::fs::read_to_string(path).map_err(ShelfzError::Io)?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(ShelfzError::Io)?;
            buf
        }
    };

    let result = ctx.api.bulk_add(&text)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_enrich(ctx: &mut AppContext, selector: String) -> Result<()> {
    let id = ctx.api.resolve(&selector)?;
    let book = ctx
        .api
        .books()
        .iter()
        .find(|b| b.id == id)
        .cloned()
        .ok_or_else(|| ShelfzError::BookNotFound(id.clone()))?;

    let client = GoogleBooksClient::new(ctx.config.api_key.clone());
    match ctx.api.lookup(&client, &book.title, &book.author) {
        Ok(Some(hit)) => {
            let mut draft = BookDraft::from_book(&book);
            enrich::apply_hit(&mut draft, &hit);
            let result = ctx.api.edit(&id, &draft)?;
            print_messages(&result.messages);
        }
        Ok(None) => println!("{}", format!("No metadata found for {}.", book.title).dimmed()),
        Err(e) => println!("{}", format!("Metadata lookup failed: {}", e).yellow()),
    }
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        let key_display = if config.api_key.is_empty() {
            "(unset)".to_string()
        } else {
            let prefix: String = config.api_key.chars().take(4).collect();
            format!("{}…", prefix)
        };
        println!("api-key = {}", key_display);
        println!("sort = {}", config.sort_by);
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const LINE_WIDTH: usize = 100;
const RIGHT_WIDTH: usize = 14;

fn print_books(shelf: Shelf, books: &[Book]) {
    if books.is_empty() {
        println!("Your {} shelf is currently empty.", shelf);
        return;
    }

    for (i, book) in books.iter().enumerate() {
        let idx_str = format!("{:>3}. ", i + 1);

        let mut left = book.title.clone();
        if !book.series.is_empty() {
            left.push_str(&format!(" ({} #{})", book.series, book.series_order));
        }
        if !book.author.is_empty() {
            left.push_str(&format!(" by {}", book.author));
        }

        let right = right_column(shelf, book);
        let available = LINE_WIDTH.saturating_sub(idx_str.width() + RIGHT_WIDTH);
        let left_display = truncate_to_width(&left, available);
        let padding = available.saturating_sub(left_display.width());

        println!(
            "{}{}{}{:>width$}",
            idx_str,
            left_display,
            " ".repeat(padding),
            right.dimmed(),
            width = RIGHT_WIDTH
        );
    }
}

fn right_column(shelf: Shelf, book: &Book) -> String {
    match shelf {
        Shelf::Reading => {
            if book.total_pages > 0 {
                format!("p. {}/{}", book.current_page, book.total_pages)
            } else {
                format!("p. {}", book.current_page)
            }
        }
        Shelf::Finished | Shelf::Dropped => book
            .sentiment
            .map(|s| s.to_string())
            .unwrap_or_else(|| "unrated".to_string()),
        Shelf::Planned => String::new(),
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
