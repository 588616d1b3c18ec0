use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "shelfz")]
#[command(about = "A personal book catalog for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a single book
    #[command(alias = "a")]
    Add {
        /// Book title
        title: String,

        /// Author
        #[arg(long)]
        author: Option<String>,

        /// Shelf to add to (planned, reading, finished, dropped)
        #[arg(long)]
        shelf: Option<String>,

        /// Total page count
        #[arg(long)]
        pages: Option<u32>,

        /// Current page
        #[arg(long)]
        page: Option<u32>,

        /// Series name
        #[arg(long)]
        series: Option<String>,

        /// Position within the series
        #[arg(long)]
        vol: Option<u32>,

        /// Free-form notes
        #[arg(long)]
        notes: Option<String>,

        /// Cover image URL or path (stored verbatim)
        #[arg(long)]
        cover: Option<String>,

        /// Fill missing fields from the metadata service before saving
        #[arg(long)]
        lookup: bool,
    },

    /// List one shelf
    #[command(alias = "ls")]
    List {
        /// Shelf to show (default: reading)
        #[arg(long)]
        shelf: Option<String>,

        /// Filter by title or author substring
        #[arg(short, long)]
        search: Option<String>,

        /// Sort order (newest, title, author, progress, series)
        #[arg(long)]
        sort: Option<String>,

        /// Show per-shelf totals instead of a listing
        #[arg(long)]
        counts: bool,
    },

    /// Edit a book (full replace; unspecified flags keep current values)
    #[command(alias = "e")]
    Edit {
        /// Book id or title fragment
        selector: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        author: Option<String>,

        #[arg(long)]
        pages: Option<u32>,

        #[arg(long)]
        page: Option<u32>,

        #[arg(long)]
        series: Option<String>,

        #[arg(long)]
        vol: Option<u32>,

        #[arg(long)]
        notes: Option<String>,

        #[arg(long)]
        cover: Option<String>,
    },

    /// Move a book to another shelf
    #[command(alias = "mv")]
    Move {
        /// Book id or title fragment
        selector: String,

        /// Target shelf (planned, reading, finished, dropped)
        shelf: String,

        /// Overall sentiment for finished/dropped (loved, liked, meh, "not for me")
        #[arg(long)]
        sentiment: Option<String>,

        /// Enjoyment score, 0-5 in half steps
        #[arg(long)]
        enjoyment: Option<f32>,

        /// Emotional impact score
        #[arg(long)]
        impact: Option<f32>,

        /// Effort score
        #[arg(long)]
        effort: Option<f32>,

        /// Reread potential score
        #[arg(long)]
        reread: Option<f32>,

        /// Closing notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Update the current page of a book
    #[command(alias = "pg")]
    Progress {
        /// Book id or title fragment
        selector: String,

        /// Page number (unparsable input counts as 0)
        page: String,
    },

    /// Delete a book
    #[command(alias = "rm")]
    Delete {
        /// Book id or title fragment
        selector: String,
    },

    /// Add many books at once, one title per line, onto the Planned shelf
    BulkAdd {
        /// File with one title per line; reads stdin when omitted
        file: Option<std::path::PathBuf>,
    },

    /// Fill missing metadata for an existing book
    Enrich {
        /// Book id or title fragment
        selector: String,
    },

    /// Get or set configuration (keys: api-key, sort)
    Config {
        /// Configuration key
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
