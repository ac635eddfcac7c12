use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shelf", bin_name = "shelf", version)]
#[command(about = "Personal library manager", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Data directory (defaults to $SHELF_HOME, then the platform data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Library file to use instead of the configured one
    #[arg(long, global = true, value_name = "FILE")]
    pub file: Option<PathBuf>,
}

/// Book fields shared by `add` and `update`. Missing fields are prompted for.
#[derive(Args, Debug, Default)]
pub struct BookArgs {
    /// Title of the book
    #[arg(long)]
    pub title: Option<String>,

    /// Author of the book
    #[arg(long)]
    pub author: Option<String>,

    /// Publication year
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub year: Option<u32>,

    /// Genre of the book
    #[arg(long)]
    pub genre: Option<String>,

    /// Content of the book (Markdown allowed)
    #[arg(long)]
    pub content: Option<String>,
}

impl BookArgs {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.year.is_none()
            && self.genre.is_none()
            && self.content.is_none()
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new book
    Add {
        #[command(flatten)]
        book: BookArgs,

        /// Mark the book as read
        #[arg(long)]
        read: bool,
    },

    /// Remove a book
    #[command(alias = "rm")]
    Remove {
        /// Id of the book (prompted if omitted)
        id: Option<String>,
    },

    /// Search for a book by title, author, or id
    Search {
        /// Search term (prompted if omitted)
        term: Vec<String>,
    },

    /// Update a book
    Update {
        /// Id of the book (prompted if omitted)
        id: Option<String>,

        #[command(flatten)]
        book: BookArgs,

        /// Mark the book as read
        #[arg(long, conflicts_with = "unread")]
        read: bool,

        /// Mark the book as unread
        #[arg(long)]
        unread: bool,
    },

    /// Display all books
    #[command(alias = "ls")]
    Display {
        /// Only read books
        #[arg(long, conflicts_with = "unread")]
        read: bool,

        /// Only unread books
        #[arg(long)]
        unread: bool,

        /// Only books of this genre
        #[arg(long)]
        genre: Option<String>,

        /// One line per book
        #[arg(short, long)]
        brief: bool,
    },

    /// Display library statistics
    Stats,

    /// Export book content as plain-text files
    Export {
        /// Ids of the books (all books if omitted)
        ids: Vec<String>,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        out: PathBuf,

        /// Strip Markdown formatting
        #[arg(long)]
        plain: bool,

        /// Bundle everything into one .tar.gz
        #[arg(long)]
        archive: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (library-file, id-length)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
