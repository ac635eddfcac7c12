use super::print::{print_books, print_messages, print_stats};
use super::prompt::Prompter;
use super::setup::{BookArgs, Cli, Commands};
use bookshelf::api::{
    BookFilter, ConfigAction, ExportOptions, LibraryApi, ReadFilter, ShelfPaths,
};
use bookshelf::config::{ConfigKey, ShelfConfig};
use bookshelf::error::{LibraryError, Result};
use bookshelf::model::{BookUpdate, NewBook};
use bookshelf::store::fs::FileStore;
use clap::{CommandFactory, Parser};
use directories::ProjectDirs;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const HOME_ENV: &str = "SHELF_HOME";

struct AppContext {
    api: LibraryApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let Some(command) = cli.command.as_ref() else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let mut ctx = init_context(&cli)?;
    let mut prompter = Prompter::stdio();

    match command {
        Commands::Add { book, read } => handle_add(&mut ctx, &mut prompter, book, *read),
        Commands::Remove { id } => handle_remove(&mut ctx, &mut prompter, id.as_deref()),
        Commands::Search { term } => handle_search(&ctx, &mut prompter, term),
        Commands::Update {
            id,
            book,
            read,
            unread,
        } => {
            let read_flag = match (*read, *unread) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            handle_update(&mut ctx, &mut prompter, id.as_deref(), book, read_flag)
        }
        Commands::Display {
            read,
            unread,
            genre,
            brief,
        } => {
            let filter = BookFilter {
                read: match (*read, *unread) {
                    (true, _) => ReadFilter::Read,
                    (_, true) => ReadFilter::Unread,
                    _ => ReadFilter::All,
                },
                genre: genre.clone(),
            };
            handle_display(&ctx, &filter, *brief)
        }
        Commands::Stats => handle_stats(&ctx),
        Commands::Export {
            ids,
            out,
            plain,
            archive,
        } => {
            let options = ExportOptions {
                out_dir: out.clone(),
                plain: *plain,
                archive: *archive,
            };
            handle_export(&ctx, ids, &options)
        }
        Commands::Config { key, value } => handle_config(&ctx, key.as_deref(), value.clone()),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.dir {
        return Ok(dir.clone());
    }
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "bookshelf", "bookshelf")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| LibraryError::Store("Could not determine data directory".to_string()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli)?;
    let config = ShelfConfig::load(&data_dir).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "ignoring unreadable config, using defaults");
        ShelfConfig::default()
    });

    let library_file = cli
        .file
        .clone()
        .unwrap_or_else(|| data_dir.join(&config.library_file));
    tracing::debug!(
        data_dir = %data_dir.display(),
        library = %library_file.display(),
        "resolved paths"
    );

    let store = FileStore::new(&library_file);
    let paths = ShelfPaths {
        data_dir,
        library_file,
    };
    let api = LibraryApi::new(store, paths).with_id_length(config.id_length);

    Ok(AppContext { api })
}

fn field_or_prompt<R: BufRead, W: Write>(
    value: Option<&String>,
    prompter: &mut Prompter<R, W>,
    prompt: &str,
    prompted: &mut bool,
) -> Result<String> {
    match value.map(|v| v.trim()).filter(|v| !v.is_empty()) {
        Some(v) => Ok(v.to_string()),
        None => {
            *prompted = true;
            prompter.required(prompt)
        }
    }
}

fn handle_add<R: BufRead, W: Write>(
    ctx: &mut AppContext,
    prompter: &mut Prompter<R, W>,
    args: &BookArgs,
    read: bool,
) -> Result<()> {
    let mut prompted = false;
    let title = field_or_prompt(
        args.title.as_ref(),
        prompter,
        "Enter the title of the book: ",
        &mut prompted,
    )?;
    let author = field_or_prompt(
        args.author.as_ref(),
        prompter,
        "Enter the author of the book: ",
        &mut prompted,
    )?;
    let year = match args.year {
        Some(year) => year,
        None => {
            prompted = true;
            prompter.year("Enter the publication year of the book: ")?
        }
    };
    let genre = field_or_prompt(
        args.genre.as_ref(),
        prompter,
        "Enter the genre of the book: ",
        &mut prompted,
    )?;
    let content = field_or_prompt(
        args.content.as_ref(),
        prompter,
        "Enter the content of the book: ",
        &mut prompted,
    )?;

    // Fully specified on the command line: no questions asked.
    let read = read || (prompted && prompter.confirm("Have you read this book? (yes/no): ")?);

    let fields = NewBook::new(title, author, year, genre, content).read(read);
    let result = ctx.api.add_book(fields)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove<R: BufRead, W: Write>(
    ctx: &mut AppContext,
    prompter: &mut Prompter<R, W>,
    id: Option<&str>,
) -> Result<()> {
    let id = match id {
        Some(id) => id.to_string(),
        None => prompter.line("Enter the ID of the book to remove: ")?,
    };
    let result = ctx.api.remove_book(id.as_str())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_search<R: BufRead, W: Write>(
    ctx: &AppContext,
    prompter: &mut Prompter<R, W>,
    term: &[String],
) -> Result<()> {
    let term = if term.is_empty() {
        prompter.line("Enter the title, author, or ID to search: ")?
    } else {
        term.join(" ")
    };
    let result = ctx.api.search_books(&term)?;
    print_books(&result.listed_books, false);
    print_messages(&result.messages);
    Ok(())
}

fn handle_update<R: BufRead, W: Write>(
    ctx: &mut AppContext,
    prompter: &mut Prompter<R, W>,
    id: Option<&str>,
    args: &BookArgs,
    read: Option<bool>,
) -> Result<()> {
    let id = match id {
        Some(id) => id.to_string(),
        None => prompter.line("Enter the ID of the book to update: ")?,
    };

    let current = match ctx.api.get_book(id.as_str()) {
        Ok(book) => book,
        Err(LibraryError::BookNotFound(_)) => {
            print_messages(&[bookshelf::api::CmdMessage::warning("Book not found!")]);
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    let update = if args.is_empty() && read.is_none() {
        prompter.say(&format!("Current Title: {}", current.title))?;
        let title = prompter.optional("Enter the new title (or press Enter to keep current): ")?;
        prompter.say(&format!("Current Author: {}", current.author))?;
        let author =
            prompter.optional("Enter the new author (or press Enter to keep current): ")?;
        prompter.say(&format!("Current Year: {}", current.year))?;
        let year = prompter.optional_year(
            "Enter the new publication year (or press Enter to keep current): ",
        )?;
        prompter.say(&format!("Current Genre: {}", current.genre))?;
        let genre = prompter.optional("Enter the new genre (or press Enter to keep current): ")?;
        prompter.say(&format!("Current Content: {}", current.content))?;
        let content =
            prompter.optional("Enter the new content (or press Enter to keep current): ")?;
        let status = if current.read { "Read" } else { "Unread" };
        prompter.say(&format!("Current Read Status: {}", status))?;
        let read = prompter
            .optional_confirm("Mark as read? (yes/no, or press Enter to keep current): ")?;

        BookUpdate {
            title,
            author,
            year,
            genre,
            content,
            read,
        }
    } else {
        BookUpdate {
            title: args.title.clone(),
            author: args.author.clone(),
            year: args.year,
            genre: args.genre.clone(),
            content: args.content.clone(),
            read,
        }
    };

    let result = ctx.api.update_book(current.id, &update)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_display(ctx: &AppContext, filter: &BookFilter, brief: bool) -> Result<()> {
    let result = ctx.api.list_books(filter)?;
    print_books(&result.listed_books, brief);
    print_messages(&result.messages);
    Ok(())
}

fn handle_stats(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.statistics()?;
    if let Some(stats) = &result.stats {
        print_stats(stats);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &AppContext, ids: &[String], options: &ExportOptions) -> Result<()> {
    let result = ctx.api.export_books(ids, options)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<&str>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(name), value) => match ConfigKey::parse(name) {
            Some(key) => match value {
                Some(v) => ConfigAction::Set(key, v),
                None => ConfigAction::ShowKey(key),
            },
            None => {
                println!("Unknown config key: {}", name);
                return Ok(());
            }
        },
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        for key in ConfigKey::ALL {
            println!("{} = {}", key.name(), config.get(key));
        }
        let paths = ctx.api.paths();
        println!("data-dir = {}", paths.data_dir.display());
        println!("library = {}", paths.library_file.display());
    }
    print_messages(&result.messages);
    Ok(())
}
