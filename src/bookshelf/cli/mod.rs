//! # CLI Layer
//!
//! One possible UI client for bookshelf. The only place in the codebase that:
//! - parses arguments (`setup.rs`)
//! - prompts on stdin (`prompt.rs`)
//! - writes to stdout/stderr (`print.rs`, `styles.rs`)
//!
//! `commands.rs` builds the [`LibraryApi`](bookshelf::api::LibraryApi) for the
//! resolved data directory and dispatches one handler per subcommand. Handlers fill in
//! missing fields interactively, call the API once, and print the returned messages.

mod commands;
mod print;
mod prompt;
mod setup;
mod styles;

pub use commands::run;
