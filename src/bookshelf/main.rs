//! # Shelf CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, this file only invokes
//! `cli::run()` and handles process termination.
//!
//! Not-found and no-match outcomes are ordinary messages and exit 0. Only faults
//! (unwritable library file, closed stdin mid-prompt) exit 1.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
