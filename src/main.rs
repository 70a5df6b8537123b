//! # emoji-shortcuts
//!
//! Command-line front end for the emoticon rewriting engine.
//!
//! ## Features
//! - Rewrite a message given with `-m` or read from stdin
//! - List the active mapping table
//! - Show configuration (vocabulary and where it was selected)
//! - Shell completions

mod cli;
mod run;

use std::io;

use clap::{CommandFactory, Parser};
use dotenv::dotenv;

use cli::{Args, Commands};
use emoji_shortcuts::core;
use emoji_shortcuts::core::config::Config;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv().ok();

    let args = Args::parse();
    run::init_logger(&args);

    if let Some(Commands::Completions { shell }) = &args.command {
        cli::generate(*shell, &mut Args::command(), core::app::NAME, &mut io::stdout());
        return Ok(());
    }

    // Print user-friendly message; exit uses Display not Debug
    let config = match core::config::load() {
        Ok(config) => config.with_override(args.vocabulary),
        Err(e) if args.vocabulary.is_some() => {
            log::warn!("Ignoring {}", e);
            Config::default().with_override(args.vocabulary)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    log::debug!("Using {} vocabulary (from {})", config.vocabulary, config.source);

    match &args.command {
        Some(Commands::List) => run::run_list(&config),
        Some(Commands::Config) => run::run_config(&config),
        Some(Commands::Completions { .. }) | None => run::run_message(&args, &config),
    }
}
