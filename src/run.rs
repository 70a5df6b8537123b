//! Application run modes: logger init, message processing, table listing.

use std::io::{self, Write};

use emoji_shortcuts::core;
use emoji_shortcuts::core::config::Config;

use crate::cli::Args;

/// Initialize env_logger on stderr so stdout carries only the processed text.
pub fn init_logger(args: &Args) {
    let log_level = args.log_level();
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .target(env_logger::Target::Stderr)
        .try_init();
}

/// Process one message from `-m` or stdin and print the result.
pub fn run_message(args: &Args, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let engine = core::pipeline::engine(config.vocabulary);
    match args.message.as_deref() {
        Some(message) if message != "-" => {
            println!("{}", engine.process(message));
        }
        _ => {
            // stdin is passed through byte-for-byte apart from the rewrites
            let message = io::read_to_string(io::stdin())?;
            let mut stdout = io::stdout().lock();
            stdout.write_all(engine.process(&message).as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Print the active mapping table, one rule per line.
pub fn run_list(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let engine = core::pipeline::engine(config.vocabulary);
    let mut stdout = io::stdout().lock();
    for matcher in engine.matchers() {
        writeln!(stdout, "{:<8} {}", matcher.shortcut(), matcher.replacement())?;
    }
    Ok(())
}

/// Print the active vocabulary and where it came from.
pub fn run_config(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let engine = core::pipeline::engine(config.vocabulary);
    println!("{} {}", core::app::NAME, core::app::VERSION);
    println!("vocabulary: {} (from {})", config.vocabulary, config.source);
    println!("table:      {}", config.vocabulary.source());
    println!("rules:      {}", engine.rule_count());
    Ok(())
}
