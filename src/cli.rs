//! CLI definitions: argument parsing, subcommands, and help text.

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

use emoji_shortcuts::Vocabulary;

pub use clap_complete::generate;

const AFTER_HELP: &str = "\
EXAMPLES:
  emoji-shortcuts -m \"Hello :)\"             Print the rewritten message
  echo 'hi ;)' | emoji-shortcuts            Read the message from stdin
  emoji-shortcuts --vocabulary standard -m \"<3\"
  emoji-shortcuts list                      Show the active mapping table
  emoji-shortcuts config                    Show the active vocabulary and its source
  emoji-shortcuts completions bash          Generate bash completions
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Replace emoticon shortcuts in chat messages with emoji tokens",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Message to process
    #[arg(
        short = 'm',
        long,
        help = "Message to process (use '-' or omit to read from stdin)"
    )]
    pub message: Option<String>,

    /// Vocabulary override (yahoo, standard)
    #[arg(long, global = true, help = "Token vocabulary: yahoo or standard")]
    pub vocabulary: Option<Vocabulary>,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the shortcuts of the active vocabulary
    List,
    /// Show the active vocabulary and where it was configured
    Config,
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_message_and_vocabulary() {
        let args = Args::try_parse_from(["emoji-shortcuts", "-m", "hi :)", "--vocabulary", "standard"])
            .unwrap();
        assert_eq!(args.message.as_deref(), Some("hi :)"));
        assert_eq!(args.vocabulary, Some(Vocabulary::Standard));
    }

    #[test]
    fn rejects_unknown_vocabulary() {
        assert!(Args::try_parse_from(["emoji-shortcuts", "--vocabulary", "nope"]).is_err());
    }

    #[test]
    fn log_level_from_flags() {
        let quiet = Args::try_parse_from(["emoji-shortcuts", "-q"]).unwrap();
        assert_eq!(quiet.log_level(), "error");
        let debug = Args::try_parse_from(["emoji-shortcuts", "-vv"]).unwrap();
        assert_eq!(debug.log_level(), "debug");
        let default = Args::try_parse_from(["emoji-shortcuts"]).unwrap();
        assert_eq!(default.log_level(), "warn");
    }

    #[test]
    fn list_subcommand() {
        let args = Args::try_parse_from(["emoji-shortcuts", "list"]).unwrap();
        assert!(matches!(args.command, Some(Commands::List)));
    }
}
