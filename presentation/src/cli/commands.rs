//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for quotecycle
#[derive(Parser, Debug)]
#[command(name = "quotecycle")]
#[command(author, version, about = "Rotating quotes, never repeated until the set runs out")]
#[command(long_about = r#"
quotecycle shows quotes from a static corpus, optionally restricted to a
category. Within a category (or the whole corpus) no quote is shown twice
until every quote has been shown once.

The corpus is a JSON array of {id, number, content, author, categories}
records, read from a URL or a local file.

Configuration files are loaded from (in priority order):
1. QUOTECYCLE_<SECTION>__<KEY>   Environment variables
2. --config <path>               Explicit config file
3. ./quotecycle.toml             Project-level config
4. ~/.config/quotecycle/config.toml   Global config

Example:
  quotecycle show
  quotecycle show --category stoic
  quotecycle show --id q-042
  quotecycle categories
  quotecycle browse --corpus https://example.org/assets/quotes.json
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Corpus location (URL or file path), overrides configuration
    #[arg(long, value_name = "LOCATION", global = true)]
    pub corpus: Option<String>,

    /// Print quotes as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print only the quote, no decoration
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show one quote (the default)
    Show {
        /// Quote identifier to show; falls back to a random quote if unknown
        #[arg(long)]
        id: Option<String>,

        /// Only draw quotes from this category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Browse quotes interactively
    Browse {
        /// Quote identifier to start from
        #[arg(long)]
        id: Option<String>,

        /// Start with this category active
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List categories with quote counts
    Categories,

    /// List authors with quote counts
    Authors,

    /// Look up a quote by identifier
    Get {
        /// Quote identifier
        id: String,
    },

    /// Print share text and links for a quote
    Share {
        /// Quote identifier
        id: String,
    },
}

impl Cli {
    /// The subcommand to run, defaulting to `show`
    pub fn subcommand(&self) -> Command {
        self.command.clone().unwrap_or(Command::Show {
            id: None,
            category: None,
        })
    }
}
