//! Command-line interface for flagquest.

use clap::{Parser, Subcommand};

/// Flagquest - country explorer with a guess-the-flag game
#[derive(Parser, Debug)]
#[command(name = "flagquest")]
#[command(about = "Browse countries and guess flags in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "flagquest.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run (defaults to the interactive explorer)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the interactive terminal explorer
    Tui,

    /// Print a country listing
    List {
        /// Region to filter by (all, africa, americas, asia, europe, oceania)
        #[arg(short, long, default_value = "all")]
        region: String,

        /// View mode (cards, table, or default)
        #[arg(short, long, default_value = "default")]
        view: String,

        /// Page number, starting at 1
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Countries per page (defaults to the configured page size)
        #[arg(long)]
        page_size: Option<usize>,
    },

    /// Show one country by its alpha code
    Show {
        /// Two- or three-letter country code
        code: String,
    },
}
