//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Solidafy Paginator CLI
#[derive(Parser, Debug)]
#[command(name = "solidafy-paginator")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Pager definition file (YAML)
    #[arg(short, long, global = true)]
    pub definition: Option<PathBuf>,

    /// Text file to page through, one element per line (repeatable)
    #[arg(short, long = "file", global = true)]
    pub files: Vec<PathBuf>,

    /// Inline element (repeatable, registered after files)
    #[arg(short, long = "item", global = true)]
    pub items: Vec<String>,

    /// Cache only the requested page (page settings become fixed)
    #[arg(long, global = true)]
    pub windowed: bool,

    /// Output format
    #[arg(long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the elements on one page
    Page {
        /// Elements per page (overrides the definition)
        #[arg(short, long, allow_negative_numbers = true)]
        size: Option<i64>,

        /// 1-based page number (overrides the definition)
        #[arg(short, long, allow_negative_numbers = true)]
        number: Option<i64>,
    },

    /// Count every element across all sources
    Count,

    /// Count pages for a page size
    Pages {
        /// Elements per page (overrides the definition)
        #[arg(short, long, allow_negative_numbers = true)]
        size: Option<i64>,
    },

    /// Validate the pager definition
    Validate,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one message per line)
    Json,
    /// Human-readable output
    Pretty,
}
