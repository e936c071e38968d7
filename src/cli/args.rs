//! Command line argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// ADE Agent - Match media titles against Adult DVD Empire and fetch metadata
#[derive(Parser, Debug)]
#[command(name = "ade-agent")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Skip preflight checks
    #[arg(long, global = true)]
    pub skip_preflight: bool,

    /// Path to the config file
    #[arg(long, global = true, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search the catalog for a title and list ranked candidates
    Search {
        /// Media title, e.g. "Big Picture (2019)" or "Big Picture {ade-1234567}"
        #[arg(value_name = "TITLE")]
        title: String,

        /// Release year hint
        #[arg(short = 'y', long)]
        year: Option<u16>,

        /// Show candidates below the good-score threshold too
        #[arg(long)]
        all: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Fetch metadata for a catalog ID
    Update {
        /// Catalog ID
        #[arg(value_name = "ID")]
        id: String,

        /// Media title to record (a trailing year is removed)
        #[arg(short = 't', long)]
        title: Option<String>,

        /// Directory to write metadata files into (prints to stdout otherwise)
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// Metadata file format
        #[arg(long, value_enum, default_value_t = MetadataFormat::Nfo)]
        format: MetadataFormat,

        /// Download the poster alongside the metadata (needs --output)
        #[arg(long, requires = "output")]
        poster: bool,
    },

    /// Identify video files and write NFO and poster files next to them
    Identify {
        /// Video file or directory
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Show matches without writing any files
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the effective configuration
    Config,
}

/// Output format for search results.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Simple,
    Json,
}

/// File format for scraped metadata.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetadataFormat {
    Nfo,
    Json,
}
