//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use glyphcheck::corpus::{DEFAULT_GROUP_SUFFIX, DEFAULT_MARKER};
use glyphcheck::{DEFAULT_CORPUS_PATH, DEFAULT_REFERENCE_PATH};
use std::path::PathBuf;

/// glyphcheck: validate lesson input codes against a reference database
#[derive(Parser)]
#[command(name = "glyphcheck")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Reference database (code<TAB>character per line)
    #[arg(long, global = true, value_name = "PATH", default_value = DEFAULT_REFERENCE_PATH)]
    pub reference: PathBuf,

    /// Lesson corpus to validate or fix
    #[arg(long, global = true, value_name = "PATH", default_value = DEFAULT_CORPUS_PATH)]
    pub corpus: PathBuf,

    /// Annotation marker keyword
    #[arg(long, global = true, default_value = DEFAULT_MARKER)]
    pub marker: String,

    /// Suffix of lesson group bindings
    #[arg(long, global = true, default_value = DEFAULT_GROUP_SUFFIX)]
    pub group_suffix: String,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Look up codes and generate annotation tokens for characters
    Lookup {
        /// Characters to look up (e.g. "明 林" or "明林")
        #[arg(value_name = "CHARS", required = true)]
        characters: Vec<String>,
    },

    /// Validate every annotation in the lesson corpus
    Validate {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Rewrite incorrect codes in the lesson corpus
    Fix {
        /// Show what would change without writing
        #[arg(long)]
        dry_run: bool,

        /// Keep a timestamped copy of the original corpus
        #[arg(long)]
        backup: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
