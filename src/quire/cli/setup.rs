use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "quire", bin_name = "quire", version)]
#[command(about = "A paginated diary for the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new diary
    #[command(alias = "n")]
    New {
        /// Name of the diary
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// List diaries
    #[command(alias = "ls")]
    List,

    /// Show a diary's pages
    #[command(alias = "v")]
    Show {
        /// List position, id or name of the diary
        diary: String,

        /// Only this page (1-based)
        #[arg(short, long)]
        page: Option<usize>,
    },

    /// Type text onto the last page of a diary, turning pages as they fill up
    #[command(alias = "w")]
    Write {
        /// List position, id or name of the diary
        diary: String,

        /// Text to write; read from stdin when omitted
        text: Vec<String>,
    },

    /// Delete diaries
    #[command(alias = "rm")]
    Delete {
        /// List positions, ids or names
        #[arg(required = true, num_args = 1..)]
        diaries: Vec<String>,
    },

    /// Export every diary to a JSON file
    Export {
        /// Output file (defaults to quire_export_<date>.json in the current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Import diaries from an export file; diaries already present are skipped
    Import {
        path: PathBuf,
    },

    /// Get or set configuration values
    Config {
        /// Configuration key
        key: Option<String>,

        /// Value to set
        value: Option<String>,
    },
}
