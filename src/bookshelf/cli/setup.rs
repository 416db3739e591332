use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::sync::OnceLock;

/// "0.3.0" for releases, "0.3.0@abc1234" for dev builds.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("BOOKSHELF_GIT_HASH");
    const IS_RELEASE: &str = env!("BOOKSHELF_IS_RELEASE");

    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "bookshelf", bin_name = "bookshelf", version = get_version())]
#[command(about = "Keep a small catalog of books", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the catalog (overridden by BOOKSHELF_DATA)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fill in the form and submit a book
    #[command(alias = "a")]
    Add {
        /// Book title
        #[arg(short, long, default_value = "")]
        title: String,

        /// Book author
        #[arg(short, long, default_value = "")]
        author: String,

        /// Book ISBN (must be unique in the catalog)
        #[arg(short, long, default_value = "")]
        isbn: String,
    },

    /// Show the catalog
    #[command(alias = "ls")]
    List {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        output: OutputFormat,
    },

    /// Delete one or more rows, as numbered by `list`
    #[command(alias = "rm")]
    Remove {
        /// Row numbers (e.g. 1 3)
        #[arg(required = true, num_args = 1..)]
        rows: Vec<usize>,
    },

    /// Interactive session: form, table and live notifications
    Shell,

    /// Get or set configuration
    Config {
        /// Configuration key (slot, notice-secs)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
