use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "dexview", bin_name = "dexview", version)]
#[command(about = "Browse a paginated entity catalog from the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Listing endpoint to use for this run (overrides config)
    #[arg(long, global = true, value_name = "URL", help_heading = "Options")]
    pub base_url: Option<String>,

    /// Listing page size for this run (overrides config)
    #[arg(
        long,
        global = true,
        value_name = "N",
        value_parser = clap::value_parser!(u32).range(1..),
        help_heading = "Options"
    )]
    pub limit: Option<u32>,

    /// Disable colored output
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,

    /// Verbose output (debug logging to stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// List catalog entries
    #[command(alias = "ls", display_order = 1)]
    List {
        /// Only show entries whose name contains this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Search catalog entries by name
    #[command(display_order = 2)]
    Search { term: String },

    /// Show the details of one entity
    #[command(alias = "v", display_order = 3)]
    Show {
        /// Entity identifier (e.g. 25)
        id: String,
    },

    /// Browse interactively: type to search, enter a number to select
    #[command(display_order = 4)]
    Browse,

    /// Get or set configuration
    #[command(display_order = 5)]
    Config {
        /// Configuration key (base-url, sprite-url, page-limit, timeout-secs)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
