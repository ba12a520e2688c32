use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "oneiro")]
#[command(about = "A dream journal for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Record a new dream
    #[command(alias = "r")]
    Record {
        /// Dream title
        title: String,

        /// The dream itself, in as much detail as you remember
        content: String,

        /// Category: normal, nightmare, lucid, recurring, prophetic, flying
        #[arg(short, long, default_value = "normal")]
        category: String,

        /// Mood on waking, 0 (worst) to 5 (best)
        #[arg(short, long, default_value_t = 5)]
        mood: u8,

        /// Comma-separated tags (e.g. "flying, water, family")
        #[arg(short, long, default_value = "")]
        tags: String,

        /// Mark as a lucid dream
        #[arg(long)]
        lucid: bool,

        /// Mark as a recurring dream
        #[arg(long)]
        recurring: bool,
    },

    /// List dreams
    #[command(alias = "ls")]
    List {
        /// Search term (matches title, narrative, and tags)
        #[arg(short, long)]
        search: Option<String>,

        /// Restrict to one category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// View one dream in full, with any discovered symbols
    #[command(alias = "v")]
    View {
        /// Id of the dream (as shown by list)
        id: i64,
    },

    /// Delete a dream
    #[command(alias = "rm")]
    Delete {
        /// Id of the dream (as shown by list)
        id: i64,
    },

    /// Show journal statistics
    Stats,

    /// Export the whole journal as a plain-text file
    Export {
        /// Output path (defaults to dream-journal-<date>.txt here)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show or change the display theme
    Theme {
        /// "dark", "light", or "toggle" (omit to show the current theme)
        value: Option<String>,
    },
}
