// src/cli.rs

use crate::filter::SortOrder;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    version,
    about = "devreplay - A developer journal client for the command line",
    long_about = "devreplay talks to a journal entries API. Browse and search your entries, filter them by tag, write new ones with suggested tags, and open an entry to see a generated answer."
)]
pub struct Cli {
    /// Base URL of the entries API (overrides DEVREPLAY_API_URL).
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Lists journal entries, newest first by default.
    List {
        #[arg(short, long, help = "Only show entries whose title, content or summary contains this text")]
        search: Option<String>,

        #[arg(short, long, help = "Only show entries carrying this exact tag")]
        tag: Option<String>,

        #[arg(long, value_enum, default_value_t = SortOrder::Newest, help = "Sort order")]
        sort: SortOrder,
    },

    /// Prints every distinct tag used across all entries.
    Tags,

    /// Shows a single entry in full, followed by a generated answer.
    Show {
        #[arg(help = "The id of the entry to show")]
        id: String,

        #[arg(long, help = "Skip generating the answer")]
        no_answer: bool,
    },

    /// Writes a new entry.
    /// If no content is provided via -m, it opens the default editor.
    New {
        #[arg(short = 'T', long, help = "Title of the entry (at least 3 characters)")]
        title: String,

        #[arg(short, long, help = "Content of the entry (at least 10 characters)")]
        message: Option<String>,

        #[arg(short, long, help = "Comma-separated tags, each at least 2 characters")]
        tags: Option<String>,

        #[arg(long, help = "Add the tags suggested by the title")]
        suggest: bool,
    },

    /// Suggests tags for a title.
    Suggest {
        #[arg(required = true, num_args = 1.., help = "Title words")]
        title: Vec<String>,
    },
}
