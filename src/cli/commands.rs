use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tootfeed")]
#[command(about = "Toot new RSS/Atom feed entries to a Mastodon-compatible API")]
#[command(version)]
pub struct Cli {
    /// Path to the feeds file
    #[arg(long, env = "FEEDS_FILE", default_value = "feeds.toml", global = true)]
    pub feeds: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Process every configured feed and toot unseen entries
    Run {
        /// Dry run - print would-be toots without posting anything
        #[arg(long)]
        dry_run: bool,
    },

    /// List configured feeds
    List,
}
