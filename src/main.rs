use std::fs;
use std::path::Path;

use clap::Parser;

use tootfeed::cli::{Cli, Commands};
use tootfeed::config::{self, Config};
use tootfeed::domain::FeedConfig;
use tootfeed::errors::TootResult;
use tootfeed::services::{FeedProcessor, MastodonPublisher, ProcessorSettings};
use tootfeed::sources::RssAtomSource;
use tootfeed::storage::FsCursorStore;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> TootResult<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::from_env()?;
    let feeds = config::load_feeds(Path::new(&cli.feeds))?;

    match cli.command {
        Commands::List => cmd_list(&feeds),
        Commands::Run { dry_run } => cmd_run(&feeds, &config, dry_run),
    }
}

fn cmd_list(feeds: &[FeedConfig]) -> TootResult<()> {
    if feeds.is_empty() {
        println!("No feeds configured.");
        return Ok(());
    }

    println!("Configured feeds:\n");
    for feed in feeds {
        println!("  {}", feed.uri);
        if !feed.tags.is_empty() {
            println!("    Tags: {}", feed.tags.join(", "));
        }
        if feed.sensitive {
            println!("    Sensitive: posts behind a content warning");
        }
        println!();
    }

    Ok(())
}

fn cmd_run(feeds: &[FeedConfig], config: &Config, dry_run_flag: bool) -> TootResult<()> {
    if feeds.is_empty() {
        println!("No feeds configured.");
        return Ok(());
    }

    let dry_run = dry_run_flag || config.dry_run;

    // Best effort; per-feed load/save errors surface during processing.
    if let Err(e) = fs::create_dir_all(&config.hash_dir) {
        eprintln!(
            "Warning: cannot create hash dir {}: {}",
            config.hash_dir.display(),
            e
        );
    }

    let publisher =
        MastodonPublisher::new(&config.mastodon_url, &config.mastodon_token, dry_run)?;
    let processor = FeedProcessor::new(
        RssAtomSource::new(),
        FsCursorStore::new(&config.hash_dir),
        publisher,
        ProcessorSettings {
            include_author: config.include_author,
            cw_tag: config.cw_tag.clone(),
            skip_tags: config.skip_tags.clone(),
            visibility: config.visibility.clone(),
            post_delay: config.post_delay,
        },
    );

    if dry_run {
        println!("Dry run - nothing will be posted.\n");
    }

    println!("Processing feeds...\n");

    let total = processor.process_all(feeds);

    println!("\nDone: {} posted, {} failed.", total.posted, total.failed);

    Ok(())
}
