use std::thread;
use std::time::Duration;

use crate::domain::{Entry, FeedConfig, Toot};
use crate::errors::TootResult;
use crate::services::publisher::StatusPublisher;
use crate::sources::FeedSource;
use crate::storage::{digest_hex, CursorRepository};

/// Per-feed outcome for the run summary.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FeedReport {
    pub posted: usize,
    pub failed: usize,
}

/// Settings the pipeline needs beyond the feed list.
#[derive(Debug, Clone)]
pub struct ProcessorSettings {
    pub include_author: bool,
    pub cw_tag: String,
    /// Lower-cased at config load; compared as-is here.
    pub skip_tags: Vec<String>,
    pub visibility: String,
    /// Flat sleep after every publish attempt, the only rate limiting.
    pub post_delay: Duration,
}

/// Runs one feed through the pipeline: load cursor, fetch, diff,
/// format, publish, advance cursor. Delivery is at-most-once: the
/// cursor saved after any successful post is always the fingerprint
/// of the first entry iterated in this fetch, so an entry whose post
/// failed is never retried once a later post in the same run succeeds.
pub struct FeedProcessor<S, C, P> {
    source: S,
    cursors: C,
    publisher: P,
    settings: ProcessorSettings,
}

impl<S: FeedSource, C: CursorRepository, P: StatusPublisher> FeedProcessor<S, C, P> {
    pub fn new(source: S, cursors: C, publisher: P, settings: ProcessorSettings) -> Self {
        Self {
            source,
            cursors,
            publisher,
            settings,
        }
    }

    pub fn process(&self, feed: &FeedConfig) -> TootResult<FeedReport> {
        let feed_key = digest_hex(&feed.uri);
        let stored = self.cursors.load(&feed_key)?.unwrap_or_default();

        let items = self.source.fetch_entries(&feed.uri)?;

        // Fingerprint of the first entry seen in this fetch; every
        // successful post in this run records this one value.
        let mut candidate_cursor: Option<String> = None;
        let mut report = FeedReport::default();

        for item in items {
            let fingerprint = digest_hex(&item.link);
            if fingerprint == stored {
                // Everything from here on was already posted.
                break;
            }

            if candidate_cursor.is_none() {
                candidate_cursor = Some(fingerprint);
            }

            let entry = Entry::assemble(
                item,
                feed,
                self.settings.include_author,
                &self.settings.cw_tag,
            );
            let toot = Toot::from_entry(
                &entry,
                &self.settings.visibility,
                &self.settings.cw_tag,
                &self.settings.skip_tags,
            );

            match self.publisher.publish(&toot) {
                Ok(()) => {
                    if let Some(cursor) = &candidate_cursor {
                        self.cursors.save(&feed_key, cursor)?;
                    }
                    report.posted += 1;
                }
                Err(e) => {
                    eprintln!("Failed to post {}: {}", entry.link, e);
                    report.failed += 1;
                }
            }

            thread::sleep(self.settings.post_delay);
        }

        Ok(report)
    }

    /// Process every feed in order and return the combined totals.
    ///
    /// A feed that fails outright (fetch, parse or cursor storage) is
    /// logged and skipped; the remaining feeds still run.
    pub fn process_all(&self, feeds: &[FeedConfig]) -> FeedReport {
        let mut total = FeedReport::default();

        for feed in feeds {
            match self.process(feed) {
                Ok(report) => {
                    if report.posted > 0 || report.failed > 0 {
                        println!(
                            "{}: {} posted, {} failed",
                            feed.uri, report.posted, report.failed
                        );
                    }
                    total.posted += report.posted;
                    total.failed += report.failed;
                }
                Err(e) => eprintln!("Error processing {}: {}", feed.uri, e),
            }
        }

        total
    }
}
