use crate::domain::FeedItem;
use crate::errors::TootResult;

#[cfg_attr(test, mockall::automock)]
pub trait FeedSource: Send + Sync {
    /// Fetch a feed and return its items in source order.
    ///
    /// Sources are assumed to list entries newest first; the cursor
    /// protocol leans on that ordering and does not verify it.
    fn fetch_entries(&self, uri: &str) -> TootResult<Vec<FeedItem>>;
}
