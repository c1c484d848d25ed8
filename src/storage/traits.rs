use crate::errors::TootResult;

#[cfg_attr(test, mockall::automock)]
pub trait CursorRepository: Send + Sync {
    /// Load the stored fingerprint for a feed, `None` if no history.
    fn load(&self, feed_key: &str) -> TootResult<Option<String>>;

    /// Overwrite the feed's cursor with a new fingerprint.
    fn save(&self, feed_key: &str, fingerprint: &str) -> TootResult<()>;
}
