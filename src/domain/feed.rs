use serde::Deserialize;

/// One configured feed from the feeds file.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedConfig {
    pub uri: String,
    /// Feed-level default tags, merged into every entry's tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Force a content warning on every entry from this feed.
    #[serde(default)]
    pub sensitive: bool,
}

impl FeedConfig {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            tags: Vec::new(),
            sensitive: false,
        }
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_sensitive(mut self, sensitive: bool) -> Self {
        self.sensitive = sensitive;
        self
    }
}
