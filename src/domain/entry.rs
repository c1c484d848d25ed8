use super::FeedConfig;

/// An item as parsed off the wire, before feed-level config is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    pub title: String,
    pub link: String,
    pub author: Option<String>,
    pub tags: Vec<String>,
}

/// A feed entry ready for formatting: tags merged, content-warning
/// flag resolved, author gated behind the include-author setting.
#[derive(Debug, Clone)]
pub struct Entry {
    pub title: String,
    pub link: String,
    pub author: Option<String>,
    pub tags: Vec<String>,
    pub content_warning: bool,
}

impl Entry {
    pub fn assemble(
        item: FeedItem,
        feed: &FeedConfig,
        include_author: bool,
        cw_tag: &str,
    ) -> Self {
        // Feed-level tags first, then entry tags not already present.
        let mut tags = feed.tags.clone();
        for tag in item.tags {
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }

        let content_warning = feed.sensitive || tags.iter().any(|t| t == cw_tag);
        let author = if include_author { item.author } else { None };

        Self {
            title: item.title,
            link: item.link,
            author,
            tags,
            content_warning,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(tags: &[&str]) -> FeedItem {
        FeedItem {
            title: "Post".to_string(),
            link: "https://example.com/post".to_string(),
            author: Some("Alice".to_string()),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_tag_union_keeps_feed_tags_first() {
        let feed = FeedConfig::new("https://example.com/feed")
            .with_tags(vec!["blog".to_string(), "rust".to_string()]);

        let entry = Entry::assemble(item(&["rust", "async"]), &feed, true, "cw");

        assert_eq!(entry.tags, vec!["blog", "rust", "async"]);
    }

    #[test]
    fn test_content_warning_from_tag() {
        let feed = FeedConfig::new("https://example.com/feed");
        let entry = Entry::assemble(item(&["content-warning"]), &feed, true, "content-warning");
        assert!(entry.content_warning);
    }

    #[test]
    fn test_content_warning_from_sensitive_feed() {
        let feed = FeedConfig::new("https://example.com/feed").with_sensitive(true);
        let entry = Entry::assemble(item(&[]), &feed, true, "content-warning");
        assert!(entry.content_warning);
    }

    #[test]
    fn test_no_content_warning_by_default() {
        let feed = FeedConfig::new("https://example.com/feed");
        let entry = Entry::assemble(item(&["rust"]), &feed, true, "content-warning");
        assert!(!entry.content_warning);
    }

    #[test]
    fn test_author_dropped_when_disabled() {
        let feed = FeedConfig::new("https://example.com/feed");
        let entry = Entry::assemble(item(&[]), &feed, false, "cw");
        assert!(entry.author.is_none());
    }

    #[test]
    fn test_cw_tag_compared_case_sensitively() {
        let feed = FeedConfig::new("https://example.com/feed");
        let entry = Entry::assemble(item(&["Content-Warning"]), &feed, true, "content-warning");
        assert!(!entry.content_warning);
    }
}
