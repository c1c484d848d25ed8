use feed_rs::parser;
use reqwest::blocking::Client;

use crate::domain::FeedItem;
use crate::errors::{TootError, TootResult};
use crate::sources::traits::FeedSource;

pub struct RssAtomSource {
    client: Client,
}

impl RssAtomSource {
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }

    fn items_from_bytes(bytes: &[u8]) -> TootResult<Vec<FeedItem>> {
        let parsed = parser::parse(bytes).map_err(|e| TootError::FeedParse(e.to_string()))?;

        let items: Vec<FeedItem> = parsed
            .entries
            .into_iter()
            .filter_map(|entry| {
                // No link means no fingerprint and nothing to toot.
                let link = entry.links.first().map(|l| l.href.clone())?;

                let title = entry
                    .title
                    .map(|t| t.content)
                    .unwrap_or_else(|| "Untitled".to_string());

                let author = entry
                    .authors
                    .first()
                    .map(|p| p.name.clone())
                    .filter(|name| !name.is_empty());

                let tags: Vec<String> =
                    entry.categories.into_iter().map(|c| c.term).collect();

                Some(FeedItem {
                    title,
                    link,
                    author,
                    tags,
                })
            })
            .collect();

        Ok(items)
    }
}

impl Default for RssAtomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedSource for RssAtomSource {
    fn fetch_entries(&self, uri: &str) -> TootResult<Vec<FeedItem>> {
        let response = self
            .client
            .get(uri)
            .send()
            .map_err(|e| TootError::Fetch(e.to_string()))?;
        let bytes = response
            .bytes()
            .map_err(|e| TootError::Fetch(e.to_string()))?;

        Self::items_from_bytes(&bytes)
    }
}
