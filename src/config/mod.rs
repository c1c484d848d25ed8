use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::domain::FeedConfig;
use crate::errors::{TootError, TootResult};

/// Runtime settings, read once from the environment at startup.
/// Variable names and defaults match the deployment's .env contract.
#[derive(Debug, Clone)]
pub struct Config {
    pub hash_dir: PathBuf,
    pub include_author: bool,
    pub cw_tag: String,
    pub mastodon_url: String,
    pub mastodon_token: String,
    pub visibility: String,
    pub dry_run: bool,
    pub skip_tags: Vec<String>,
    pub post_delay: Duration,
}

impl Config {
    /// Get the directory where the executable is located
    fn exe_dir() -> Option<PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    pub fn from_env() -> TootResult<Self> {
        // Try to load .env from executable's directory first
        if let Some(dir) = Self::exe_dir() {
            let env_path = dir.join(".env");
            if env_path.exists() {
                dotenvy::from_path(&env_path).ok();
            }
        }
        // Fall back to current directory
        dotenvy::dotenv().ok();

        let hash_dir = PathBuf::from(
            std::env::var("HASH_DIR").unwrap_or_else(|_| "/hashdir".to_string()),
        );

        let include_author = std::env::var("INCLUDE_AUTHOR")
            .map(|v| parse_flag(&v))
            .unwrap_or(true);

        // Posts with this tag will toot with a content warning
        let cw_tag =
            std::env::var("CW_TAG").unwrap_or_else(|_| "content-warning".to_string());

        let mastodon_url = std::env::var("MASTODON_URL")
            .unwrap_or_else(|_| "https://mastodon.social".to_string());

        let mastodon_token = std::env::var("MASTODON_TOKEN").unwrap_or_default();

        let visibility =
            std::env::var("MASTODON_VISIBILITY").unwrap_or_else(|_| "public".to_string());

        let dry_run = std::env::var("DRY_RUN")
            .map(|v| v.eq_ignore_ascii_case("y"))
            .unwrap_or(false);

        let skip_tags = std::env::var("SKIP_TAGS")
            .map(|v| parse_skip_tags(&v))
            .unwrap_or_default();

        let post_delay = match std::env::var("POST_DELAY") {
            Ok(v) => Duration::from_secs(v.parse().map_err(|_| {
                TootError::Config(format!("POST_DELAY is not a number of seconds: {}", v))
            })?),
            Err(_) => Duration::from_secs(1),
        };

        Ok(Self {
            hash_dir,
            include_author,
            cw_tag,
            mastodon_url,
            mastodon_token,
            visibility,
            dry_run,
            skip_tags,
            post_delay,
        })
    }
}

/// Wider than the historical .env contract, which compared
/// INCLUDE_AUTHOR against the exact string "True": "true" and "1"
/// also enable the flag.
fn parse_flag(value: &str) -> bool {
    value.eq_ignore_ascii_case("true") || value == "1"
}

/// Skip tags are lower-cased here; everywhere else tags are compared
/// case-sensitively.
fn parse_skip_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

#[derive(Debug, Deserialize)]
struct FeedsFile {
    #[serde(default)]
    feeds: Vec<FeedConfig>,
}

/// Load the `[[feeds]]` list from a TOML file and validate each URI.
pub fn load_feeds(path: &Path) -> TootResult<Vec<FeedConfig>> {
    let content = fs::read_to_string(path)
        .map_err(|e| TootError::Config(format!("cannot read {}: {}", path.display(), e)))?;

    let parsed: FeedsFile = toml::from_str(&content)
        .map_err(|e| TootError::Config(format!("{}: {}", path.display(), e)))?;

    for feed in &parsed.feeds {
        Url::parse(&feed.uri).map_err(|_| TootError::InvalidUrl(feed.uri.clone()))?;
    }

    Ok(parsed.feeds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE_FEEDS: &str = r#"
[[feeds]]
uri = "https://example.com/feed.xml"
tags = ["blog", "rust"]
sensitive = false

[[feeds]]
uri = "https://other.example.com/atom.xml"
sensitive = true
"#;

    #[test]
    fn test_load_feeds_with_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE_FEEDS.as_bytes()).unwrap();

        let feeds = load_feeds(file.path()).unwrap();

        assert_eq!(feeds.len(), 2);
        assert_eq!(feeds[0].uri, "https://example.com/feed.xml");
        assert_eq!(feeds[0].tags, vec!["blog", "rust"]);
        assert!(!feeds[0].sensitive);
        assert!(feeds[1].tags.is_empty());
        assert!(feeds[1].sensitive);
    }

    #[test]
    fn test_load_feeds_rejects_invalid_uri() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[[feeds]]\nuri = \"not a url\"\n").unwrap();

        let err = load_feeds(file.path()).unwrap_err();
        assert!(matches!(err, TootError::InvalidUrl(_)));
    }

    #[test]
    fn test_load_feeds_missing_file_is_config_error() {
        let err = load_feeds(Path::new("/no/such/feeds.toml")).unwrap_err();
        assert!(matches!(err, TootError::Config(_)));
    }

    #[test]
    fn test_empty_feeds_file_is_ok() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"").unwrap();

        assert!(load_feeds(file.path()).unwrap().is_empty());
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("True"));
        assert!(parse_flag("true"));
        assert!(parse_flag("1"));
        assert!(!parse_flag("False"));
        assert!(!parse_flag("N"));
    }

    #[test]
    fn test_parse_skip_tags_lowercases_and_drops_empties() {
        assert_eq!(parse_skip_tags("Meta, Internal,"), vec!["meta", "internal"]);
        assert!(parse_skip_tags("").is_empty());
    }
}
