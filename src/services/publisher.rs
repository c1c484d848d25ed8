use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};

use crate::domain::Toot;
use crate::errors::{TootError, TootResult};

#[cfg_attr(test, mockall::automock)]
pub trait StatusPublisher: Send + Sync {
    /// Send one toot. Failure is per-post: callers log and move on.
    fn publish(&self, toot: &Toot) -> TootResult<()>;
}

/// Posts statuses to a Mastodon-compatible API.
///
/// One instance per run; the underlying client keeps connections
/// alive across posts. Success is HTTP 200 exactly.
pub struct MastodonPublisher {
    client: Client,
    statuses_url: String,
    dry_run: bool,
}

impl MastodonPublisher {
    pub fn new(base_url: &str, token: &str, dry_run: bool) -> TootResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| {
                TootError::Config("API token is not a valid header value".to_string())
            })?,
        );

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            statuses_url: statuses_url(base_url),
            dry_run,
        })
    }
}

fn statuses_url(base_url: &str) -> String {
    format!("{}/api/v1/statuses", base_url.trim_end_matches('/'))
}

impl StatusPublisher for MastodonPublisher {
    fn publish(&self, toot: &Toot) -> TootResult<()> {
        if self.dry_run {
            println!("------");
            println!("{}", toot.status);
            println!("{}", serde_json::to_string_pretty(toot).unwrap_or_default());
            println!("------");
            return Ok(());
        }

        let response = self.client.post(&self.statuses_url).form(toot).send()?;

        let status = response.status();
        if status == reqwest::StatusCode::OK {
            Ok(())
        } else {
            Err(TootError::Publish(format!("HTTP {}", status)))
        }
    }
}
