use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use crate::domain::FeaturedFeed;
use crate::errors::TopReadResult;
use crate::sources::traits::FeedSource;

const USER_AGENT: &str = concat!("topread/", env!("CARGO_PKG_VERSION"));

pub struct WikipediaSource {
    client: Client,
}

impl WikipediaSource {
    pub fn new(timeout_secs: u64) -> Self {
        Self {
            client: build_client(timeout_secs),
        }
    }
}

/// Shared client setup for the feed and thumbnail loaders.
pub(crate) fn build_client(timeout_secs: u64) -> Client {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .unwrap_or_else(|_| Client::new())
}

impl Default for WikipediaSource {
    fn default() -> Self {
        Self::new(30)
    }
}

impl FeedSource for WikipediaSource {
    fn fetch_feed(&self, url: &str) -> TopReadResult<FeaturedFeed> {
        debug!("GET {}", url);

        let response = self.client.get(url).send()?.error_for_status()?;
        let bytes = response.bytes()?;
        let feed = serde_json::from_slice(&bytes)?;

        Ok(feed)
    }
}
