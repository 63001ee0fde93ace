use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::domain::Article;
use crate::errors::TopReadResult;
use crate::services::ranker;
use crate::sources::FeedSource;

pub struct FetchService<S: FeedSource> {
    source: S,
    api_domain: String,
}

impl<S: FeedSource> FetchService<S> {
    pub fn new(source: S, api_domain: &str) -> Self {
        Self {
            source,
            api_domain: api_domain.to_string(),
        }
    }

    /// Featured feed endpoint for `locale` on the UTC day of `now`
    pub fn endpoint_url(&self, locale: &str, now: DateTime<Utc>) -> String {
        format!(
            "https://{}.{}/api/rest_v1/feed/featured/{}",
            locale,
            self.api_domain,
            now.format("%Y/%m/%d")
        )
    }

    /// Fetch today's most-read list and return its top `maximum` articles.
    /// Network and decoding failures propagate.
    pub fn top_read(
        &self,
        locale: &str,
        now: DateTime<Utc>,
        maximum: usize,
    ) -> TopReadResult<Vec<Article>> {
        let url = self.endpoint_url(locale, now);
        let articles = self.source.fetch_feed(&url)?.into_articles()?;
        debug!("Feed returned {} most-read articles", articles.len());

        let ranked = ranker::rank(articles, maximum);
        info!("Selected {} articles for {}", ranked.len(), locale);

        Ok(ranked)
    }
}
