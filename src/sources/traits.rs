use crate::domain::FeaturedFeed;
use crate::errors::TopReadResult;

#[cfg_attr(test, mockall::automock)]
pub trait FeedSource: Send + Sync {
    /// Fetch and decode the featured feed document at `url`
    fn fetch_feed(&self, url: &str) -> TopReadResult<FeaturedFeed>;
}

#[cfg_attr(test, mockall::automock)]
pub trait ThumbnailLoader: Send + Sync {
    /// Download the image at `url` and return its raw bytes
    fn load(&self, url: &str) -> TopReadResult<Vec<u8>>;
}
