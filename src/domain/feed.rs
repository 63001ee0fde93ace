//! Wire model of the REST `feed/featured` response. Only the fields the
//! top-read list needs are declared; everything else is ignored.

use serde::Deserialize;

use super::Article;
use crate::errors::{TopReadError, TopReadResult};

#[derive(Debug, Clone, Deserialize)]
pub struct FeaturedFeed {
    pub mostread: Option<MostRead>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MostRead {
    #[serde(default)]
    pub articles: Vec<FeedArticle>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedArticle {
    pub title: String,
    pub normalizedtitle: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub views: u64,
    pub thumbnail: Option<Thumbnail>,
    pub content_urls: ContentUrls,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Thumbnail {
    pub source: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentUrls {
    pub desktop: PageUrls,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageUrls {
    pub page: String,
}

impl FeaturedFeed {
    /// Most-read articles in feed order.
    pub fn into_articles(self) -> TopReadResult<Vec<Article>> {
        let mostread = self
            .mostread
            .ok_or_else(|| TopReadError::FeedParse("feed has no mostread section".to_string()))?;

        Ok(mostread.articles.into_iter().map(Article::from).collect())
    }
}

impl From<FeedArticle> for Article {
    fn from(raw: FeedArticle) -> Self {
        let title = raw.normalizedtitle.unwrap_or(raw.title);

        Article::new(title, raw.content_urls.desktop.page, raw.views)
            .with_description(raw.description)
            .with_thumbnail(raw.thumbnail.map(|t| t.source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "tfa": {"title": "Ignored"},
        "mostread": {
            "date": "2024-05-01Z",
            "articles": [
                {
                    "views": 123456,
                    "rank": 3,
                    "title": "Octavia_E._Butler",
                    "normalizedtitle": "Octavia E. Butler",
                    "description": "American science fiction writer",
                    "thumbnail": {"source": "https://upload.wikimedia.org/b.jpg", "width": 320},
                    "content_urls": {
                        "desktop": {"page": "https://en.wikipedia.org/wiki/Octavia_E._Butler"},
                        "mobile": {"page": "https://en.m.wikipedia.org/wiki/Octavia_E._Butler"}
                    }
                },
                {
                    "views": 42,
                    "title": "Main_Page",
                    "content_urls": {"desktop": {"page": "https://en.wikipedia.org/wiki/Main_Page"}}
                }
            ]
        }
    }"#;

    #[test]
    fn test_parse_mostread_articles() {
        let feed: FeaturedFeed = serde_json::from_str(SAMPLE).unwrap();
        let articles = feed.into_articles().unwrap();

        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].title, "Octavia E. Butler");
        assert_eq!(articles[0].views, 123456);
        assert_eq!(
            articles[0].thumbnail_url.as_deref(),
            Some("https://upload.wikimedia.org/b.jpg")
        );
        assert_eq!(
            articles[0].page_url,
            "https://en.wikipedia.org/wiki/Octavia_E._Butler"
        );
    }

    #[test]
    fn test_optional_fields_absent() {
        let feed: FeaturedFeed = serde_json::from_str(SAMPLE).unwrap();
        let articles = feed.into_articles().unwrap();

        // Falls back to the raw title without a normalized one
        assert_eq!(articles[1].title, "Main_Page");
        assert_eq!(articles[1].description, None);
        assert_eq!(articles[1].description_or_empty(), "");
        assert_eq!(articles[1].thumbnail_url, None);
    }

    #[test]
    fn test_missing_mostread_is_parse_error() {
        let feed: FeaturedFeed = serde_json::from_str(r#"{"tfa": {}}"#).unwrap();

        assert!(matches!(feed.into_articles(), Err(TopReadError::FeedParse(_))));
    }
}
