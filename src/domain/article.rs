use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub description: Option<String>,
    pub views: u64,
    pub thumbnail_url: Option<String>,
    pub page_url: String,
}

impl Article {
    pub fn new(title: String, page_url: String, views: u64) -> Self {
        Self {
            title,
            description: None,
            views,
            thumbnail_url: None,
            page_url,
        }
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn with_thumbnail(mut self, thumbnail_url: Option<String>) -> Self {
        self.thumbnail_url = thumbnail_url;
        self
    }

    /// Description to display; absent descriptions render as empty text.
    pub fn description_or_empty(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}
