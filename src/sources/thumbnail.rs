use reqwest::blocking::Client;

use crate::errors::TopReadResult;
use crate::sources::traits::ThumbnailLoader;
use crate::sources::wikipedia::build_client;

pub struct HttpThumbnailLoader {
    client: Client,
}

impl HttpThumbnailLoader {
    pub fn new(timeout_secs: u64) -> Self {
        Self {
            client: build_client(timeout_secs),
        }
    }
}

impl Default for HttpThumbnailLoader {
    fn default() -> Self {
        Self::new(30)
    }
}

impl ThumbnailLoader for HttpThumbnailLoader {
    fn load(&self, url: &str) -> TopReadResult<Vec<u8>> {
        let response = self.client.get(url).send()?.error_for_status()?;
        Ok(response.bytes()?.to_vec())
    }
}
