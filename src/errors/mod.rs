use thiserror::Error;

#[derive(Error, Debug)]
pub enum TopReadError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Invocation errors
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    // Network errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    // Parsing errors
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Feed parsing failed: {0}")]
    FeedParse(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type TopReadResult<T> = Result<T, TopReadError>;
