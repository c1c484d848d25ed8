use thiserror::Error;

#[derive(Error, Debug)]
pub enum TootError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid feed URL: {0}")]
    InvalidUrl(String),

    // Feed errors
    #[error("Feed fetch failed: {0}")]
    Fetch(String),

    #[error("Feed parsing failed: {0}")]
    FeedParse(String),

    // Network errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    // Publish errors
    #[error("Publish failed: {0}")]
    Publish(String),

    // Storage errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type TootResult<T> = Result<T, TootError>;
