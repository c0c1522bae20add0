use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Failed to load page: {0}")]
    ContentLoad(String),

    #[error("Page too large ({size} bytes) for URL: {url}")]
    PageTooLarge { size: usize, url: String },

    #[error("Invalid post source: {0}")]
    PostSource(String),
}

pub type Result<T> = std::result::Result<T, Error>;
