use thiserror::Error;

#[derive(Error, Debug)]
pub enum DexError {
    #[error("HTTP status {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Summary URL has no identifier segment: {0}")]
    InvalidSummaryUrl(String),
}

pub type Result<T> = std::result::Result<T, DexError>;
