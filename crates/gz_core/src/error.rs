use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API request failed with status code: {0}")]
    Status(u16),

    #[error("External error: {0}")]
    External(#[from] anyhow::Error),
}

impl Error {
    /// Status code of a non-success response, if that is what failed.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Status(code) => Some(*code),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
