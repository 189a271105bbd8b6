use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("catalog returned HTTP {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
}
