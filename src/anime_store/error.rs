use thiserror::Error;

/// Errors that can occur while loading, querying or persisting the catalog.
#[derive(Debug, Error)]
pub enum AnimeStoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Anime not found: {0}")]
    NotFound(String),
}

pub type AnimeStoreResult<T> = std::result::Result<T, AnimeStoreError>;
