use thiserror::Error;

/// Failures the library surfaces to the caller.
///
/// Only `CatalogStatus`/`Http`/`Decode` coming out of the catalog client are
/// meant to abort a run; page-level problems are degraded to "unavailable"
/// before they ever become a `ScoutError`.
#[derive(Debug, Error)]
pub enum ScoutError {
    #[error("skills API failed: {status} {body}")]
    CatalogStatus { status: u16, body: String },

    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid response payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    #[error("config error: {0}")]
    Config(String),

    #[error("export failed: {0}")]
    Export(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ScoutError {
    /// Build a `CatalogStatus`, keeping at most 200 chars of the response body.
    pub fn catalog_status(status: u16, body: &str) -> Self {
        ScoutError::CatalogStatus {
            status,
            body: body.chars().take(200).collect(),
        }
    }
}

pub type ScoutResult<T> = std::result::Result<T, ScoutError>;
