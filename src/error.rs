use thiserror::Error;

/// Errors raised while harvesting or extracting listings.
#[derive(Debug, Error)]
pub enum ScoutError {
    /// No seed link or link list was supplied
    #[error("not found: no listing links to process")]
    NotFound,

    /// A page could not be fetched. Aborts the whole run.
    #[error("failed to fetch {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Headless browser could not be started
    #[error("browser error: {0}")]
    Browser(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// HTTP client could not be built
    #[error("HTTP client error: {0}")]
    HttpClient(#[source] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScoutError {
    pub fn transport(
        url: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Transport {
            url: url.into(),
            source: source.into(),
        }
    }
}

pub type ScoutResult<T> = Result<T, ScoutError>;
