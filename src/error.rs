//! Common error types for the lojban bot

use thiserror::Error;

/// Common result type for plugin operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error kinds across the plugin's glue layers. The ranker itself has no
/// error path; everything here belongs to the surrounding commands.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP transport error talking to the jboski mirror (wraps reqwest::Error)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// I/O error while reading a locale catalog file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Locale catalog parse error
    #[error("Catalog error: {0}")]
    Catalog(#[from] serde_json::Error),

    /// Unexpected response from the jboski mirror
    #[error("Proxy error: {0}")]
    Proxy(String),

    /// Failure reported by the morphology backend. Displayed verbatim,
    /// the way the backend phrased it.
    #[error("{0}")]
    Morphology(String),
}
