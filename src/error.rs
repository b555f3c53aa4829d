//! Typed errors for acquisition, configuration and document parsing.
//!
//! A locator finding nothing is not an error; it shows up as an empty field in
//! the resulting record.

use thiserror::Error;

/// Errors raised while turning acquired markup into a usable document tree.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// No usable tree could be built for the page
    #[error("unusable document for {url}: {reason}")]
    UnusableDocument { url: String, reason: String },
}

/// Errors raised while fetching a page, before extraction runs.
#[derive(Debug, Error)]
pub enum AcquisitionError {
    /// The requested location could not be parsed as a URL
    #[error("invalid URL: {url}")]
    InvalidUrl { url: String },

    /// No WebDriver server accepted a session
    #[error("could not connect to a WebDriver server at {webdriver_url}")]
    WebDriverUnavailable { webdriver_url: String },

    /// The browser failed to navigate or hand back the page
    #[error("browser failed while {context} {url}: {source}")]
    Browser {
        context: &'static str,
        url: String,
        #[source]
        source: fantoccini::error::CmdError,
    },

    /// The HTTP request itself failed
    #[error("HTTP error fetching {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status
    #[error("HTTP status {status} fetching {url}")]
    Status { url: String, status: u16 },

    /// Reading a local file failed
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Navigation did not finish in time
    #[error("timeout acquiring {url} after {seconds:.1}s")]
    Timeout { url: String, seconds: f64 },
}

/// Errors raised while loading an extractor configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Top-level error for the acquire-then-extract flow.
#[derive(Debug, Error)]
pub enum Error {
    #[error("acquisition failed: {0}")]
    Acquisition(#[from] AcquisitionError),

    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}
