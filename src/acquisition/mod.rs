//! Document acquisition: turning a location into page markup.
//!
//! This is the only part of the crate that performs I/O. Failures here are
//! reported as [`AcquisitionError`] and extraction never runs.

pub mod browser;
pub mod http;

use crate::config::AcquisitionConfig;
use crate::document::RawPage;
use crate::error::AcquisitionError;
use std::path::{Path, PathBuf};
use url::Url;

/// Where a page comes from
#[derive(Debug, Clone)]
pub enum PageSource {
    /// Rendered by a browser through WebDriver
    Browser(String),
    /// Fetched as static HTML over HTTP
    Http(String),
    /// Read from a local HTML file
    File(PathBuf),
    /// Markup already in hand, with the URL it came from
    Html { url: String, html: String },
}

impl PageSource {
    /// Human-readable location, for logging
    pub fn location(&self) -> String {
        match self {
            PageSource::Browser(url) | PageSource::Http(url) => url.clone(),
            PageSource::File(path) => path.display().to_string(),
            PageSource::Html { url, .. } => url.clone(),
        }
    }
}

/// Acquires the markup for `source`
pub async fn acquire(
    source: &PageSource,
    config: &AcquisitionConfig,
) -> Result<RawPage, AcquisitionError> {
    match source {
        PageSource::Browser(url) => {
            validate_url(url)?;
            browser::acquire(url, config).await
        }
        PageSource::Http(url) => {
            validate_url(url)?;
            http::acquire(url, config).await
        }
        PageSource::File(path) => read_file(path).await,
        PageSource::Html { url, html } => Ok(RawPage::new(validate_url(url)?, html.clone())),
    }
}

fn validate_url(url: &str) -> Result<Url, AcquisitionError> {
    Url::parse(url).map_err(|_| AcquisitionError::InvalidUrl {
        url: url.to_string(),
    })
}

/// Reads a local file; its document URL is the `file://` URL of the canonical path
async fn read_file(path: &Path) -> Result<RawPage, AcquisitionError> {
    let io_error = |source: std::io::Error| AcquisitionError::Io {
        path: path.display().to_string(),
        source,
    };

    let canonical = tokio::fs::canonicalize(path).await.map_err(io_error)?;
    let html = tokio::fs::read_to_string(&canonical)
        .await
        .map_err(io_error)?;
    let url = Url::from_file_path(&canonical).map_err(|_| AcquisitionError::InvalidUrl {
        url: canonical.display().to_string(),
    })?;

    ::log::info!("Read {} bytes from {}", html.len(), url);
    Ok(RawPage::new(url, html))
}
