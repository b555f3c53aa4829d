//! The navigable document tree handed to the extractor.
//!
//! Every acquisition path (browser, HTTP, local file, inline markup) ends in a
//! [`RawPage`], and every `RawPage` is parsed the same way. Locators only ever
//! see a [`PageDocument`].

use crate::error::DocumentError;
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// Markup as delivered by an acquisition path, before parsing
#[derive(Debug, Clone)]
pub struct RawPage {
    /// Final URL after redirects
    pub url: Url,
    pub html: String,
}

impl RawPage {
    pub fn new(url: Url, html: String) -> Self {
        Self { url, html }
    }
}

/// A parsed page and the URL it resolved to
pub struct PageDocument {
    url: Url,
    html: Html,
}

impl PageDocument {
    /// Parses acquired markup, refusing sources that cannot yield a tree
    pub fn parse(page: RawPage) -> Result<Self, DocumentError> {
        if page.html.trim().is_empty() {
            return Err(DocumentError::UnusableDocument {
                url: page.url.to_string(),
                reason: "page source is empty".to_string(),
            });
        }

        let html = Html::parse_document(&page.html);
        if !html.errors.is_empty() {
            ::log::trace!(
                "{} parse errors recovered in {}",
                html.errors.len(),
                page.url
            );
        }

        Ok(Self {
            url: page.url,
            html,
        })
    }

    /// Parses an inline HTML string against a URL string
    pub fn from_html(url: &str, html: &str) -> Result<Self, DocumentError> {
        let url = Url::parse(url).map_err(|e| DocumentError::UnusableDocument {
            url: url.to_string(),
            reason: format!("invalid document URL: {}", e),
        })?;
        Self::parse(RawPage::new(url, html.to_string()))
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn html(&self) -> &Html {
        &self.html
    }

    /// Elements matching a selector, in document order
    pub fn select<'a>(&'a self, selector: &'a Selector) -> impl Iterator<Item = ElementRef<'a>> {
        self.html.select(selector)
    }

    /// Resolves a possibly relative reference against the document URL
    pub fn resolve(&self, reference: &str) -> String {
        match self.url.join(reference) {
            Ok(resolved) => resolved.to_string(),
            Err(_) => reference.to_string(),
        }
    }
}
