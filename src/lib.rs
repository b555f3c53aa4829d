//! Marketing feature extraction for ad and landing pages.
//!
//! A page is acquired (browser, HTTP, file or inline markup), parsed into a
//! [`PageDocument`], and run through an [`Extractor`] that produces one
//! [`PageFeatureRecord`]: headline, calls to action, offers, urgency cues,
//! pricing, social proof, trust indicators, images, audience and a few
//! structural flags.

pub mod acquisition;
pub mod config;
pub mod document;
pub mod error;
pub mod extractor;
pub mod filter;
pub mod locators;
pub mod normalize;
pub mod results;
pub mod utils;

// Re-export commonly used types for convenience
pub use acquisition::PageSource;
pub use document::{PageDocument, RawPage};
pub use error::Error;
pub use extractor::{Extractor, extract};
pub use results::{ImageRef, PageFeatureRecord, PagePair};

use config::{AcquisitionConfig, ExtractorConfig};
use std::path::Path;

/// Builder that acquires pages and extracts their features
pub struct Analyzer {
    acquisition: AcquisitionConfig,
    config: ExtractorConfig,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer {
    /// Create a new Analyzer with default vocabularies and `WEBDRIVER_URL` honoured
    pub fn new() -> Self {
        Self {
            acquisition: AcquisitionConfig::from_env(),
            config: ExtractorConfig::default(),
        }
    }

    /// Set the extractor configuration
    pub fn with_config(mut self, config: ExtractorConfig) -> Self {
        self.config = config;
        self
    }

    /// Load the extractor configuration from a JSON file
    pub fn with_config_file(self, path: impl AsRef<Path>) -> Result<Self, Error> {
        let config = ExtractorConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// Load the extractor configuration from a JSON string
    pub fn with_config_str(self, config_str: &str) -> Result<Self, Error> {
        let config = ExtractorConfig::from_json(config_str)?;
        Ok(self.with_config(config))
    }

    /// Set the acquisition settings
    pub fn with_acquisition(mut self, acquisition: AcquisitionConfig) -> Self {
        self.acquisition = acquisition;
        self
    }

    /// Set the WebDriver URL used by browser sources
    pub fn with_webdriver_url(mut self, webdriver_url: impl Into<String>) -> Self {
        self.acquisition.webdriver_url = webdriver_url.into();
        self
    }

    /// Set the navigation timeout in seconds
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.acquisition.timeout_secs = timeout_secs;
        self
    }

    /// Set the post-navigation settle delay for browser sources
    pub fn with_settle_ms(mut self, settle_ms: u64) -> Self {
        self.acquisition.settle_ms = settle_ms;
        self
    }

    /// Acquire one page and extract its feature record
    pub async fn analyze(&self, source: &PageSource) -> Result<PageFeatureRecord, Error> {
        let extractor = Extractor::new(&self.config);
        self.acquire_and_extract(&extractor, source).await
    }

    /// Acquire and extract an ad page and its landing page, one after the other
    pub async fn analyze_pair(
        &self,
        ad: &PageSource,
        landing_page: &PageSource,
    ) -> Result<PagePair, Error> {
        let extractor = Extractor::new(&self.config);

        ::log::info!("Analyzing ad content: {}", ad.location());
        let ad_content = self.acquire_and_extract(&extractor, ad).await?;

        ::log::info!("Analyzing landing page content: {}", landing_page.location());
        let landing_page_content = self.acquire_and_extract(&extractor, landing_page).await?;

        Ok(PagePair::new(ad_content, landing_page_content))
    }

    async fn acquire_and_extract(
        &self,
        extractor: &Extractor,
        source: &PageSource,
    ) -> Result<PageFeatureRecord, Error> {
        let page = acquisition::acquire(source, &self.acquisition).await?;
        // The parsed tree is not Send, so it never lives across an await
        let document = PageDocument::parse(page)?;
        Ok(extractor.extract(&document))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AcquisitionError, DocumentError};

    const AD: &str = r#"
        <html><head><title>Spring Sale</title></head>
        <body><h1>50% off all plans</h1><a class="btn" href="/go">Shop now</a></body></html>
    "#;

    const LANDING: &str = r#"
        <html><head><title>Acme Pricing</title></head>
        <body>
            <h1>Pricing for every team</h1>
            <button>Start free trial</button>
            <button>Talk to sales</button>
            <div class="price">$29/month</div>
        </body></html>
    "#;

    fn inline(url: &str, html: &str) -> PageSource {
        PageSource::Html {
            url: url.to_string(),
            html: html.to_string(),
        }
    }

    #[tokio::test]
    async fn test_analyze_inline_page() {
        let record = Analyzer::new()
            .analyze(&inline("https://acme.example/pricing", LANDING))
            .await
            .unwrap();

        assert_eq!(record.url, "https://acme.example/pricing");
        assert_eq!(record.headline, "Pricing for every team");
        assert_eq!(record.ctas, vec!["Start free trial", "Talk to sales"]);
        assert_eq!(record.pricing, vec!["$29/month"]);
    }

    #[tokio::test]
    async fn test_analyze_pair() {
        let pair = Analyzer::new()
            .analyze_pair(
                &inline("https://ads.example/spring", AD),
                &inline("https://acme.example/pricing", LANDING),
            )
            .await
            .unwrap();

        assert_eq!(pair.ad_content.url, "https://ads.example/spring");
        assert_eq!(pair.ad_content.title, "Spring Sale");
        assert_eq!(pair.ad_content.ctas, vec!["Shop now"]);
        assert_eq!(pair.landing_page_content.url, "https://acme.example/pricing");
        assert_eq!(pair.landing_page_content.title, "Acme Pricing");

        let json = serde_json::to_value(&pair).unwrap();
        assert_eq!(json["adContent"]["headline"], "50% off all plans");
        assert_eq!(json["landingPageContent"]["headline"], "Pricing for every team");
    }

    #[tokio::test]
    async fn test_blank_source_is_unusable() {
        let result = Analyzer::new()
            .analyze(&inline("https://acme.example/", "  \n\t "))
            .await;

        assert!(matches!(
            result,
            Err(Error::Document(DocumentError::UnusableDocument { .. }))
        ));
    }

    #[tokio::test]
    async fn test_invalid_inline_url() {
        let result = Analyzer::new().analyze(&inline("not a url", LANDING)).await;

        assert!(matches!(
            result,
            Err(Error::Acquisition(AcquisitionError::InvalidUrl { .. }))
        ));
    }

    #[tokio::test]
    async fn test_pair_stops_at_first_failure() {
        let result = Analyzer::new()
            .analyze_pair(
                &inline("https://ads.example/", ""),
                &inline("https://acme.example/", LANDING),
            )
            .await;

        assert!(matches!(result, Err(Error::Document(_))));
    }

    #[tokio::test]
    async fn test_config_string_overrides_caps() {
        let analyzer = Analyzer::new()
            .with_config_str(
                r#"{ "cta": { "selectors": ["button"], "band": { "min": 2, "max": 100 }, "cap": 1 } }"#,
            )
            .unwrap();
        let record = analyzer
            .analyze(&inline("https://acme.example/pricing", LANDING))
            .await
            .unwrap();

        assert_eq!(record.ctas, vec!["Start free trial"]);
    }

    #[test]
    fn test_bad_config_string_is_an_error() {
        assert!(matches!(
            Analyzer::new().with_config_str("{ not json"),
            Err(Error::Config(_))
        ));
    }
}
