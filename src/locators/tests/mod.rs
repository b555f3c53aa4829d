mod media_tests;
mod text_feature_tests;

use crate::document::PageDocument;

/// Parses a fixture under a fixed landing page URL
pub(crate) fn doc(html: &str) -> PageDocument {
    PageDocument::from_html("https://example.com/landing/", html).unwrap()
}
