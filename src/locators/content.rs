use super::{SelectorSet, attr_text, element_text};
use crate::config::ContentConfig;
use crate::document::PageDocument;
use crate::normalize::truncate_chars;

/// Reads document-level text: title, meta description and main body text
#[derive(Debug, Clone)]
pub struct ContentLocator {
    containers: SelectorSet,
    paragraphs: SelectorSet,
    title: SelectorSet,
    description: SelectorSet,
    og_description: SelectorSet,
    fallback_paragraphs: usize,
    body_text_limit: usize,
}

impl ContentLocator {
    pub fn new(config: &ContentConfig) -> Self {
        Self {
            containers: SelectorSet::compile(&config.selectors, "content"),
            paragraphs: SelectorSet::single("p", "content"),
            title: SelectorSet::single("title", "title"),
            description: SelectorSet::single(r#"meta[name="description"]"#, "meta"),
            og_description: SelectorSet::single(r#"meta[property="og:description"]"#, "meta"),
            fallback_paragraphs: config.fallback_paragraphs,
            body_text_limit: config.body_text_limit,
        }
    }

    pub fn title(&self, doc: &PageDocument) -> String {
        self.title
            .first_match(doc)
            .map(element_text)
            .unwrap_or_default()
    }

    /// `description`, then OpenGraph `og:description`
    pub fn meta_description(&self, doc: &PageDocument) -> String {
        let content = |set: &SelectorSet| {
            set.first_match(doc)
                .and_then(|meta| attr_text(meta, "content"))
        };

        content(&self.description)
            .or_else(|| content(&self.og_description))
            .unwrap_or_default()
    }

    /// Text of the first content container found, else the leading paragraphs
    pub fn body_text(&self, doc: &PageDocument) -> String {
        let mut body = self
            .containers
            .first_match(doc)
            .map(element_text)
            .unwrap_or_default();

        if body.is_empty() {
            ::log::debug!("No content container text, falling back to paragraphs");
            body = self
                .paragraphs
                .matches(doc)
                .map(element_text)
                .filter(|text| !text.is_empty())
                .take(self.fallback_paragraphs)
                .collect::<Vec<_>>()
                .join(" ");
        }

        truncate_chars(&body, self.body_text_limit)
    }
}

/// Words in a text, split on whitespace
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
