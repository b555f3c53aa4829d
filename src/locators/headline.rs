use super::{SelectorSet, element_text};
use crate::document::PageDocument;

/// The two headings a page leads with
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headings {
    pub headline: String,
    pub subheadline: String,
}

/// Picks headline and subheadline by heading level priority (h1, then h2, then h3)
#[derive(Debug, Clone)]
pub struct HeadlineLocator {
    h1: SelectorSet,
    h2: SelectorSet,
    h3: SelectorSet,
}

impl Default for HeadlineLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlineLocator {
    pub fn new() -> Self {
        Self {
            h1: SelectorSet::single("h1", "headline"),
            h2: SelectorSet::single("h2", "headline"),
            h3: SelectorSet::single("h3", "headline"),
        }
    }

    /// Falls back to `title` for the headline when no heading has text
    pub fn locate(&self, doc: &PageDocument, title: &str) -> Headings {
        let h1 = heading_texts(doc, &self.h1, 2);
        let h2 = heading_texts(doc, &self.h2, 1);
        let h3 = heading_texts(doc, &self.h3, 1);

        let headline = h1
            .first()
            .or(h2.first())
            .or(h3.first())
            .cloned()
            .unwrap_or_else(|| title.to_string());

        let subheadline = h1
            .get(1)
            .or(h2.first())
            .or(h3.first())
            .cloned()
            .unwrap_or_default();

        ::log::debug!("Headline: {:?}, subheadline: {:?}", headline, subheadline);
        Headings {
            headline,
            subheadline,
        }
    }
}

/// Up to `limit` non-empty heading texts in document order
fn heading_texts(doc: &PageDocument, level: &SelectorSet, limit: usize) -> Vec<String> {
    level
        .matches(doc)
        .map(element_text)
        .filter(|text| !text.is_empty())
        .take(limit)
        .collect()
}
