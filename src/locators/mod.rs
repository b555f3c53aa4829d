//! Field locators: rules that propose candidate values for one feature.
//!
//! Each locator is compiled once from its slice of [`crate::config::ExtractorConfig`]
//! and then run against any number of documents. Locators only accumulate
//! candidates; bounding happens in [`crate::normalize`].

pub mod audience;
pub mod content;
pub mod cta;
pub mod headline;
pub mod media;
pub mod pricing;
pub mod text;

#[cfg(test)]
mod tests;

use crate::document::PageDocument;
use crate::normalize::collapse_whitespace;
use scraper::{ElementRef, Selector};

/// An ordered table of compiled selector patterns
#[derive(Debug, Clone, Default)]
pub struct SelectorSet {
    selectors: Vec<Selector>,
}

impl SelectorSet {
    /// Compiles every pattern, skipping (and logging) the ones that do not parse
    pub fn compile(patterns: &[String], locator: &str) -> Self {
        let mut selectors = Vec::with_capacity(patterns.len());
        for pattern in patterns {
            match Selector::parse(pattern) {
                Ok(selector) => selectors.push(selector),
                Err(e) => {
                    ::log::warn!(
                        "Skipping malformed {} selector {:?}: {:?}",
                        locator,
                        pattern,
                        e
                    );
                }
            }
        }
        let set = Self { selectors };
        if set.is_empty() && !patterns.is_empty() {
            ::log::warn!("No usable {} selectors; the locator will find nothing", locator);
        }
        set
    }

    /// Compiles a single pattern
    pub fn single(pattern: &str, locator: &str) -> Self {
        Self::compile(&[pattern.to_string()], locator)
    }

    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }

    /// Every element matched by every pattern, pattern by pattern.
    ///
    /// Patterns are evaluated independently, so an element matched by two
    /// patterns is yielded twice.
    pub fn matches<'a>(&'a self, doc: &'a PageDocument) -> impl Iterator<Item = ElementRef<'a>> {
        self.selectors
            .iter()
            .flat_map(move |selector| doc.select(selector))
    }

    /// The first element of the first pattern that matches anything
    pub fn first_match<'a>(&'a self, doc: &'a PageDocument) -> Option<ElementRef<'a>> {
        self.selectors
            .iter()
            .find_map(|selector| doc.select(selector).next())
    }

    /// Whether any pattern matches any element
    pub fn any_match(&self, doc: &PageDocument) -> bool {
        self.first_match(doc).is_some()
    }
}

/// A keyword vocabulary matched by case-insensitive substring
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    terms: Vec<String>,
}

impl Vocabulary {
    pub fn new(terms: &[String]) -> Self {
        Self {
            terms: terms
                .iter()
                .map(|term| term.to_lowercase())
                .filter(|term| !term.is_empty())
                .collect(),
        }
    }

    /// Whether `text` contains at least one term
    pub fn matches_any(&self, text: &str) -> bool {
        self.first_match(text).is_some()
    }

    /// The earliest term in vocabulary order that `text` contains
    pub fn first_match(&self, text: &str) -> Option<&str> {
        let lowered = text.to_lowercase();
        self.terms
            .iter()
            .find(|term| lowered.contains(term.as_str()))
            .map(String::as_str)
    }
}

/// Visible text content of an element, whitespace collapsed
pub fn element_text(element: ElementRef) -> String {
    collapse_whitespace(&element.text().collect::<String>())
}

/// A trimmed, non-empty attribute value
pub fn attr_text(element: ElementRef, name: &str) -> Option<String> {
    element
        .value()
        .attr(name)
        .map(collapse_whitespace)
        .filter(|value| !value.is_empty())
}

/// Text of every element matched by the scan selector, in document order
pub fn scan_texts(doc: &PageDocument, scan: &SelectorSet) -> Vec<String> {
    let texts: Vec<String> = scan
        .matches(doc)
        .map(element_text)
        .filter(|text| !text.is_empty())
        .collect();
    ::log::trace!("Lexical scan collected {} text elements", texts.len());
    texts
}
