use super::{SelectorSet, attr_text, element_text};
use crate::config::{CtaConfig, LengthBand};
use crate::document::PageDocument;
use crate::normalize::char_len;
use scraper::ElementRef;

/// Finds call-to-action texts on buttons, action links and CTA-styled elements
#[derive(Debug, Clone)]
pub struct CtaLocator {
    selectors: SelectorSet,
    band: LengthBand,
}

impl CtaLocator {
    pub fn new(config: &CtaConfig) -> Self {
        Self {
            selectors: SelectorSet::compile(&config.selectors, "cta"),
            band: config.band,
        }
    }

    /// Candidate texts from every selector pass, in pass order
    pub fn locate(&self, doc: &PageDocument) -> Vec<String> {
        let ctas: Vec<String> = self
            .selectors
            .matches(doc)
            .filter_map(candidate_text)
            .filter(|text| self.band.accepts(char_len(text)))
            .collect();

        ::log::debug!("CTA locator found {} candidates", ctas.len());
        ctas
    }
}

/// Visible text, then `aria-label`, then `title`, then `value`
fn candidate_text(element: ElementRef) -> Option<String> {
    let text = element_text(element);
    if !text.is_empty() {
        return Some(text);
    }

    attr_text(element, "aria-label")
        .or_else(|| attr_text(element, "title"))
        .or_else(|| attr_text(element, "value"))
}
