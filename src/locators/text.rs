//! Two-track locator shared by offers, urgency cues, social proof and trust
//! indicators.
//!
//! The structural track takes elements whose markup names the feature (class,
//! data attributes) and keeps their text when it fits the length band. The
//! lexical track takes already scanned text elements that fit the band and
//! mention at least one vocabulary term. Both tracks feed one candidate list,
//! structural first.

use super::{SelectorSet, Vocabulary, attr_text, element_text};
use crate::config::{LengthBand, TextFeatureConfig};
use crate::document::PageDocument;
use crate::normalize::char_len;
use scraper::{ElementRef, Selector};

#[derive(Debug, Clone)]
pub struct TextFeatureLocator {
    name: &'static str,
    selectors: SelectorSet,
    vocabulary: Vocabulary,
    band: LengthBand,
    image: SelectorSet,
}

impl TextFeatureLocator {
    pub fn new(name: &'static str, config: &TextFeatureConfig) -> Self {
        Self {
            name,
            selectors: SelectorSet::compile(&config.selectors, name),
            vocabulary: Vocabulary::new(&config.keywords),
            band: config.band,
            image: SelectorSet::single("img", name),
        }
    }

    /// Runs both tracks; `scanned` is the output of [`super::scan_texts`]
    pub fn locate(&self, doc: &PageDocument, scanned: &[String]) -> Vec<String> {
        let mut candidates: Vec<String> = self
            .selectors
            .matches(doc)
            .filter_map(|element| self.structural_text(element))
            .filter(|text| self.band.accepts(char_len(text)))
            .collect();
        let structural = candidates.len();

        candidates.extend(
            scanned
                .iter()
                .filter(|text| self.band.accepts(char_len(text)))
                .filter(|text| self.vocabulary.matches_any(text))
                .cloned(),
        );

        ::log::debug!(
            "{} locator found {} structural and {} lexical candidates",
            self.name,
            structural,
            candidates.len() - structural
        );
        candidates
    }

    /// Element text, or the alt text of its first image when it has none
    fn structural_text(&self, element: ElementRef) -> Option<String> {
        let text = element_text(element);
        if !text.is_empty() {
            return Some(text);
        }

        let image = self.image_selector()?;
        element
            .select(image)
            .next()
            .and_then(|img| attr_text(img, "alt"))
    }

    fn image_selector(&self) -> Option<&Selector> {
        self.image.selectors.first()
    }
}
