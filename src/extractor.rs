//! Assembles a [`PageFeatureRecord`] from a parsed document.
//!
//! Extraction is synchronous and reads only the document it is given. An
//! [`Extractor`] holds no per-page state, so one instance can serve any number
//! of documents, including from several threads at once.

use crate::config::ExtractorConfig;
use crate::document::PageDocument;
use crate::locators::audience::AudienceLocator;
use crate::locators::content::{ContentLocator, word_count};
use crate::locators::cta::CtaLocator;
use crate::locators::headline::HeadlineLocator;
use crate::locators::media::{ImageLocator, PresenceLocator};
use crate::locators::pricing::PricingLocator;
use crate::locators::text::TextFeatureLocator;
use crate::locators::{SelectorSet, scan_texts};
use crate::normalize::bound;
use crate::results::PageFeatureRecord;

/// Per-field list caps
#[derive(Debug, Clone, Copy)]
struct Caps {
    ctas: usize,
    offers: usize,
    urgency: usize,
    pricing: usize,
    social_proof: usize,
    trust: usize,
    images: usize,
}

/// Every locator, compiled from one configuration
#[derive(Debug)]
pub struct Extractor {
    headline: HeadlineLocator,
    cta: CtaLocator,
    offers: TextFeatureLocator,
    urgency: TextFeatureLocator,
    social_proof: TextFeatureLocator,
    trust: TextFeatureLocator,
    pricing: PricingLocator,
    images: ImageLocator,
    presence: PresenceLocator,
    content: ContentLocator,
    audience: AudienceLocator,
    lexical_scan: SelectorSet,
    caps: Caps,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(&ExtractorConfig::default())
    }
}

impl Extractor {
    /// Compiles selectors, vocabularies and patterns once.
    ///
    /// Malformed selectors or patterns are skipped with a warning; they only
    /// leave their own locator short of matches.
    pub fn new(config: &ExtractorConfig) -> Self {
        Self {
            headline: HeadlineLocator::new(),
            cta: CtaLocator::new(&config.cta),
            offers: TextFeatureLocator::new("offers", &config.offers),
            urgency: TextFeatureLocator::new("urgency", &config.urgency),
            social_proof: TextFeatureLocator::new("social proof", &config.social_proof),
            trust: TextFeatureLocator::new("trust", &config.trust),
            pricing: PricingLocator::new(&config.pricing),
            images: ImageLocator::new(&config.images),
            presence: PresenceLocator::new(&config.presence),
            content: ContentLocator::new(&config.content),
            audience: AudienceLocator::new(&config.audience_keywords),
            lexical_scan: SelectorSet::single(&config.lexical_scan_selector, "lexical scan"),
            caps: Caps {
                ctas: config.cta.cap,
                offers: config.offers.cap,
                urgency: config.urgency.cap,
                pricing: config.pricing.cap,
                social_proof: config.social_proof.cap,
                trust: config.trust.cap,
                images: config.images.cap,
            },
        }
    }

    /// Runs every locator over `doc` and bounds each list field
    pub fn extract(&self, doc: &PageDocument) -> PageFeatureRecord {
        ::log::debug!("Extracting features from {}", doc.url());

        let title = self.content.title(doc);
        let headings = self.headline.locate(doc, &title);
        let body_text = self.content.body_text(doc);
        let scanned = scan_texts(doc, &self.lexical_scan);

        let ctas = bound(self.cta.locate(doc), self.caps.ctas);
        let offers = bound(self.offers.locate(doc, &scanned), self.caps.offers);
        let urgency_cues = bound(self.urgency.locate(doc, &scanned), self.caps.urgency);
        let pricing = bound(self.pricing.locate(doc, &body_text), self.caps.pricing);
        let social_proof = bound(
            self.social_proof.locate(doc, &scanned),
            self.caps.social_proof,
        );
        let trust_indicators = bound(self.trust.locate(doc, &scanned), self.caps.trust);

        let mut images = self.images.locate(doc);
        images.truncate(self.caps.images);

        let target_audience = self
            .audience
            .locate(&title, &headings.headline, &body_text);
        let presence = self.presence.locate(doc);

        let record = PageFeatureRecord {
            url: doc.url().to_string(),
            meta_description: self.content.meta_description(doc),
            headline: headings.headline,
            subheadline: headings.subheadline,
            title,
            ctas,
            offers,
            urgency_cues,
            pricing,
            social_proof,
            trust_indicators,
            images,
            target_audience,
            word_count: word_count(&body_text),
            body_text,
            has_video: presence.has_video,
            has_form: presence.has_form,
            has_chat: presence.has_chat,
        };

        ::log::info!(
            "Extracted {}: {} CTAs, {} offers, {} urgency cues, {} prices, {} images",
            record.url,
            record.ctas.len(),
            record.offers.len(),
            record.urgency_cues.len(),
            record.pricing.len(),
            record.images.len()
        );
        record
    }
}

/// Extracts with the default configuration
pub fn extract(doc: &PageDocument) -> PageFeatureRecord {
    Extractor::default().extract(doc)
}
