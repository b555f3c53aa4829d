use super::{SelectorSet, element_text};
use crate::config::PricingConfig;
use crate::document::PageDocument;
use regex::Regex;

/// Finds currency-bearing fragments in price-marked elements and in the body text
#[derive(Debug, Clone)]
pub struct PricingLocator {
    selectors: SelectorSet,
    currency: Option<Regex>,
    price: Option<Regex>,
}

impl PricingLocator {
    pub fn new(config: &PricingConfig) -> Self {
        Self {
            selectors: SelectorSet::compile(&config.selectors, "pricing"),
            currency: compile_pattern(&config.currency_pattern, "currency"),
            price: compile_pattern(&config.price_pattern, "price"),
        }
    }

    /// Structural matches first, then every price pattern match in `body_text`
    pub fn locate(&self, doc: &PageDocument, body_text: &str) -> Vec<String> {
        let mut pricing = Vec::new();

        if let Some(currency) = &self.currency {
            pricing.extend(
                self.selectors
                    .matches(doc)
                    .map(element_text)
                    .filter(|text| currency.is_match(text)),
            );
        }
        let structural = pricing.len();

        if let Some(price) = &self.price {
            pricing.extend(price.find_iter(body_text).map(|m| m.as_str().to_string()));
        }

        ::log::debug!(
            "pricing locator found {} structural and {} body text candidates",
            structural,
            pricing.len() - structural
        );
        pricing
    }
}

/// A malformed pattern disables only its own track
fn compile_pattern(pattern: &str, name: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(regex) => Some(regex),
        Err(e) => {
            ::log::warn!("Skipping malformed {} pattern {:?}: {}", name, pattern, e);
            None
        }
    }
}
