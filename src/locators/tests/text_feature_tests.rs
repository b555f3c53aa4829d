use super::doc;
use crate::config::{ExtractorConfig, LengthBand, PricingConfig, TextFeatureConfig};
use crate::extract;
use crate::locators::pricing::PricingLocator;
use crate::locators::text::TextFeatureLocator;
use crate::locators::{SelectorSet, Vocabulary, scan_texts};

#[cfg(test)]
mod vocabulary_tests {
    use super::*;

    fn vocabulary(terms: &[&str]) -> Vocabulary {
        let terms: Vec<String> = terms.iter().map(|t| t.to_string()).collect();
        Vocabulary::new(&terms)
    }

    #[test]
    fn test_case_insensitive_substring() {
        let vocab = vocabulary(&["Limited Time", "hurry"]);
        assert!(vocab.matches_any("Offer ends soon, LIMITED TIME only"));
        assert!(vocab.matches_any("hurry!"));
        assert!(!vocab.matches_any("plenty of time"));
    }

    #[test]
    fn test_first_match_follows_vocabulary_order() {
        let vocab = vocabulary(&["developer", "enterprise"]);
        assert_eq!(
            vocab.first_match("Enterprise-grade tools for every developer"),
            Some("developer")
        );
    }

    #[test]
    fn test_empty_terms_never_match() {
        let vocab = vocabulary(&[""]);
        assert!(!vocab.matches_any("anything"));
    }
}

#[cfg(test)]
mod selector_set_tests {
    use super::*;

    #[test]
    fn test_malformed_patterns_are_skipped() {
        let patterns = vec!["p[".to_string(), "li".to_string()];
        let set = SelectorSet::compile(&patterns, "test");
        let page = doc("<p>skipped</p><li>kept</li>");

        assert!(!set.is_empty());
        assert_eq!(scan_texts(&page, &set), vec!["kept"]);
    }

    #[test]
    fn test_all_malformed_patterns_leave_an_empty_set() {
        let set = SelectorSet::compile(&["p[".to_string(), "::".to_string()], "test");
        assert!(set.is_empty());
        assert!(!set.any_match(&doc("<p>anything</p>")));
    }
}

#[cfg(test)]
mod offer_and_urgency_tests {
    use super::*;

    #[test]
    fn test_one_sentence_feeds_several_features() {
        let text = "Get 30% off your first order — limited time";
        let record = extract(&doc(&format!("<p>{}</p>", text)));

        assert_eq!(record.offers, vec![text]);
        assert_eq!(record.urgency_cues, vec![text]);
    }

    #[test]
    fn test_nested_elements_with_identical_text_collapse() {
        let record = extract(&doc(
            "<div><p>Huge sale on everything this week</p></div>",
        ));
        assert_eq!(record.offers, vec!["Huge sale on everything this week"]);
    }

    #[test]
    fn test_offer_length_band() {
        let long = format!("Free {}", "words ".repeat(60));
        let record = extract(&doc(&format!("<p>50% off</p><p>{}</p>", long)));
        assert!(record.offers.is_empty());
    }

    #[test]
    fn test_urgency_requires_under_two_hundred_characters() {
        let long = format!("Hurry {}", "x".repeat(200));
        let record = extract(&doc(&format!(
            "<li>{}</li><li>Hurry, only 3 spots left</li>",
            long
        )));
        assert_eq!(record.urgency_cues, vec!["Hurry, only 3 spots left"]);
    }

    #[test]
    fn test_structural_track_comes_first() {
        let record = extract(&doc(
            r#"<p>Free shipping on all orders</p><section class="promo-banner">Members get early access</section>"#,
        ));
        assert_eq!(
            record.offers,
            vec!["Members get early access", "Free shipping on all orders"]
        );
    }

    #[test]
    fn test_countdown_element_is_urgent_without_keywords() {
        let record = extract(&doc(r#"<section class="countdown-timer">02:14:59</section>"#));
        assert_eq!(record.urgency_cues, vec!["02:14:59"]);
    }
}

#[cfg(test)]
mod social_proof_and_trust_tests {
    use super::*;

    #[test]
    fn test_testimonial_markup_and_review_language() {
        let record = extract(&doc(
            r#"
            <section class="testimonial">This product changed how we ship features.</section>
            <p>Rated 4.9 stars by 2,000 happy customers</p>
            <section class="reviews">Short</section>
            "#,
        ));

        assert_eq!(
            record.social_proof,
            vec![
                "This product changed how we ship features.",
                "Rated 4.9 stars by 2,000 happy customers",
            ]
        );
    }

    #[test]
    fn test_trust_badge_falls_back_to_image_alt() {
        let record = extract(&doc(
            r#"<section class="trust-badges"><img src="/ssl.png" alt="SSL Secured"></section>"#,
        ));
        assert_eq!(record.trust_indicators, vec!["SSL Secured"]);
    }

    #[test]
    fn test_trust_cap() {
        let html: String = (0..10)
            .map(|i| format!(r#"<span class="badge">Certified partner {}</span>"#, i))
            .collect();
        let record = extract(&doc(&html));

        assert_eq!(record.trust_indicators.len(), 5);
        assert_eq!(record.trust_indicators[0], "Certified partner 0");
    }

    #[test]
    fn test_locator_with_custom_vocabulary() {
        let config = TextFeatureConfig {
            selectors: vec![],
            keywords: vec!["gratis".to_string()],
            band: LengthBand::new(0, 100),
            cap: 5,
        };
        let locator = TextFeatureLocator::new("offers", &config);
        let page = doc("<p>Envío gratis hoy</p><p>Free shipping</p>");
        let scanned = scan_texts(&page, &SelectorSet::single("p", "test"));

        assert_eq!(locator.locate(&page, &scanned), vec!["Envío gratis hoy"]);
    }
}

#[cfg(test)]
mod pricing_tests {
    use super::*;

    #[test]
    fn test_price_elements_then_body_matches() {
        let record = extract(&doc(
            r#"
            <div class="price">$49/mo</div>
            <div class="pricing-note">Billed annually</div>
            <p>Plans start at $19.99 / month and €25 for teams.</p>
            "#,
        ));

        assert_eq!(record.pricing, vec!["$49/mo", "$19.99 / month", "€25"]);
    }

    #[test]
    fn test_no_currency_no_pricing() {
        let record = extract(&doc("<p>Contact us for a quote.</p>"));
        assert!(record.pricing.is_empty());
    }

    #[test]
    fn test_malformed_price_pattern_keeps_structural_track() {
        let config = PricingConfig {
            price_pattern: "(".to_string(),
            ..ExtractorConfig::default().pricing
        };
        let locator = PricingLocator::new(&config);
        let page = doc(r#"<span class="price">£10</span>"#);

        assert_eq!(locator.locate(&page, "£99 later"), vec!["£10"]);
    }
}
