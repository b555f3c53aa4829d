use super::Vocabulary;

/// Names the audience a page speaks to with a single role or industry keyword.
///
/// The first vocabulary term found anywhere in the page wins, so the order of
/// the vocabulary is its priority. Terms match as plain substrings, not whole
/// words: "director" contains "cto".
#[derive(Debug, Clone)]
pub struct AudienceLocator {
    vocabulary: Vocabulary,
}

impl AudienceLocator {
    pub fn new(keywords: &[String]) -> Self {
        Self {
            vocabulary: Vocabulary::new(keywords),
        }
    }

    pub fn locate(&self, title: &str, headline: &str, body_text: &str) -> String {
        let text = format!("{} {} {}", title, headline, body_text);
        let audience = self
            .vocabulary
            .first_match(&text)
            .unwrap_or_default()
            .to_string();

        ::log::debug!("Target audience: {:?}", audience);
        audience
    }
}
