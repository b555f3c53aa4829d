use serde::{Deserialize, Serialize};

/// Marketing features extracted from one page.
///
/// Built fresh by every extraction call and handed to the caller by value.
/// Field names serialize in camelCase, which is the shape the comparison
/// step consumes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageFeatureRecord {
    /// Resolved document URL
    pub url: String,

    /// Document title, empty when missing
    pub title: String,

    /// Best single heading
    pub headline: String,

    /// Second-best heading
    pub subheadline: String,

    /// Call-to-action texts (at most 15)
    pub ctas: Vec<String>,

    /// Offer sentences (at most 15)
    pub offers: Vec<String>,

    /// Urgency sentences (at most 15)
    pub urgency_cues: Vec<String>,

    /// Currency-bearing fragments (at most 10)
    pub pricing: Vec<String>,

    /// Testimonial and review fragments (at most 8)
    pub social_proof: Vec<String>,

    /// Trust and security badge texts (at most 5)
    pub trust_indicators: Vec<String>,

    /// Filtered media references (at most 20)
    pub images: Vec<ImageRef>,

    /// First matching audience keyword, or empty
    pub target_audience: String,

    /// Main content text, at most 3000 characters
    pub body_text: String,

    /// Meta description, empty when missing
    pub meta_description: String,

    pub has_video: bool,
    pub has_form: bool,
    pub has_chat: bool,

    /// Number of words in `body_text`
    pub word_count: usize,
}

/// An image kept by the media filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub src: String,
    pub alt: String,
    pub title: String,
    /// Width in pixels, 0 when unknown
    pub width: u32,
    /// Height in pixels, 0 when unknown
    pub height: u32,
}

/// The ad page and its landing page, as handed to the comparison step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagePair {
    pub ad_content: PageFeatureRecord,
    pub landing_page_content: PageFeatureRecord,
}

impl PagePair {
    /// Create a new pair from an ad record and a landing page record
    pub fn new(ad_content: PageFeatureRecord, landing_page_content: PageFeatureRecord) -> Self {
        Self {
            ad_content,
            landing_page_content,
        }
    }
}
