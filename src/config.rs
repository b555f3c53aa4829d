use crate::error::ConfigError;
use crate::filter::MediaFilterConfig;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Accepted text length range, exclusive at both ends, in characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthBand {
    pub min: usize,
    pub max: usize,
}

impl LengthBand {
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// Whether a text of `len` characters falls strictly inside the band
    pub fn accepts(&self, len: usize) -> bool {
        len > self.min && len < self.max
    }
}

/// Call-to-action locator settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CtaConfig {
    /// Selector patterns, evaluated independently and in order
    pub selectors: Vec<String>,
    pub band: LengthBand,
    pub cap: usize,
}

/// Settings for a feature located by selectors plus a keyword vocabulary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextFeatureConfig {
    /// Structural track: elements marked up as this feature
    pub selectors: Vec<String>,

    /// Lexical track: case-insensitive substrings, any one is enough
    pub keywords: Vec<String>,

    pub band: LengthBand,
    pub cap: usize,
}

/// Pricing locator settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    pub selectors: Vec<String>,

    /// A structurally located element only counts if its text matches this
    pub currency_pattern: String,

    /// Matches of this pattern in the body text are appended as prices
    pub price_pattern: String,

    pub cap: usize,
}

/// Main content settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// The first of these that matches anything supplies the body text
    pub selectors: Vec<String>,

    /// How many paragraphs to join when no content container is found
    pub fallback_paragraphs: usize,

    /// Body text is cut to this many characters
    pub body_text_limit: usize,
}

/// Image locator settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageConfig {
    pub filter: MediaFilterConfig,
    pub cap: usize,
}

/// Selectors whose presence anywhere in the page sets a flag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresenceConfig {
    pub video: Vec<String>,
    pub form: Vec<String>,
    pub chat: Vec<String>,
}

/// Everything the extractor needs: vocabularies, selector tables, caps and bands.
///
/// Missing top-level sections in a config file fall back to the defaults below.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    pub cta: CtaConfig,
    pub offers: TextFeatureConfig,
    pub urgency: TextFeatureConfig,
    pub social_proof: TextFeatureConfig,
    pub trust: TextFeatureConfig,
    pub pricing: PricingConfig,

    /// Text-bearing elements scanned by every lexical track
    pub lexical_scan_selector: String,

    pub content: ContentConfig,

    /// Ordered role/industry vocabulary, earlier terms win
    pub audience_keywords: Vec<String>,

    pub images: ImageConfig,
    pub presence: PresenceConfig,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            cta: CtaConfig {
                selectors: strings(&[
                    "button",
                    r#"a[href*="signup"]"#,
                    r#"a[href*="demo"]"#,
                    r#"a[href*="trial"]"#,
                    r#"a[href*="free"]"#,
                    r#"a[href*="get"]"#,
                    r#"a[href*="start"]"#,
                    r#"a[href*="buy"]"#,
                    r#"a[href*="purchase"]"#,
                    r#"a[href*="order"]"#,
                    r#"a[href*="book"]"#,
                    r#"a[href*="schedule"]"#,
                    ".cta",
                    ".btn",
                    ".button",
                    r#"[class*="button"]"#,
                    r#"[class*="cta"]"#,
                    r#"[class*="btn"]"#,
                    r#"[role="button"]"#,
                    r#"input[type="submit"]"#,
                    r#"[data-testid*="button"]"#,
                    r#"[data-cy*="button"]"#,
                ]),
                band: LengthBand::new(2, 100),
                cap: 15,
            },
            offers: TextFeatureConfig {
                selectors: strings(&[
                    r#"[class*="offer"]"#,
                    r#"[class*="promo"]"#,
                    r#"[class*="discount"]"#,
                    r#"[class*="deal"]"#,
                    r#"[class*="coupon"]"#,
                ]),
                keywords: strings(&[
                    "free",
                    "discount",
                    "save",
                    "%",
                    "trial",
                    "limited",
                    "bonus",
                    "exclusive",
                    "special",
                    "offer",
                    "deal",
                    "promotion",
                    "coupon",
                    "off",
                    "reduction",
                    "sale",
                    "clearance",
                    "bargain",
                    "guarantee",
                    "money back",
                    "risk free",
                    "no commitment",
                ]),
                band: LengthBand::new(10, 300),
                cap: 15,
            },
            urgency: TextFeatureConfig {
                selectors: strings(&[
                    r#"[class*="countdown"]"#,
                    r#"[class*="timer"]"#,
                    r#"[class*="urgency"]"#,
                    r#"[class*="scarcity"]"#,
                    "[data-countdown]",
                ]),
                keywords: strings(&[
                    "limited time",
                    "hurry",
                    "today only",
                    "expires",
                    "countdown",
                    "spots left",
                    "act fast",
                    "don't miss",
                    "last chance",
                    "ending soon",
                    "while supplies last",
                    "urgent",
                    "immediate",
                    "now or never",
                    "final hours",
                    "deadline",
                    "running out",
                ]),
                band: LengthBand::new(0, 200),
                cap: 15,
            },
            social_proof: TextFeatureConfig {
                selectors: strings(&[
                    r#"[class*="testimonial"]"#,
                    r#"[class*="review"]"#,
                    r#"[class*="rating"]"#,
                    r#"[class*="customer"]"#,
                    r#"[class*="client"]"#,
                    ".quote",
                    ".feedback",
                    r#"[data-testid*="testimonial"]"#,
                    r#"[data-testid*="review"]"#,
                ]),
                keywords: strings(&[
                    "testimonial",
                    "review",
                    "rated",
                    "rating",
                    "stars",
                    "trusted by",
                    "loved by",
                    "happy customers",
                    "case study",
                    "join thousands",
                    "join over",
                ]),
                band: LengthBand::new(20, 500),
                cap: 8,
            },
            trust: TextFeatureConfig {
                selectors: strings(&[
                    r#"[class*="trust"]"#,
                    r#"[class*="secure"]"#,
                    r#"[class*="guarantee"]"#,
                    r#"[class*="certified"]"#,
                    r#"[class*="verified"]"#,
                    ".badge",
                    ".seal",
                ]),
                keywords: strings(&[
                    "ssl",
                    "secure checkout",
                    "secure payment",
                    "encrypted",
                    "money-back guarantee",
                    "money back guarantee",
                    "certified",
                    "verified",
                    "soc 2",
                    "iso 27001",
                    "gdpr",
                    "hipaa",
                    "pci",
                ]),
                band: LengthBand::new(0, 100),
                cap: 5,
            },
            pricing: PricingConfig {
                selectors: strings(&[
                    r#"[class*="price"]"#,
                    r#"[class*="cost"]"#,
                    r#"[class*="dollar"]"#,
                    "[data-price]",
                    ".pricing",
                    ".amount",
                    ".fee",
                ]),
                currency_pattern: r"[\$€£¥₹]".to_string(),
                price_pattern: r"[\$€£¥₹]\s*\d+(?:[.,]\d{2})?(?:\s*/\s*\w+)?".to_string(),
                cap: 10,
            },
            lexical_scan_selector: "p, div, span, h1, h2, h3, h4, h5, h6, li, strong, em"
                .to_string(),
            content: ContentConfig {
                selectors: strings(&[
                    "main",
                    "article",
                    ".content",
                    ".main-content",
                    r#"[role="main"]"#,
                    ".post-content",
                    ".entry-content",
                    ".description",
                    ".summary",
                    ".intro",
                ]),
                fallback_paragraphs: 15,
                body_text_limit: 3000,
            },
            audience_keywords: strings(&[
                "developer",
                "cto",
                "devops",
                "engineer",
                "business",
                "enterprise",
                "startup",
                "agency",
                "freelancer",
                "consultant",
                "manager",
                "director",
                "ceo",
                "founder",
                "entrepreneur",
                "professional",
                "team",
                "company",
                "marketer",
                "designer",
                "analyst",
                "executive",
                "owner",
            ]),
            images: ImageConfig {
                filter: MediaFilterConfig::default(),
                cap: 20,
            },
            presence: PresenceConfig {
                video: strings(&[
                    "video",
                    r#"iframe[src*="youtube"]"#,
                    r#"iframe[src*="vimeo"]"#,
                    r#"iframe[src*="wistia"]"#,
                ]),
                form: strings(&["form", r#"input[type="email"]"#, r#"input[type="text"]"#]),
                chat: strings(&[
                    r#"[class*="chat"]"#,
                    r#"[class*="messenger"]"#,
                    r#"[id*="intercom"]"#,
                ]),
            },
        }
    }
}

impl ExtractorConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let io_error = |source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        };

        let mut file = File::open(path).map_err(io_error)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents).map_err(io_error)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }
}

/// Settings for fetching pages before extraction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcquisitionConfig {
    /// URL for the WebDriver instance
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// User agent sent by the HTTP fetcher
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Navigation timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// How long to let a rendered page settle after navigation, in milliseconds
    #[serde(default = "default_settle_ms")]
    pub settle_ms: u64,
}

/// Default value for webdriver_url
fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_settle_ms() -> u64 {
    3000
}

impl Default for AcquisitionConfig {
    fn default() -> Self {
        Self {
            webdriver_url: default_webdriver_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            settle_ms: default_settle_ms(),
        }
    }
}

impl AcquisitionConfig {
    /// Defaults, with the WebDriver URL taken from `WEBDRIVER_URL` when set
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(webdriver_url) = std::env::var("WEBDRIVER_URL") {
            if !webdriver_url.is_empty() {
                config.webdriver_url = webdriver_url;
            }
        }
        config
    }
}
