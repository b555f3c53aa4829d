use crate::results::ImageRef;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Configuration for filtering image references out of a feature record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaFilterConfig {
    /// Regex patterns for image sources to drop (data URIs, trackers, pixels)
    #[serde(default = "default_exclude_patterns")]
    pub exclude_patterns: Vec<String>,

    /// Images whose width and height are both at or below this are icons.
    /// An unknown side counts as zero.
    #[serde(default = "default_icon_dimension")]
    pub icon_dimension: u32,
}

fn default_exclude_patterns() -> Vec<String> {
    vec![
        // Inline data URIs
        r"^data:".to_string(),
        r"tracking".to_string(),
        r"pixel".to_string(),
    ]
}

fn default_icon_dimension() -> u32 {
    50
}

impl Default for MediaFilterConfig {
    fn default() -> Self {
        Self {
            exclude_patterns: default_exclude_patterns(),
            icon_dimension: default_icon_dimension(),
        }
    }
}

/// Image filter that uses regex patterns on the source and a size threshold
#[derive(Debug)]
pub struct MediaFilter {
    config: MediaFilterConfig,
    exclude_regexes: Vec<Regex>,
}

impl Default for MediaFilter {
    fn default() -> Self {
        Self::new(MediaFilterConfig::default()).expect("Default regex patterns should be valid")
    }
}

impl MediaFilter {
    /// Create a new media filter from configuration
    pub fn new(config: MediaFilterConfig) -> Result<Self, regex::Error> {
        let mut exclude_regexes = Vec::with_capacity(config.exclude_patterns.len());
        for pattern in &config.exclude_patterns {
            exclude_regexes.push(Regex::new(pattern)?);
        }

        Ok(Self {
            config,
            exclude_regexes,
        })
    }

    /// Determine if an image should appear in the record
    pub fn should_keep(&self, image: &ImageRef) -> bool {
        if image.src.is_empty() {
            return false;
        }

        for regex in &self.exclude_regexes {
            if regex.is_match(&image.src) {
                return false;
            }
        }

        !self.is_icon_sized(image)
    }

    /// Both dimensions at or below the threshold; one large side is enough to keep it
    fn is_icon_sized(&self, image: &ImageRef) -> bool {
        image.width <= self.config.icon_dimension && image.height <= self.config.icon_dimension
    }
}
