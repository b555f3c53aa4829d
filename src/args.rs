use clap::{Parser, ValueEnum};
use page_features::PageSource;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "page-features")]
#[command(about = "Extracts marketing features from an ad page and its landing page")]
#[command(version)]
pub struct Args {
    /// Page to analyze (the ad page when a landing page is also given)
    pub url: String,

    /// Landing page the ad links to
    pub landing_url: Option<String>,

    /// How pages are acquired
    #[arg(short, long, value_enum, default_value_t = SourceArg::Browser)]
    pub source: SourceArg,

    /// JSON file overriding vocabularies, selectors and caps
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// WebDriver server for browser sources (defaults to WEBDRIVER_URL or http://localhost:4444)
    #[arg(long)]
    pub webdriver_url: Option<String>,

    /// Navigation timeout in seconds
    #[arg(short, long, default_value_t = 30)]
    pub timeout: u64,

    /// Milliseconds to let a rendered page settle after navigation
    #[arg(long, default_value_t = 3000)]
    pub settle_ms: u64,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SourceArg {
    Browser,
    Http,
    File,
}

/// Convert from CLI argument source type to internal page source
pub fn convert_source(arg_type: SourceArg, location: &str) -> PageSource {
    match arg_type {
        SourceArg::Browser => PageSource::Browser(location.to_string()),
        SourceArg::Http => PageSource::Http(location.to_string()),
        SourceArg::File => PageSource::File(PathBuf::from(location)),
    }
}
