use std::time::Duration;

/// Utility function to create a reasonable timeout for page acquisition
pub fn calculate_timeout(base_secs: u64, url_length: usize) -> Duration {
    // Add additional time for longer URLs, which tend to be tracking-heavy ad links
    let additional_ms = (url_length / 20) as u64 * 100;
    Duration::from_secs(base_secs) + Duration::from_millis(additional_ms)
}

/// Parses a size attribute such as `"200"`, `"200px"` or `"120.5"` into whole pixels
pub fn parse_dimension(value: &str) -> Option<u32> {
    let value = value.trim();
    let digits_end = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    // Percentages are relative to the layout, not a size
    if digits_end == 0 || value[digits_end..].starts_with('%') {
        return None;
    }
    value[..digits_end].parse().ok()
}
