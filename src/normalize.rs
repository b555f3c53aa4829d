//! Normalization and bounding shared by every list-valued field.
//!
//! Locators only accumulate candidates. Dropping blanks, de-duplicating and
//! capping happens here, once, for all of them.

use std::collections::HashSet;

/// Turns an accumulated candidate list into a bounded list.
///
/// This function:
/// - Drops empty and whitespace-only candidates
/// - Removes exact duplicates, keeping the first occurrence
/// - Keeps at most `cap` items, in first-seen order
pub fn bound(candidates: Vec<String>, cap: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut bounded = Vec::with_capacity(cap.min(candidates.len()));

    for candidate in candidates {
        if bounded.len() == cap {
            break;
        }
        if candidate.trim().is_empty() {
            continue;
        }
        if seen.insert(candidate.clone()) {
            bounded.push(candidate);
        }
    }

    bounded
}

/// Collapses every run of whitespace into a single space and trims the ends
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Keeps at most `limit` characters, never splitting a code point
pub fn truncate_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((byte_index, _)) => text[..byte_index].to_string(),
        None => text.to_string(),
    }
}

/// Length in characters, which is what the length bands are expressed in
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_bound_drops_blank_candidates() {
        let result = bound(strings(&["", "   ", "Buy now", "\t\n"]), 10);
        assert_eq!(result, strings(&["Buy now"]));
    }

    #[test]
    fn test_bound_keeps_first_occurrence_order() {
        let result = bound(strings(&["b", "a", "b", "c", "a"]), 10);
        assert_eq!(result, strings(&["b", "a", "c"]));
    }

    #[test]
    fn test_bound_caps_after_dedup() {
        // Duplicates must not consume cap slots
        let result = bound(strings(&["x", "x", "x", "y", "z"]), 2);
        assert_eq!(result, strings(&["x", "y"]));
    }

    #[test]
    fn test_bound_is_case_sensitive() {
        let result = bound(strings(&["Start", "start"]), 10);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_bound_zero_cap() {
        assert!(bound(strings(&["a"]), 0).is_empty());
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  Get\n\n  started \t now "), "Get started now");
        assert_eq!(collapse_whitespace(" \n "), "");
    }

    #[test]
    fn test_truncate_chars_respects_code_points() {
        assert_eq!(truncate_chars("€€€€", 2), "€€");
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("abc", 0), "");
    }

    proptest! {
        #[test]
        fn bound_never_exceeds_cap_and_is_unique(
            items in prop::collection::vec("[a-c ]{0,3}", 0..60),
            cap in 0usize..20,
        ) {
            let result = bound(items.clone(), cap);
            prop_assert!(result.len() <= cap);

            let unique: HashSet<&String> = result.iter().collect();
            prop_assert_eq!(unique.len(), result.len());
            prop_assert!(result.iter().all(|s| !s.trim().is_empty()));
        }

        #[test]
        fn bound_preserves_first_seen_order(
            items in prop::collection::vec("[a-e]{1,2}", 0..60),
        ) {
            let result = bound(items.clone(), usize::MAX);
            let first_positions: Vec<usize> = result
                .iter()
                .map(|item| items.iter().position(|candidate| candidate == item).unwrap())
                .collect();
            prop_assert!(first_positions.windows(2).all(|pair| pair[0] < pair[1]));
        }

        #[test]
        fn truncate_never_exceeds_limit(text in ".{0,200}", limit in 0usize..100) {
            prop_assert!(char_len(&truncate_chars(&text, limit)) <= limit);
        }
    }
}
