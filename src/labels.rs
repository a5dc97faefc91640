//! Label vocabulary normalization for evaluation output.
//!
//! Raw annotator categories are mapped onto the canonical binary
//! vocabulary; already-canonical values pass through unchanged, so the
//! splitter accepts both raw exports and previously normalized tables.

use crate::constants::labels::{
    CAUSAL_NEGATIVE, CAUSAL_POSITIVE, EXCLUDED_TARGETS, RAW_EXPLICIT_CAUSE, RAW_IMPLICIT_CAUSE,
    RAW_PERFORMANCE,
};

/// Map a causality category onto `正例`/`負例`.
///
/// Plain performance statements and unlabeled rows count as negative
/// examples; explicit and implicit performance drivers are positive.
pub fn causality_label(raw: &str) -> Option<&'static str> {
    match raw {
        "" | RAW_PERFORMANCE | CAUSAL_NEGATIVE => Some(CAUSAL_NEGATIVE),
        RAW_EXPLICIT_CAUSE | RAW_IMPLICIT_CAUSE | CAUSAL_POSITIVE => Some(CAUSAL_POSITIVE),
        _ => None,
    }
}

/// Collapse annotator polarity marks onto `+`/`-`/`?`/empty.
///
/// Doubled marks keep their direction; the mixed `+-` mark means the
/// direction is uncertain.
pub fn polarity_label(raw: &str) -> Option<&'static str> {
    match raw {
        "+" | "++" => Some("+"),
        "-" | "--" => Some("-"),
        "+-" | "?" => Some("?"),
        "" => Some(""),
        _ => None,
    }
}

/// Validate the importance flag (`1`, `?`, or empty).
pub fn prime_label(raw: &str) -> Option<&'static str> {
    match raw {
        "1" => Some("1"),
        "?" => Some("?"),
        "" => Some(""),
        _ => None,
    }
}

/// True when a row's `target` value marks it as out of scope.
pub fn is_excluded_target(target: &str) -> bool {
    EXCLUDED_TARGETS.contains(&target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn causality_maps_raw_categories_onto_binary_vocabulary() {
        assert_eq!(causality_label("業績"), Some("負例"));
        assert_eq!(causality_label(""), Some("負例"));
        assert_eq!(causality_label("明示的な業績要因"), Some("正例"));
        assert_eq!(causality_label("暗黙的な業績要因"), Some("正例"));
    }

    #[test]
    fn causality_passes_canonical_values_through() {
        assert_eq!(causality_label("正例"), Some("正例"));
        assert_eq!(causality_label("負例"), Some("負例"));
        assert_eq!(causality_label("その他"), None);
    }

    #[test]
    fn polarity_collapses_doubled_and_mixed_marks() {
        assert_eq!(polarity_label("++"), Some("+"));
        assert_eq!(polarity_label("--"), Some("-"));
        assert_eq!(polarity_label("+-"), Some("?"));
        assert_eq!(polarity_label(""), Some(""));
        assert_eq!(polarity_label("+?"), None);
    }

    #[test]
    fn prime_accepts_only_known_flags() {
        assert_eq!(prime_label("1"), Some("1"));
        assert_eq!(prime_label("?"), Some("?"));
        assert_eq!(prime_label(""), Some(""));
        assert_eq!(prime_label("2"), None);
    }

    #[test]
    fn excluded_targets_cover_zero_and_repeated_headers() {
        assert!(is_excluded_target("0"));
        assert!(is_excluded_target("target"));
        assert!(!is_excluded_target(""));
        assert!(!is_excluded_target("1"));
    }
}
