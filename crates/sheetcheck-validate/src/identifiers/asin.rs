//! ASIN-style code recognition. Pattern only, no checksum.

use std::sync::LazyLock;

use regex::Regex;

/// `B` + 2 alphanumerics + 7 word characters, or 9 digits + a digit or `X`.
static ASIN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:B[0-9A-Za-z]{2}[0-9A-Za-z_]{7}|[0-9]{9}[0-9X])$")
        .expect("Invalid ASIN regex")
});

pub fn is_valid_asin(asin: &str) -> bool {
    ASIN_REGEX.is_match(asin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn b_prefixed_codes() {
        assert!(is_valid_asin("B00EXAMPLE"));
        assert!(is_valid_asin("B07XJ8C8F5"));
        assert!(is_valid_asin("BA1_234567"));
        assert!(!is_valid_asin("B07XJ8C8F"));
        assert!(!is_valid_asin("B07XJ8C8F55"));
        assert!(!is_valid_asin("C07XJ8C8F5"));
        assert!(!is_valid_asin("B07XJ8C8Fé"));
    }

    #[test]
    fn isbn_style_codes() {
        assert!(is_valid_asin("0306406152"));
        assert!(is_valid_asin("080442957X"));
        assert!(!is_valid_asin("080442957x"));
        assert!(!is_valid_asin(""));
    }
}
