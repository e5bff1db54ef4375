use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for canonical district slugs
    /// Must be lowercase alphanumeric words joined by single underscores
    /// - Valid: "bengaluru_urban", "mysuru", "south_karnataka_general"
    /// - Invalid: "_urban", "urban_", "bengaluru__urban", "Bengaluru", "bengaluru-urban"
    pub static ref DISTRICT_SLUG_REGEX: Regex =
        Regex::new(r"^[a-z0-9]+(?:_[a-z0-9]+)*$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_district_slug_regex_valid() {
        assert!(DISTRICT_SLUG_REGEX.is_match("bengaluru_urban"));
        assert!(DISTRICT_SLUG_REGEX.is_match("mysuru"));
        assert!(DISTRICT_SLUG_REGEX.is_match("south_karnataka_general"));
        assert!(DISTRICT_SLUG_REGEX.is_match("ward12"));
    }

    #[test]
    fn test_district_slug_regex_invalid() {
        assert!(!DISTRICT_SLUG_REGEX.is_match("_urban")); // starts with underscore
        assert!(!DISTRICT_SLUG_REGEX.is_match("urban_")); // ends with underscore
        assert!(!DISTRICT_SLUG_REGEX.is_match("bengaluru__urban")); // double underscore
        assert!(!DISTRICT_SLUG_REGEX.is_match("Bengaluru")); // uppercase
        assert!(!DISTRICT_SLUG_REGEX.is_match("bengaluru-urban")); // hyphen
        assert!(!DISTRICT_SLUG_REGEX.is_match("")); // empty
    }
}
