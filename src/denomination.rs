pub const OTHER_LABEL: &str = "other";

/// Yen value of each recognised coin, keyed by normalized label.
const VALUE_TABLE: [(&str, u64); 7] = [
    ("1yen", 1),
    ("5yen", 5),
    ("10yen", 10),
    ("50yen", 50),
    ("100yen", 100),
    ("500yen", 500),
    (OTHER_LABEL, 0),
];

/// Lowercases and strips all whitespace, so `"100 Yen"` becomes `"100yen"`.
/// Only used for lookups, never for display.
pub fn normalize_label(label: &str) -> String {
    label
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

pub fn is_other(label: &str) -> bool {
    normalize_label(label) == OTHER_LABEL
}

/// Monetary value of one coin with this label. Unrecognised labels are worth 0.
pub fn value_of(label: &str) -> u64 {
    let normalized = normalize_label(label);
    VALUE_TABLE
        .iter()
        .find(|(key, _)| *key == normalized)
        .map(|(_, value)| *value)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_label() {
        assert_eq!(normalize_label("1 yen"), "1yen");
        assert_eq!(normalize_label(" 500  YEN "), "500yen");
        assert_eq!(normalize_label("Other"), "other");
        assert_eq!(normalize_label("10\tyen"), "10yen");
    }

    #[test]
    fn test_known_values() {
        assert_eq!(value_of("1 yen"), 1);
        assert_eq!(value_of("5 yen"), 5);
        assert_eq!(value_of("10 yen"), 10);
        assert_eq!(value_of("50 yen"), 50);
        assert_eq!(value_of("100 yen"), 100);
        assert_eq!(value_of("500 yen"), 500);
    }

    #[test]
    fn test_other_and_unknown_are_worthless() {
        assert_eq!(value_of("other"), 0);
        assert_eq!(value_of("OTHER"), 0);
        assert_eq!(value_of("2 euro"), 0);
        assert_eq!(value_of(""), 0);
    }

    #[test]
    fn test_is_other() {
        assert!(is_other("other"));
        assert!(is_other(" Other "));
        assert!(!is_other("1 yen"));
        assert!(!is_other("others"));
    }
}
