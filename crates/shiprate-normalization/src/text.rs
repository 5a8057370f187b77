//! Text key normalization.

/// Canonical carrier key: trimmed and lower-cased.
///
/// An empty result is allowed; callers decide whether a carrier is required.
///
/// ```
/// use shiprate_normalization::normalize_carrier_key;
///
/// assert_eq!(normalize_carrier_key("  FedEx "), "fedex");
/// assert_eq!(normalize_carrier_key(""), "");
/// ```
pub fn normalize_carrier_key(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Canonical country code: trimmed and upper-cased.
pub fn normalize_country_code(value: &str) -> String {
    value.trim().to_uppercase()
}

/// Zones are opaque ("E", "5", "Zone 3"), so only surrounding whitespace goes.
pub fn normalize_zone(value: &str) -> String {
    value.trim().to_string()
}

/// Box keys share the carrier-key rules.
pub fn normalize_box_key(value: &str) -> String {
    normalize_carrier_key(value)
}

/// Split a free-form list of country codes.
///
/// Commas, pipes and any whitespace separate entries. Entries are upper-cased,
/// empty entries dropped, and repeats removed keeping first-seen order.
///
/// ```
/// use shiprate_normalization::normalize_country_code_list;
///
/// assert_eq!(normalize_country_code_list("us,ca mx|US"), vec!["US", "CA", "MX"]);
/// assert!(normalize_country_code_list("  ").is_empty());
/// ```
pub fn normalize_country_code_list(value: &str) -> Vec<String> {
    let mut codes: Vec<String> = Vec::new();
    for part in value.split(|ch: char| ch == ',' || ch == '|' || ch.is_whitespace()) {
        let code = normalize_country_code(part);
        if code.is_empty() || codes.contains(&code) {
            continue;
        }
        codes.push(code);
    }
    codes
}

/// Truthy flag parsing: `1`, `true`, `yes`, `on` (any case) are true.
pub fn normalize_boolean_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_preserves_case() {
        assert_eq!(normalize_zone(" e "), "e");
        assert_eq!(normalize_zone("Zone 3"), "Zone 3");
    }

    #[test]
    fn country_code_upper_cases() {
        assert_eq!(normalize_country_code(" jp"), "JP");
    }

    #[test]
    fn boolean_flag_accepts_known_truthy_values() {
        for value in ["1", "true", "TRUE", " yes ", "On"] {
            assert!(normalize_boolean_flag(value), "{value} should be truthy");
        }
        for value in ["", "0", "false", "no", "off", "y", "2"] {
            assert!(!normalize_boolean_flag(value), "{value} should be falsy");
        }
    }

    #[test]
    fn country_code_list_drops_empty_segments() {
        assert_eq!(
            normalize_country_code_list(",,us,\tgb\n,|"),
            vec!["US".to_string(), "GB".to_string()]
        );
    }
}
