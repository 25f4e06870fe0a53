//! Input Tag Parsing
//!
//! The `#1 `/`#2 `/`#3 ` prefix convention for tagging a task with a
//! priority directly in the text field.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::item::Priority;

// Literal hash, one digit 1-3, exactly one whitespace char, at the very
// start. The remainder (possibly empty) is the task text.
static TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^#([123])\s(.*)$").expect("tag pattern is valid"));

/// Split raw form input into (task text, priority).
///
/// Untagged input is taken verbatim with priority Low, matching the
/// form's default.
pub fn parse_input(raw: &str) -> (String, Priority) {
    if let Some(caps) = TAG_RE.captures(raw) {
        let digit = caps[1].as_bytes()[0] - b'0';
        let priority = Priority::try_from(digit).expect("pattern only matches 1-3");
        (caps[2].to_string(), priority)
    } else {
        (raw.to_string(), Priority::Low)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_three_tags() {
        assert_eq!(parse_input("#1 text"), ("text".to_string(), Priority::Low));
        assert_eq!(parse_input("#2 text"), ("text".to_string(), Priority::Medium));
        assert_eq!(parse_input("#3 text"), ("text".to_string(), Priority::High));
    }

    #[test]
    fn test_untagged_defaults_to_low() {
        assert_eq!(
            parse_input("Buy milk"),
            ("Buy milk".to_string(), Priority::Low)
        );
        assert_eq!(parse_input(""), (String::new(), Priority::Low));
    }

    #[test]
    fn test_unrecognized_tags_kept_verbatim() {
        // Digit out of range
        assert_eq!(parse_input("#4 text"), ("#4 text".to_string(), Priority::Low));
        // No separator
        assert_eq!(parse_input("#1text"), ("#1text".to_string(), Priority::Low));
        assert_eq!(parse_input("#1"), ("#1".to_string(), Priority::Low));
        // Tag not at the start
        assert_eq!(
            parse_input(" #2 text"),
            (" #2 text".to_string(), Priority::Low)
        );
    }

    #[test]
    fn test_tab_counts_as_separator() {
        assert_eq!(parse_input("#3\ttext"), ("text".to_string(), Priority::High));
    }

    #[test]
    fn test_tag_with_empty_remainder() {
        assert_eq!(parse_input("#2 "), (String::new(), Priority::Medium));
    }

    #[test]
    fn test_only_first_tag_stripped() {
        assert_eq!(
            parse_input("#1 #2 text"),
            ("#2 text".to_string(), Priority::Low)
        );
    }
}
