//! xs:list and xs:boolean lexical helpers.

/// Splits an xs:list value on whitespace. Empty input yields no tokens.
pub fn split_list(value: &str) -> Vec<String> {
    value.split_whitespace().map(str::to_string).collect()
}

/// Joins tokens into an xs:list value, dropping blank entries.
pub fn join_list<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens
        .iter()
        .map(|t| t.as_ref().trim())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// True when every entry is blank (or there are none).
pub fn is_blank_list<S: AsRef<str>>(tokens: &[S]) -> bool {
    tokens.iter().all(|t| t.as_ref().trim().is_empty())
}

/// Parses an xs:boolean. Only the four canonical lexical forms are accepted.
pub fn parse_boolean(value: &str) -> Option<bool> {
    match value.trim() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

pub fn format_boolean(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_split_and_join() {
        assert_eq!(split_list("  HCS   SI-G-ABCD "), vec!["HCS", "SI-G-ABCD"]);
        assert!(split_list("").is_empty());
        assert_eq!(join_list(&["AUS", "", " USA "]), "AUS USA");
    }

    #[test]
    fn blank_lists() {
        assert!(is_blank_list::<&str>(&[]));
        assert!(is_blank_list(&["", "  "]));
        assert!(!is_blank_list(&["", "FOUO"]));
    }

    #[test]
    fn booleans() {
        assert_eq!(parse_boolean("true"), Some(true));
        assert_eq!(parse_boolean("1"), Some(true));
        assert_eq!(parse_boolean("false"), Some(false));
        assert_eq!(parse_boolean(" 0 "), Some(false));
        assert_eq!(parse_boolean("TRUE"), None);
        assert_eq!(parse_boolean("yes"), None);
        assert_eq!(format_boolean(true), "true");
    }
}
