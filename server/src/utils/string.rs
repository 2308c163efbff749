//! String utility functions

/// Parse a string that may be a JSON array or a bracketed/bare comma list
/// into a Vec<String>.
///
/// Handles:
/// - JSON arrays: `["a", "b", "c"]`
/// - Bracketed lists: `[a, 'b', "c"]`
/// - Comma-separated: `a, b, c`
///
/// Elements are trimmed of whitespace and surrounding quotes; empty ones are
/// dropped.
pub fn parse_string_array(value: &str) -> Vec<String> {
    let trimmed = value.trim();
    if trimmed.starts_with('[')
        && let Ok(items) = serde_json::from_str::<Vec<String>>(trimmed)
    {
        return items
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
    }

    trimmed
        .trim_start_matches('[')
        .trim_end_matches(']')
        .split(',')
        .map(|s| s.trim().trim_matches(|c| c == '"' || c == '\'').trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Uppercase the first character, leaving the rest untouched
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_string_array_json() {
        let result = parse_string_array(r#"["a", "b", "c"]"#);
        assert_eq!(result, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_parse_string_array_csv() {
        let result = parse_string_array("a, b, c");
        assert_eq!(result, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_parse_string_array_empty() {
        assert!(parse_string_array("").is_empty());
        assert!(parse_string_array("   ").is_empty());
        assert!(parse_string_array("[]").is_empty());
    }

    #[test]
    fn test_parse_string_array_bracketed_unquoted() {
        let result = parse_string_array("[a, b, c]");
        assert_eq!(result, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_parse_string_array_mixed_quotes() {
        let result = parse_string_array(r#"[author, 'reviews', "book"]"#);
        assert_eq!(result, vec!["author", "reviews", "book"]);
    }

    #[test]
    fn test_parse_string_array_skips_blank_elements() {
        let result = parse_string_array("[a,, ,b]");
        assert_eq!(result, vec!["a", "b"]);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("books"), "Books");
        assert_eq!(capitalize("Author"), "Author");
        assert_eq!(capitalize("orderItems"), "OrderItems");
        assert_eq!(capitalize("ébauche"), "Ébauche");
        assert_eq!(capitalize(""), "");
    }
}
