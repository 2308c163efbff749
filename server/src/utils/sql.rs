//! SQL utility functions

/// Quote an identifier with backticks, doubling any embedded backtick
///
/// Column names coming from OR-expressions bypass the allow-list, so the
/// quoted form must never let a name close the identifier early.
///
/// # Example
///
/// ```
/// use sieve_server::utils::sql::quote_identifier;
///
/// assert_eq!(quote_identifier("title"), "`title`");
/// assert_eq!(quote_identifier("a`b"), "`a``b`");
/// ```
pub fn quote_identifier(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}

/// Build `n` comma-separated placeholders (`?, ?, ?`)
pub fn placeholders(n: usize) -> String {
    vec!["?"; n].join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_identifier_plain() {
        assert_eq!(quote_identifier("author_id"), "`author_id`");
    }

    #[test]
    fn test_quote_identifier_escapes_backtick() {
        assert_eq!(quote_identifier("x` OR 1=1 --"), "`x`` OR 1=1 --`");
    }

    #[test]
    fn test_quote_identifier_empty() {
        assert_eq!(quote_identifier(""), "``");
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(placeholders(1), "?");
        assert_eq!(placeholders(3), "?, ?, ?");
        assert_eq!(placeholders(0), "");
    }
}
