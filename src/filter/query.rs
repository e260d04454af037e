//! Search query normalization and street intent detection.

use once_cell::sync::Lazy;
use regex::Regex;

/// Prefixes that mark a query as a street search when they appear anywhere in it
pub const STREET_PREFIXES: &[&str] = &[
    "r ", "r. ", "rua ", "av ", "av. ", "avenida ", "travessa ", "alameda ", "estrada ",
];

static STREET_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?-u:\b)(r|rua|av|avenida|travessa|alameda|estrada)(?-u:\b)\.?\s+([a-zçáàâãéèêíïóôõöúüñ]+)")
        .expect("street pattern is a valid regex")
});

/// A normalized free-text query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Lowercased, trimmed query text
    pub normalized: String,
    /// Non-empty whitespace separated terms, in query order
    pub terms: Vec<String>,
    /// Street name extracted from a "rua ipanema" style query
    pub street: Option<String>,
}

impl SearchQuery {
    /// Normalize `input`, returning `None` when it holds no terms.
    pub fn parse(input: &str) -> Option<Self> {
        let normalized = input.trim().to_lowercase();
        let terms: Vec<String> = normalized.split_whitespace().map(str::to_string).collect();
        if terms.is_empty() {
            return None;
        }

        let street = detect_street(&normalized);
        Some(Self {
            normalized,
            terms,
            street,
        })
    }

    /// The first term, which drives the fallback strategies
    pub fn first_term(&self) -> &str {
        self.terms.first().map(String::as_str).unwrap_or_default()
    }
}

/// Both checks must agree: a spaced prefix is present and the regex finds a
/// prefix followed by a name.
fn detect_street(normalized: &str) -> Option<String> {
    if !STREET_PREFIXES.iter().any(|prefix| normalized.contains(prefix)) {
        return None;
    }
    STREET_PATTERN
        .captures(normalized)
        .and_then(|caps| caps.get(2))
        .map(|name| name.as_str().to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_terms() {
        let query = SearchQuery::parse("  Casa   PISCINA\tCentro ").unwrap();
        assert_eq!(query.normalized, "casa   piscina\tcentro");
        assert_eq!(query.terms, vec!["casa", "piscina", "centro"]);
        assert_eq!(query.street, None);
        assert_eq!(query.first_term(), "casa");
    }

    #[test]
    fn blank_query_is_none() {
        assert!(SearchQuery::parse("").is_none());
        assert!(SearchQuery::parse("  \n ").is_none());
    }

    #[test]
    fn detects_street_names() {
        assert_eq!(
            SearchQuery::parse("Rua Ipanema").unwrap().street.as_deref(),
            Some("ipanema")
        );
        assert_eq!(
            SearchQuery::parse("av. brasil 45").unwrap().street.as_deref(),
            Some("brasil")
        );
        assert_eq!(
            SearchQuery::parse("casa na travessa são josé").unwrap().street.as_deref(),
            Some("são")
        );
    }

    #[test]
    fn prefix_without_name_is_not_a_street() {
        // "rua" at the end has no trailing space, so the prefix check fails
        assert_eq!(SearchQuery::parse("casa rua").unwrap().street, None);
        // "mar " contains "r " but the regex needs a standalone keyword
        assert_eq!(SearchQuery::parse("vista mar bonita").unwrap().street, None);
    }

    #[test]
    fn keyword_boundary_is_ascii() {
        // "ã" is not an ASCII word character, so "r" after it starts a keyword
        assert_eq!(
            SearchQuery::parse("joãor ipanema").unwrap().street.as_deref(),
            Some("ipanema")
        );
        assert_eq!(SearchQuery::parse("joaor ipanema").unwrap().street, None);
    }
}
