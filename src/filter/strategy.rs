//! Ordered text match strategies.
//!
//! The text stage tries [`FALLBACK_CHAIN`] in order and keeps the first
//! non-empty result. Later strategies are progressively looser so a partial
//! or misspelled query still shows something.

use super::address::{prefix, AddressComponents};
use super::query::SearchQuery;
use crate::models::PropertyRecord;
use regex::Regex;

/// Lowercased searchable fields of one record
#[derive(Debug, Clone)]
pub struct SearchableText {
    pub title: String,
    pub location: String,
    pub description: String,
    pub property_type: String,
    pub features: String,
    pub amenities: String,
    /// All of the above joined with spaces
    pub full_text: String,
    pub components: AddressComponents,
}

impl SearchableText {
    pub fn new(record: &PropertyRecord) -> Self {
        let title = record.title.to_lowercase();
        let location = record.location.to_lowercase();
        let description = record.description.to_lowercase();
        let property_type = record.property_type.to_lowercase();
        let features = record.features.join(" ").to_lowercase();
        let amenities = record.amenities.join(" ").to_lowercase();
        let full_text = format!(
            "{} {} {} {} {} {}",
            title, location, description, property_type, features, amenities
        );
        let components = AddressComponents::parse(&location);

        Self {
            title,
            location,
            description,
            property_type,
            features,
            amenities,
            full_text,
            components,
        }
    }

    /// Does a single query term match anywhere this record is searchable?
    pub fn matches_term(&self, term: &str) -> bool {
        let field_match = [
            &self.title,
            &self.location,
            &self.description,
            &self.property_type,
            &self.features,
            &self.amenities,
        ]
        .into_iter()
        .any(|field| field.contains(term));

        let is_numeric = is_numeric(term);
        let is_short = term.chars().count() <= 3;

        field_match
            || self.components.matches_term(term)
            || self.full_text.contains(term)
            || (is_numeric && contains_word(&self.location, term))
            || (is_short && self.full_text.contains(term))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    /// Street short-circuit, then every term must match somewhere
    Strict,
    /// First term as a plain substring of title, location, description and type
    FirstTerm,
    /// First three characters of the first term in title, location and description
    FirstTermPrefix,
}

pub const FALLBACK_CHAIN: [MatchStrategy; 3] = [
    MatchStrategy::Strict,
    MatchStrategy::FirstTerm,
    MatchStrategy::FirstTermPrefix,
];

impl MatchStrategy {
    /// Whether the strategy can run for this query at all
    pub fn applies_to(&self, query: &SearchQuery) -> bool {
        match self {
            MatchStrategy::FirstTermPrefix => query.first_term().chars().count() > 3,
            _ => true,
        }
    }

    pub fn matches(&self, text: &SearchableText, query: &SearchQuery) -> bool {
        match self {
            MatchStrategy::Strict => {
                if let Some(street) = &query.street {
                    if text.components.has_street(street) {
                        return true;
                    }
                }
                query.terms.iter().all(|term| text.matches_term(term))
            }
            MatchStrategy::FirstTerm => {
                let haystack = format!(
                    "{} {} {} {}",
                    text.title, text.location, text.description, text.property_type
                );
                haystack.contains(query.first_term())
            }
            MatchStrategy::FirstTermPrefix => {
                let haystack = format!("{} {} {}", text.title, text.location, text.description);
                haystack.contains(prefix(query.first_term(), 3))
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MatchStrategy::Strict => "strict",
            MatchStrategy::FirstTerm => "first-term",
            MatchStrategy::FirstTermPrefix => "first-term-prefix",
        }
    }
}

fn is_numeric(term: &str) -> bool {
    !term.is_empty() && term.chars().all(|c| c.is_ascii_digit())
}

/// `word` occurs in `haystack` with an ASCII word boundary on both sides
fn contains_word(haystack: &str, word: &str) -> bool {
    Regex::new(&format!(r"(?-u:\b){}(?-u:\b)", regex::escape(word)))
        .map_or(false, |pattern| pattern.is_match(haystack))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PropertyStatus;

    fn record(title: &str, location: &str, description: &str) -> PropertyRecord {
        PropertyRecord {
            id: "1".to_string(),
            title: title.to_string(),
            description: description.to_string(),
            location: location.to_string(),
            address: None,
            property_type: "Casa".to_string(),
            price: 100000.0,
            bedrooms: 2,
            bathrooms: 1,
            features: vec!["Piscina".to_string(), "Jardim de inverno".to_string()],
            amenities: vec!["Academia".to_string()],
            status: PropertyStatus::Available,
            featured: false,
            image: None,
            created_at: None,
        }
    }

    fn query(input: &str) -> SearchQuery {
        SearchQuery::parse(input).unwrap()
    }

    #[test]
    fn builds_full_text() {
        let text = SearchableText::new(&record("Casa Azul", "Rua X, 10", "Ampla"));
        assert_eq!(
            text.full_text,
            "casa azul rua x, 10 ampla casa piscina jardim de inverno academia"
        );
    }

    #[test]
    fn strict_requires_every_term() {
        let text = SearchableText::new(&record("Casa Azul", "Rua Ipanema, 10 - Centro", "Ampla"));
        assert!(MatchStrategy::Strict.matches(&text, &query("azul piscina academia")));
        assert!(!MatchStrategy::Strict.matches(&text, &query("azul cobertura")));
    }

    #[test]
    fn strict_street_short_circuit_skips_terms() {
        let text = SearchableText::new(&record("Casa", "Rua Ipanema, 10 - Centro", ""));
        // "zzzz" alone would never match, the street name carries the record
        assert!(MatchStrategy::Strict.matches(&text, &query("rua ipanema zzzz")));
        assert!(!MatchStrategy::Strict.matches(&text, &query("rua brasil zzzz")));
    }

    #[test]
    fn numeric_terms_match_whole_words_in_location() {
        assert!(contains_word("rua x, 123 - centro", "123"));
        assert!(!contains_word("rua x, 1234 - centro", "123"));
        assert!(contains_word("são 45", "45"));
        // accented letters are not ASCII word characters
        assert!(contains_word("nº45ã", "45"));
        assert!(!contains_word("lote_45", "45"));
        assert!(is_numeric("045"));
        assert!(!is_numeric("45a"));
        assert!(!is_numeric(""));
    }

    #[test]
    fn fallback_strategies_use_first_term() {
        let text = SearchableText::new(&record("Apartamento Luxo", "Av Brasil", "Vista mar"));
        assert!(MatchStrategy::FirstTerm.matches(&text, &query("luxo xyz")));
        assert!(!MatchStrategy::FirstTerm.matches(&text, &query("piscina")));
        assert!(MatchStrategy::FirstTermPrefix.matches(&text, &query("apaxxx")));
        assert!(!MatchStrategy::FirstTermPrefix.matches(&text, &query("pisc")));
    }

    #[test]
    fn prefix_strategy_needs_long_first_term() {
        assert!(MatchStrategy::FirstTermPrefix.applies_to(&query("apart")));
        assert!(!MatchStrategy::FirstTermPrefix.applies_to(&query("apt")));
        assert!(MatchStrategy::FirstTerm.applies_to(&query("apt")));
    }
}
