//! Address tokenizer and street component classifier.
//!
//! Locations are unstructured free text such as `"Rua Ipanema, 123 - Centro"`.
//! They are split into components on commas, on `" - "` separators and on
//! whitespace, and each component is tagged so street matching does not have
//! to re-derive intent from the raw string.

use super::query::STREET_PREFIXES;
use once_cell::sync::Lazy;
use regex::Regex;

static COMPONENT_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r",\s*|\s+-\s*|\s+").expect("separator is a valid regex"));

static STREET_KEYWORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(r|rua|av|avenida|travessa|alameda|estrada)\.?$")
        .expect("street keyword is a valid regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentTag {
    /// A standalone prefix token such as `rua` or `av.`
    StreetKeyword,
    /// The component right after a street keyword, keyword words included
    StreetName,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressComponent {
    pub text: String,
    pub tag: ComponentTag,
}

impl AddressComponent {
    pub fn is_street(&self) -> bool {
        self.tag == ComponentTag::StreetName
    }
}

/// Tagged components of one location string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressComponents(Vec<AddressComponent>);

impl AddressComponents {
    /// Split and classify an already lowercased location.
    pub fn parse(location: &str) -> Self {
        let parts: Vec<&str> = COMPONENT_SEPARATOR
            .split(location)
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();

        let mut components = Vec::with_capacity(parts.len());
        let mut previous_is_keyword = false;
        for part in parts {
            let is_keyword = STREET_KEYWORD.is_match(part);
            // "r. estrada velha": "estrada" names the street even though it is a keyword too
            let tag = if previous_is_keyword || starts_with_street_prefix(part) {
                ComponentTag::StreetName
            } else if is_keyword {
                ComponentTag::StreetKeyword
            } else {
                ComponentTag::Other
            };
            components.push(AddressComponent {
                text: part.to_string(),
                tag,
            });
            previous_is_keyword = is_keyword;
        }

        Self(components)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AddressComponent> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when a street component contains the given street name
    pub fn has_street(&self, street: &str) -> bool {
        self.iter()
            .any(|component| component.is_street() && component.text.contains(street))
    }

    /// Term check used by the strict strategy.
    ///
    /// A component matches when it contains the term, or when both are longer
    /// than three characters and the component contains the term's first three.
    pub fn matches_term(&self, term: &str) -> bool {
        let term_prefix = (term.chars().count() > 3).then(|| prefix(term, 3));
        self.iter().any(|component| {
            component.text.contains(term)
                || term_prefix.map_or(false, |p| {
                    component.text.chars().count() > 3 && component.text.contains(p)
                })
        })
    }
}

// Components never carry whitespace after splitting, so in practice street
// names are found through the preceding keyword.
fn starts_with_street_prefix(part: &str) -> bool {
    STREET_PREFIXES.iter().any(|p| part.starts_with(p))
}

/// First `n` characters of `s`
pub(crate) fn prefix(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
