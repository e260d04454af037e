//! Property search and filter engine.
//!
//! A pure pipeline over an already fetched record set: an optional free-text
//! stage followed by the structured stages (type, price range, bedrooms,
//! bathrooms). Each stage narrows the survivors of the previous one and the
//! input order is always preserved.

pub mod address;
pub mod query;
pub mod strategy;

pub use address::{AddressComponent, AddressComponents, ComponentTag};
pub use query::SearchQuery;
pub use strategy::{MatchStrategy, SearchableText, FALLBACK_CHAIN};

use crate::error::Result;
use crate::models::{FilterCriteria, FilterSpec, PropertyRecord};
use tracing::debug;

/// Filter `records` by `spec`, returning the matching records in input order.
///
/// Fails only when a numeric field of the spec does not parse. A query that
/// matches nothing is a normal, empty result.
pub fn filter_properties<'a>(
    records: &'a [PropertyRecord],
    spec: &FilterSpec,
) -> Result<Vec<&'a PropertyRecord>> {
    let criteria = spec.parse()?;
    Ok(apply(records, &criteria))
}

/// Run the pipeline with already validated criteria
pub fn apply<'a>(records: &'a [PropertyRecord], criteria: &FilterCriteria) -> Vec<&'a PropertyRecord> {
    let mut matched: Vec<&PropertyRecord> =
        match criteria.search.as_deref().and_then(SearchQuery::parse) {
            Some(query) => search(records, &query),
            None => records.iter().collect(),
        };

    if let Some(property_type) = &criteria.property_type {
        let wanted = property_type.to_lowercase();
        narrow(&mut matched, |r| r.property_type.to_lowercase() == wanted);
    }
    if let Some(min) = criteria.price_min {
        narrow(&mut matched, |r| r.price >= min);
    }
    if let Some(max) = criteria.price_max {
        narrow(&mut matched, |r| r.price <= max);
    }
    if let Some(min) = criteria.bedrooms {
        narrow(&mut matched, |r| i64::from(r.bedrooms) >= min);
    }
    if let Some(min) = criteria.bathrooms {
        narrow(&mut matched, |r| i64::from(r.bathrooms) >= min);
    }

    matched
}

/// Text stage: the first strategy of the chain with a non-empty result wins.
///
/// Every strategy runs against the full input, not against the survivors of
/// the previous strategy.
pub fn search<'a>(records: &'a [PropertyRecord], query: &SearchQuery) -> Vec<&'a PropertyRecord> {
    debug!(terms = ?query.terms, street = ?query.street, "searching properties");

    let texts: Vec<SearchableText> = records.iter().map(SearchableText::new).collect();

    for strategy in FALLBACK_CHAIN {
        if !strategy.applies_to(query) {
            continue;
        }
        let found: Vec<&PropertyRecord> = records
            .iter()
            .zip(&texts)
            .filter(|(_, text)| strategy.matches(text, query))
            .map(|(record, _)| record)
            .collect();

        if !found.is_empty() {
            if strategy != MatchStrategy::Strict {
                debug!(strategy = strategy.name(), matches = found.len(), "fallback search matched");
            }
            return found;
        }
    }

    debug!(query = %query.normalized, "no property matched search");
    Vec::new()
}

fn narrow<F>(matched: &mut Vec<&PropertyRecord>, keep: F)
where
    F: Fn(&PropertyRecord) -> bool,
{
    if matched.is_empty() {
        return;
    }
    matched.retain(|record| keep(record));
}
