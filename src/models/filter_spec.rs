use crate::error::{FilterError, FilterField, Result};
use serde::{Deserialize, Serialize};

/// User supplied search and filter constraints for one query.
///
/// Every field is optional and `None`, `""` and whitespace-only strings all
/// mean "no constraint". Values are kept as the raw strings the caller typed;
/// [`FilterSpec::parse`] turns them into typed [`FilterCriteria`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterSpec {
    pub search: Option<String>,
    pub price_min: Option<String>,
    pub price_max: Option<String>,
    pub bedrooms: Option<String>,
    pub bathrooms: Option<String>,
    pub property_type: Option<String>,
}

/// Validated form of a [`FilterSpec`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub search: Option<String>,
    pub property_type: Option<String>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub bedrooms: Option<i64>,
    pub bathrooms: Option<i64>,
}

fn set(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn parse_number(field: FilterField, value: &Option<String>) -> Result<Option<f64>> {
    let Some(raw) = set(value) else {
        return Ok(None);
    };
    match raw.parse::<f64>() {
        Ok(amount) if amount.is_finite() => Ok(Some(amount)),
        _ => Err(FilterError::InvalidFilterValue {
            field,
            value: raw.to_string(),
        }),
    }
}

/// Room thresholds accept any finite number and truncate toward zero, so
/// `"2.5"` means "at least 2".
fn parse_count(field: FilterField, value: &Option<String>) -> Result<Option<i64>> {
    Ok(parse_number(field, value)?.map(|count| count.trunc() as i64))
}

impl FilterSpec {
    /// Build a spec from URL query parameters.
    ///
    /// The listing page links use `search` and `type`; the numeric filters are
    /// accepted under their camelCase names. Unknown keys are ignored.
    pub fn from_query_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut spec = FilterSpec::default();
        for (key, value) in pairs {
            let value = Some(value.as_ref().to_string());
            match key.as_ref() {
                "search" => spec.search = value,
                "type" | "propertyType" => spec.property_type = value,
                "priceMin" => spec.price_min = value,
                "priceMax" => spec.price_max = value,
                "bedrooms" => spec.bedrooms = value,
                "bathrooms" => spec.bathrooms = value,
                _ => {}
            }
        }
        spec
    }

    /// Build a spec from the query string of a listing URL
    pub fn from_url(url: &str) -> Result<Self> {
        let url = reqwest::Url::parse(url).map_err(|e| FilterError::InvalidUrl(e.to_string()))?;
        Ok(Self::from_query_pairs(url.query_pairs()))
    }

    pub fn with_search(self, search: impl Into<String>) -> Self {
        Self {
            search: Some(search.into()),
            ..self
        }
    }

    pub fn with_property_type(self, property_type: impl Into<String>) -> Self {
        Self {
            property_type: Some(property_type.into()),
            ..self
        }
    }

    pub fn with_price_min(self, price_min: impl Into<String>) -> Self {
        Self {
            price_min: Some(price_min.into()),
            ..self
        }
    }

    pub fn with_price_max(self, price_max: impl Into<String>) -> Self {
        Self {
            price_max: Some(price_max.into()),
            ..self
        }
    }

    pub fn with_bedrooms(self, bedrooms: impl Into<String>) -> Self {
        Self {
            bedrooms: Some(bedrooms.into()),
            ..self
        }
    }

    pub fn with_bathrooms(self, bathrooms: impl Into<String>) -> Self {
        Self {
            bathrooms: Some(bathrooms.into()),
            ..self
        }
    }

    /// Return a new spec where every field set in `overrides` replaces ours
    pub fn overlay(self, overrides: FilterSpec) -> Self {
        fn pick(base: Option<String>, over: Option<String>) -> Option<String> {
            if set(&over).is_some() {
                over
            } else {
                base
            }
        }

        Self {
            search: pick(self.search, overrides.search),
            price_min: pick(self.price_min, overrides.price_min),
            price_max: pick(self.price_max, overrides.price_max),
            bedrooms: pick(self.bedrooms, overrides.bedrooms),
            bathrooms: pick(self.bathrooms, overrides.bathrooms),
            property_type: pick(self.property_type, overrides.property_type),
        }
    }

    /// True when no field constrains the result
    pub fn is_empty(&self) -> bool {
        [
            &self.search,
            &self.price_min,
            &self.price_max,
            &self.bedrooms,
            &self.bathrooms,
            &self.property_type,
        ]
        .into_iter()
        .all(|field| set(field).is_none())
    }

    /// Validate the numeric fields and normalize the unset representations.
    pub fn parse(&self) -> Result<FilterCriteria> {
        Ok(FilterCriteria {
            search: set(&self.search).map(str::to_string),
            property_type: set(&self.property_type).map(str::to_string),
            price_min: parse_number(FilterField::PriceMin, &self.price_min)?,
            price_max: parse_number(FilterField::PriceMax, &self.price_max)?,
            bedrooms: parse_count(FilterField::Bedrooms, &self.bedrooms)?,
            bathrooms: parse_count(FilterField::Bathrooms, &self.bathrooms)?,
        })
    }
}
