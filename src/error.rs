use std::fmt;
use thiserror::Error;

/// Numeric fields of a [`crate::models::FilterSpec`] that must parse before filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    PriceMin,
    PriceMax,
    Bedrooms,
    Bathrooms,
}

impl FilterField {
    /// Name of the field as it appears in query strings and serialized specs
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterField::PriceMin => "priceMin",
            FilterField::PriceMax => "priceMax",
            FilterField::Bedrooms => "bedrooms",
            FilterField::Bathrooms => "bathrooms",
        }
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FilterError {
    #[error("invalid value for {field}: {value:?}")]
    InvalidFilterValue { field: FilterField, value: String },
    #[error("invalid filter url: {0}")]
    InvalidUrl(String),
}

pub type Result<T> = std::result::Result<T, FilterError>;
