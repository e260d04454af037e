mod filter_spec;

pub use filter_spec::{FilterCriteria, FilterSpec};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Listing status of a property
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PropertyStatus {
    Available,
    Sold,
    Pending,
}

impl PropertyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyStatus::Available => "available",
            PropertyStatus::Sold => "sold",
            PropertyStatus::Pending => "pending",
        }
    }
}

/// Core property data model, one row of the `properties` table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PropertyRecord {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Free-text address, e.g. "Rua Ipanema, 123 - Centro"
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub property_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bedrooms: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bathrooms: u32,
    #[serde(default, deserialize_with = "string_list")]
    pub features: Vec<String>,
    #[serde(default, deserialize_with = "string_list")]
    pub amenities: Vec<String>,
    pub status: PropertyStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl PropertyRecord {
    /// Whether the record carries enough data to appear on the public listing.
    ///
    /// Rows without an id, title, location or a non-zero price are dropped
    /// right after fetching, before any filtering happens.
    pub fn is_listable(&self) -> bool {
        !self.id.trim().is_empty()
            && !self.title.trim().is_empty()
            && !self.location.trim().is_empty()
            && self.price != 0.0
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn stringify(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}

// Older rows store features as a single comma separated string instead of an
// array, and hand-edited rows can hold numbers or booleans.
fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let list = match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.into_iter().filter_map(stringify).collect(),
        Some(other) => stringify(other)
            .filter(|item| !item.trim().is_empty())
            .into_iter()
            .collect(),
    };
    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_table_row_with_nulls() {
        let row = json!({
            "id": "a1",
            "title": "Casa com piscina",
            "description": null,
            "location": "Rua Ipanema, 123 - Centro",
            "property_type": "Casa",
            "price": 500000,
            "bedrooms": null,
            "bathrooms": 2,
            "features": ["Piscina", null, "Churrasqueira"],
            "status": "available",
            "created_at": "2024-03-01T12:00:00Z"
        });

        let record: PropertyRecord = serde_json::from_value(row).unwrap();
        assert_eq!(record.description, "");
        assert_eq!(record.bedrooms, 0);
        assert_eq!(record.features, vec!["Piscina", "Churrasqueira"]);
        assert!(record.amenities.is_empty());
        assert_eq!(record.status, PropertyStatus::Available);
        assert!(record.created_at.is_some());
        assert!(!record.featured);
    }

    #[test]
    fn decodes_features_stored_as_string() {
        let row = json!({
            "id": "a2",
            "title": "Apartamento",
            "location": "Av Brasil, 45",
            "price": 1,
            "features": "Varanda gourmet, Portaria 24h",
            "amenities": "",
            "status": "sold"
        });

        let record: PropertyRecord = serde_json::from_value(row).unwrap();
        assert_eq!(record.features, vec!["Varanda gourmet, Portaria 24h"]);
        assert!(record.amenities.is_empty());
        assert_eq!(record.status, PropertyStatus::Sold);
    }

    #[test]
    fn stringifies_non_string_features() {
        let row = json!({
            "id": "a5",
            "title": "Casa",
            "location": "Rua A, 1",
            "price": 1,
            "features": [3, "Piscina", true, null],
            "amenities": 24,
            "status": "pending"
        });

        let record: PropertyRecord = serde_json::from_value(row).unwrap();
        assert_eq!(record.features, vec!["3", "Piscina", "true"]);
        assert_eq!(record.amenities, vec!["24"]);
    }

    #[test]
    fn rejects_unknown_status() {
        let row = json!({ "id": "a3", "status": "archived" });
        assert!(serde_json::from_value::<PropertyRecord>(row).is_err());
    }

    #[test]
    fn listable_requires_core_fields() {
        let row = json!({
            "id": "a4",
            "title": "Terreno",
            "location": "Estrada Velha, km 3",
            "price": 120000,
            "status": "available"
        });
        let record: PropertyRecord = serde_json::from_value(row).unwrap();
        assert!(record.is_listable());

        let mut no_price = record.clone();
        no_price.price = 0.0;
        assert!(!no_price.is_listable());

        let mut no_title = record.clone();
        no_title.title = "  ".to_string();
        assert!(!no_title.is_listable());

        let mut no_location = record;
        no_location.location.clear();
        assert!(!no_location.is_listable());
    }
}
