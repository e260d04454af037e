use crate::models::{PropertyRecord, PropertyStatus};
use serde::{Deserialize, Serialize};

/// Equality filters for reading the `properties` table.
///
/// Results are always ordered by `created_at`, newest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FetchParams {
    pub status: Option<PropertyStatus>,
    pub featured: Option<bool>,
    pub id: Option<String>,
    pub limit: Option<usize>,
}

impl FetchParams {
    /// The public listing query
    pub fn available() -> Self {
        Self {
            status: Some(PropertyStatus::Available),
            ..Self::default()
        }
    }

    /// The home page highlight query
    pub fn featured() -> Self {
        Self {
            status: Some(PropertyStatus::Available),
            featured: Some(true),
            ..Self::default()
        }
    }

    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            limit: Some(1),
            ..Self::default()
        }
    }

    pub fn with_limit(self, limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..self
        }
    }

    /// Whether a record satisfies the equality filters (ordering and limit aside)
    pub fn matches(&self, record: &PropertyRecord) -> bool {
        self.status.map_or(true, |status| record.status == status)
            && self.featured.map_or(true, |featured| record.featured == featured)
            && self.id.as_deref().map_or(true, |id| record.id == id)
    }
}
