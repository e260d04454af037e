use crate::models::PropertyRecord;
use crate::sources::traits::PropertySource;
use crate::sources::types::FetchParams;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Reads properties from a local JSON export of the `properties` table
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Apply equality filters, newest-first ordering and limit to an in-memory table.
///
/// Rows without `created_at` sort after dated rows and keep their file order.
pub fn select(records: Vec<PropertyRecord>, params: &FetchParams) -> Vec<PropertyRecord> {
    let mut selected: Vec<PropertyRecord> =
        records.into_iter().filter(|r| params.matches(r)).collect();
    selected.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    if let Some(limit) = params.limit {
        selected.truncate(limit);
    }
    selected
}

#[async_trait]
impl PropertySource for JsonFileSource {
    async fn fetch(&self, params: &FetchParams) -> Result<Vec<PropertyRecord>> {
        debug!("Reading {}", self.path.display());

        let json = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let records: Vec<PropertyRecord> = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse {}", self.path.display()))?;

        let selected = select(records, params);
        info!("Loaded {} properties from {}", selected.len(), self.path.display());
        Ok(selected)
    }

    fn source_name(&self) -> &'static str {
        "JSON file"
    }
}
