use crate::models::PropertyRecord;
use crate::sources::types::FetchParams;
use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

/// Common trait for all property data stores
/// The filter engine never talks to a source; callers fetch first, then filter.
#[async_trait]
pub trait PropertySource: Send + Sync {
    /// Fetch records matching the equality filters in `params`, newest first
    async fn fetch(&self, params: &FetchParams) -> Result<Vec<PropertyRecord>>;

    /// Get the name of the data source
    fn source_name(&self) -> &'static str;

    /// Listable records that are available for sale
    async fn fetch_available(&self) -> Result<Vec<PropertyRecord>> {
        let records = self.fetch(&FetchParams::available()).await?;
        Ok(listable(self.source_name(), records))
    }

    /// Listable, featured records that are available for sale
    async fn fetch_featured(&self) -> Result<Vec<PropertyRecord>> {
        let records = self.fetch(&FetchParams::featured()).await?;
        Ok(listable(self.source_name(), records))
    }

    /// A single record by id, whatever its status
    async fn fetch_by_id(&self, id: &str) -> Result<Option<PropertyRecord>> {
        let records = self.fetch(&FetchParams::by_id(id)).await?;
        Ok(records.into_iter().next())
    }
}

fn listable(source: &str, records: Vec<PropertyRecord>) -> Vec<PropertyRecord> {
    let total = records.len();
    let kept: Vec<PropertyRecord> = records.into_iter().filter(PropertyRecord::is_listable).collect();
    if kept.len() < total {
        info!(
            "{}: skipped {} incomplete properties out of {}",
            source,
            total - kept.len(),
            total
        );
    }
    kept
}
