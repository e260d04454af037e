use crate::models::PropertyRecord;
use crate::sources::traits::PropertySource;
use crate::sources::types::FetchParams;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::Duration;
use tracing::{debug, info, warn};

const TABLE_PATH: &str = "rest/v1/properties";

/// Reads properties from the hosted database's REST endpoint
pub struct SupabaseSource {
    client: Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseSource {
    /// Create a new source with the default 30 second timeout
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, anon_key, Duration::from_secs(30))
    }

    pub fn with_timeout(
        base_url: impl Into<String>,
        anon_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("imovel-scout/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            anon_key: anon_key.into(),
        })
    }

    /// Build the table query for `params`
    pub fn request_url(&self, params: &FetchParams) -> Result<Url> {
        let endpoint = format!("{}/{}", self.base_url.trim_end_matches('/'), TABLE_PATH);
        let mut url = Url::parse(&endpoint)
            .with_context(|| format!("Invalid database URL: {}", self.base_url))?;

        {
            let mut query = url.query_pairs_mut();
            query.append_pair("select", "*");
            if let Some(id) = &params.id {
                query.append_pair("id", &format!("eq.{}", id));
            }
            if let Some(status) = params.status {
                query.append_pair("status", &format!("eq.{}", status.as_str()));
            }
            if let Some(featured) = params.featured {
                query.append_pair("featured", &format!("eq.{}", featured));
            }
            query.append_pair("order", "created_at.desc");
            if let Some(limit) = params.limit {
                query.append_pair("limit", &limit.to_string());
            }
        }

        Ok(url)
    }
}

/// Decode a JSON array of table rows
pub fn parse_rows(body: &str) -> Result<Vec<PropertyRecord>> {
    serde_json::from_str(body).context("Failed to decode properties response")
}

#[async_trait]
impl PropertySource for SupabaseSource {
    async fn fetch(&self, params: &FetchParams) -> Result<Vec<PropertyRecord>> {
        let url = self.request_url(params)?;
        debug!("Fetching URL: {}", url);

        let response = self
            .client
            .get(url)
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .context("Failed to fetch properties")?;

        if !response.status().is_success() {
            warn!("Database returned status: {}", response.status());
            anyhow::bail!("Failed to fetch properties: {}", response.status());
        }

        let body = response.text().await.context("Failed to read response body")?;
        debug!("Downloaded {} bytes of JSON", body.len());

        let records = parse_rows(&body)?;
        info!("Fetched {} properties from {}", records.len(), self.source_name());
        Ok(records)
    }

    fn source_name(&self) -> &'static str {
        "Supabase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> SupabaseSource {
        SupabaseSource::new("https://demo.supabase.co/", "anon-key").unwrap()
    }

    #[test]
    fn builds_listing_query() {
        let url = source().request_url(&FetchParams::available()).unwrap();
        assert_eq!(
            url.as_str(),
            "https://demo.supabase.co/rest/v1/properties?select=*&status=eq.available&order=created_at.desc"
        );
    }

    #[test]
    fn builds_featured_and_id_queries() {
        let url = source()
            .request_url(&FetchParams::featured().with_limit(3))
            .unwrap();
        assert_eq!(
            url.query(),
            Some("select=*&status=eq.available&featured=eq.true&order=created_at.desc&limit=3")
        );

        let url = source().request_url(&FetchParams::by_id("abc-123")).unwrap();
        assert_eq!(
            url.query(),
            Some("select=*&id=eq.abc-123&order=created_at.desc&limit=1")
        );
    }

    #[test]
    fn rejects_invalid_base_url() {
        let source = SupabaseSource::new("not a url", "key").unwrap();
        assert!(source.request_url(&FetchParams::available()).is_err());
    }

    #[test]
    fn parses_rows() {
        let body = r#"[
            {"id":"1","title":"Casa","location":"Rua A, 1","price":10,"status":"available"},
            {"id":"2","title":"Apto","location":"Av B, 2","price":20,"status":"pending","features":null}
        ]"#;
        let records = parse_rows(body).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].id, "2");
        assert!(parse_rows("{\"message\":\"denied\"}").is_err());
    }
}
