use crate::sources::{JsonFileSource, PropertySource, SupabaseSource};
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Runtime configuration, read from the environment
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub supabase_url: Option<String>,
    pub supabase_anon_key: Option<String>,
    /// Local JSON export used instead of the hosted database when set
    pub properties_file: Option<PathBuf>,
    pub http_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            supabase_url: None,
            supabase_anon_key: None,
            properties_file: None,
            http_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. The `VITE_` names are what the web front end
    /// deploys with, so they are accepted as fallbacks.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let http_timeout = match get("IMOVEL_HTTP_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(
                raw.trim()
                    .parse()
                    .with_context(|| format!("Invalid IMOVEL_HTTP_TIMEOUT_SECS: {}", raw))?,
            ),
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            supabase_url: get("SUPABASE_URL").or_else(|| get("VITE_SUPABASE_URL")),
            supabase_anon_key: get("SUPABASE_ANON_KEY").or_else(|| get("VITE_SUPABASE_ANON_KEY")),
            properties_file: get("IMOVEL_PROPERTIES_FILE").map(PathBuf::from),
            http_timeout,
        })
    }

    pub fn with_properties_file(self, path: Option<PathBuf>) -> Self {
        Self {
            properties_file: path.or(self.properties_file),
            ..self
        }
    }

    /// Pick the data source: a local file when configured, the hosted database otherwise
    pub fn source(&self) -> Result<Box<dyn PropertySource>> {
        if let Some(path) = &self.properties_file {
            info!("Using properties file {}", path.display());
            return Ok(Box::new(JsonFileSource::new(path.clone())));
        }

        match (&self.supabase_url, &self.supabase_anon_key) {
            (Some(url), Some(key)) => {
                info!("Using hosted database at {}", url);
                Ok(Box::new(SupabaseSource::with_timeout(
                    url.clone(),
                    key.clone(),
                    self.http_timeout,
                )?))
            }
            _ => {
                warn!("Missing Supabase environment variables");
                anyhow::bail!(
                    "No property source configured: set SUPABASE_URL and SUPABASE_ANON_KEY or pass --file"
                )
            }
        }
    }
}
