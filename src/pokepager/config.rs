use crate::error::{PagerError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

pub const CONFIG_FILENAME: &str = "pokepager.json";
pub const DEFAULT_INDEX_SOURCE: &str = "json/base_names.json";
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2/pokemon/";
pub const DEFAULT_PAGE_SIZE: usize = 10;
/// Upper bound on card slots per page.
pub const MAX_PAGE_SIZE: usize = 100;
/// Total used when the name index turns out to be empty.
pub const DEFAULT_FALLBACK_TOTAL: usize = 341;

/// Configuration for pokepager, stored in ./pokepager.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PagerConfig {
    /// Path or http(s) URL of the name index document
    #[serde(default = "default_index_source")]
    pub index_source: String,

    /// Lookup endpoint; identifiers are appended to it
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Number of card slots per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    #[serde(default = "default_fallback_total")]
    pub fallback_total: usize,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout. Absent means the transport default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

fn default_index_source() -> String {
    DEFAULT_INDEX_SOURCE.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_fallback_total() -> usize {
    DEFAULT_FALLBACK_TOTAL
}

fn default_user_agent() -> String {
    format!("pokepager/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            index_source: default_index_source(),
            base_url: default_base_url(),
            page_size: DEFAULT_PAGE_SIZE,
            fallback_total: DEFAULT_FALLBACK_TOTAL,
            user_agent: default_user_agent(),
            timeout_secs: None,
        }
    }
}

impl PagerConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        Self::load_file(config_dir.as_ref().join(CONFIG_FILENAME))
    }

    /// Load config from an explicit file path, or return defaults if it does not exist
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(PagerError::Io)?;
        let config: PagerConfig =
            serde_json::from_str(&content).map_err(PagerError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given file path
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(PagerError::Io)?;
            }
        }

        let content = serde_json::to_string_pretty(self).map_err(PagerError::Serialization)?;
        fs::write(path, content).map_err(PagerError::Io)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(PagerError::Config("page_size must be greater than 0".into()));
        }
        if self.page_size > MAX_PAGE_SIZE {
            return Err(PagerError::Config(format!(
                "page_size must be at most {}",
                MAX_PAGE_SIZE
            )));
        }
        if self.base_url.trim().is_empty() {
            return Err(PagerError::Config("base_url cannot be empty".into()));
        }
        if self.index_source.trim().is_empty() {
            return Err(PagerError::Config("index_source cannot be empty".into()));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Builds the HTTP client shared by the index loader and the lookup service.
    pub fn http_client(&self) -> Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder().user_agent(self.user_agent.clone());
        if let Some(timeout) = self.timeout() {
            builder = builder.timeout(timeout);
        }
        builder
            .build()
            .map_err(|e| PagerError::Config(format!("cannot build HTTP client: {}", e)))
    }
}
