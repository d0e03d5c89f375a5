//! # Name Index
//!
//! The name index is the ordered list of identifiers that defines what exists
//! and in which order it is paged. It is loaded once at startup and never
//! mutated afterwards.
//!
//! ## Sources
//!
//! An [`IndexSource`] is either a local file or an `http(s)://` URL. Both yield
//! the same JSON document:
//!
//! ```json
//! { "meta": { "source": "derived-from-base_index", "count": 3 },
//!   "bases": ["bulbasaur", "charmander", "squirtle"] }
//! ```
//!
//! `meta` is optional. Only `bases` drives pagination.
//!
//! ## Failure Policy
//!
//! - Unreadable or unparsable source: [`PagerError::IndexUnavailable`]. This is
//!   the only error that stops the client from starting.
//! - Empty `bases`: not an error. The index reports the configured fallback
//!   total so navigation can still be drawn.

use crate::error::{PagerError, Result};
use crate::model::{IndexDocument, NameIndex};
use reqwest::Client;
use std::fmt;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexSource {
    File(PathBuf),
    Url(String),
}

impl IndexSource {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            IndexSource::Url(trimmed.to_string())
        } else {
            IndexSource::File(PathBuf::from(trimmed))
        }
    }
}

impl fmt::Display for IndexSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexSource::File(path) => write!(f, "{}", path.display()),
            IndexSource::Url(url) => write!(f, "{}", url),
        }
    }
}

/// Loads the name index from its source.
pub struct IndexLoader {
    client: Client,
    fallback_total: usize,
}

impl IndexLoader {
    pub fn new(client: Client, fallback_total: usize) -> Self {
        Self {
            client,
            fallback_total,
        }
    }

    pub async fn load(&self, source: &IndexSource) -> Result<NameIndex> {
        let raw = match source {
            IndexSource::File(path) => tokio::fs::read_to_string(path).await.map_err(|e| {
                PagerError::IndexUnavailable(format!("cannot read {}: {}", path.display(), e))
            })?,
            IndexSource::Url(url) => self.fetch(url).await?,
        };

        let index = parse_index(&raw, self.fallback_total)
            .map_err(|e| PagerError::IndexUnavailable(format!("{}: {}", source, e)))?;

        if index.is_fallback() {
            warn!(
                source = %source,
                fallback_total = index.total_count(),
                "name index is empty, using fallback total"
            );
        } else {
            info!(source = %source, total = index.total_count(), "name index loaded");
        }
        Ok(index)
    }

    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| PagerError::IndexUnavailable(format!("{}: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PagerError::IndexUnavailable(format!(
                "HTTP {} for {}",
                status.as_u16(),
                url
            )));
        }

        response
            .text()
            .await
            .map_err(|e| PagerError::IndexUnavailable(format!("{}: {}", url, e)))
    }
}

/// Parses an index document. Empty `bases` yields an index with `fallback_total`.
pub fn parse_index(raw: &str, fallback_total: usize) -> Result<NameIndex> {
    let doc: IndexDocument = serde_json::from_str(raw)?;

    if let Some(declared) = doc.meta.as_ref().and_then(|m| m.count) {
        if declared != doc.bases.len() {
            warn!(
                declared,
                actual = doc.bases.len(),
                "index meta count does not match bases"
            );
        }
    }

    Ok(NameIndex::with_fallback(doc.bases, fallback_total).with_meta(doc.meta))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::CatalogServer;

    const DOC: &str = r#"{
        "meta": { "source": "derived-from-base_index", "count": 3 },
        "bases": ["bulbasaur", "charmander", "squirtle"]
    }"#;

    #[test]
    fn source_parse_distinguishes_urls_from_paths() {
        assert_eq!(
            IndexSource::parse("https://example.test/json/base_names.json"),
            IndexSource::Url("https://example.test/json/base_names.json".into())
        );
        assert_eq!(
            IndexSource::parse("json/base_names.json"),
            IndexSource::File(PathBuf::from("json/base_names.json"))
        );
    }

    #[test]
    fn parse_keeps_order_and_meta() {
        let index = parse_index(DOC, 341).unwrap();
        assert_eq!(index.total_count(), 3);
        assert_eq!(
            index.identifiers(),
            &["bulbasaur", "charmander", "squirtle"]
        );
        assert_eq!(
            index.meta().and_then(|m| m.source.as_deref()),
            Some("derived-from-base_index")
        );
    }

    #[test]
    fn parse_empty_bases_falls_back() {
        let index = parse_index(r#"{"bases": []}"#, 341).unwrap();
        assert_eq!(index.total_count(), 341);
        assert!(index.is_fallback());
    }

    #[test]
    fn parse_rejects_missing_bases() {
        assert!(parse_index(r#"{"names": ["a"]}"#, 341).is_err());
    }

    #[tokio::test]
    async fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("base_names.json");
        std::fs::write(&path, DOC).unwrap();

        let loader = IndexLoader::new(Client::new(), 341);
        let index = loader.load(&IndexSource::File(path)).await.unwrap();
        assert_eq!(index.get(0), Some("bulbasaur"));
    }

    #[tokio::test]
    async fn missing_file_is_index_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let loader = IndexLoader::new(Client::new(), 341);

        let result = loader
            .load(&IndexSource::File(dir.path().join("nope.json")))
            .await;
        assert!(matches!(result, Err(PagerError::IndexUnavailable(_))));
    }

    #[tokio::test]
    async fn malformed_file_is_index_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("base_names.json");
        std::fs::write(&path, "[1, 2").unwrap();

        let loader = IndexLoader::new(Client::new(), 341);
        let result = loader.load(&IndexSource::File(path)).await;
        assert!(matches!(result, Err(PagerError::IndexUnavailable(_))));
    }

    #[tokio::test]
    async fn load_from_url() {
        let server = CatalogServer::start(&[]).with_route("/json/base_names.json", 200, DOC);
        let loader = IndexLoader::new(Client::new(), 341);

        let source = IndexSource::parse(&server.url("/json/base_names.json"));
        let index = loader.load(&source).await.unwrap();
        assert_eq!(index.total_count(), 3);
    }

    #[tokio::test]
    async fn url_error_status_is_index_unavailable() {
        let server = CatalogServer::start(&[]);
        let loader = IndexLoader::new(Client::new(), 341);

        let source = IndexSource::parse(&server.url("/json/base_names.json"));
        let result = loader.load(&source).await;
        assert!(matches!(result, Err(PagerError::IndexUnavailable(_))));
    }
}
