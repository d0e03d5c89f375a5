use super::RecordLookup;
use crate::error::{PagerError, Result};
use crate::model::Record;
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::Value;

/// Catalog lookup over HTTP.
#[derive(Debug, Clone)]
pub struct HttpLookup {
    client: Client,
    base_url: String,
}

impl HttpLookup {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Appends the identifier to the base URL as one percent-encoded path
    /// segment. A trailing slash on the base URL is not doubled.
    pub fn url_for(&self, identifier: &str) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| PagerError::lookup(identifier, format!("invalid base URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| PagerError::lookup(identifier, "base URL cannot take a path"))?
            .pop_if_empty()
            .push(identifier);
        Ok(url)
    }
}

#[async_trait]
impl RecordLookup for HttpLookup {
    async fn lookup(&self, identifier: &str) -> Result<Record> {
        let url = self.url_for(identifier)?;

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| PagerError::lookup(identifier, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PagerError::lookup(
                identifier,
                format!("HTTP {} for {}", status.as_u16(), url),
            ));
        }

        let data: Value = response
            .json()
            .await
            .map_err(|e| PagerError::lookup(identifier, format!("invalid body: {}", e)))?;

        Ok(Record::new(identifier, data))
    }
}
