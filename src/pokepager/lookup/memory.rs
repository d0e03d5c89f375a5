use super::RecordLookup;
use crate::error::{PagerError, Result};
use crate::model::Record;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

/// In-memory lookup for testing and development.
/// Unknown identifiers and identifiers marked as failing are misses.
#[derive(Default)]
pub struct InMemoryLookup {
    records: HashMap<String, Value>,
    failing: HashSet<String>,
    delay: Option<Duration>,
    calls: Mutex<Vec<String>>,
}

impl InMemoryLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, identifier: &str, data: Value) {
        self.records.insert(identifier.to_string(), data);
    }

    pub fn fail(&mut self, identifier: &str) {
        self.failing.insert(identifier.to_string());
    }

    /// Makes every lookup sleep first, so a page load stays in flight.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Identifiers looked up so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl RecordLookup for InMemoryLookup {
    async fn lookup(&self, identifier: &str) -> Result<Record> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(identifier.to_string());
        }
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.failing.contains(identifier) {
            return Err(PagerError::lookup(identifier, "HTTP 500"));
        }
        self.records
            .get(identifier)
            .cloned()
            .map(|data| Record::new(identifier, data))
            .ok_or_else(|| PagerError::lookup(identifier, "HTTP 404"))
    }
}

// --- Test Fixtures ---

pub mod fixtures {
    use super::*;
    use crate::model::NameIndex;
    use serde_json::json;

    /// Generated identifiers `mon-000`, `mon-001`, ...
    pub fn identifiers(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("mon-{:03}", i)).collect()
    }

    pub struct CatalogFixture {
        pub index: NameIndex,
        pub lookup: InMemoryLookup,
    }

    impl CatalogFixture {
        /// A catalog of `count` generated creatures that all resolve.
        pub fn with_creatures(count: usize) -> Self {
            let names = identifiers(count);
            let mut lookup = InMemoryLookup::new();
            for name in &names {
                lookup.insert(name, json!({ "name": name }));
            }
            Self {
                index: NameIndex::new(names),
                lookup,
            }
        }

        /// A catalog over explicit identifiers that all resolve.
        pub fn with_names(names: &[&str]) -> Self {
            let names: Vec<String> = names.iter().map(|s| s.to_string()).collect();
            let mut lookup = InMemoryLookup::new();
            for name in &names {
                lookup.insert(name, json!({ "name": name }));
            }
            Self {
                index: NameIndex::new(names),
                lookup,
            }
        }

        pub fn failing(mut self, identifier: &str) -> Self {
            self.lookup.fail(identifier);
            self
        }

        pub fn with_delay(mut self, delay: Duration) -> Self {
            self.lookup = self.lookup.with_delay(delay);
            self
        }
    }
}
