use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Optional provenance block written by the index build tooling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexMeta {
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub count: Option<usize>,
}

/// On-disk shape of the name index asset: `{ "bases": [...] }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndexDocument {
    #[serde(default)]
    pub meta: Option<IndexMeta>,
    pub bases: Vec<String>,
}

/// Ordered, immutable list of canonical identifiers.
///
/// `total_count` normally equals the number of identifiers. When the source
/// was empty it holds the fallback total instead, and positions past the end
/// of the list have no identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameIndex {
    identifiers: Vec<String>,
    total_count: usize,
    meta: Option<IndexMeta>,
}

impl NameIndex {
    pub fn new(identifiers: Vec<String>) -> Self {
        let total_count = identifiers.len();
        Self {
            identifiers,
            total_count,
            meta: None,
        }
    }

    /// Builds an index whose total comes from `fallback_total` when
    /// `identifiers` is empty.
    pub fn with_fallback(identifiers: Vec<String>, fallback_total: usize) -> Self {
        let total_count = if identifiers.is_empty() {
            fallback_total
        } else {
            identifiers.len()
        };
        Self {
            identifiers,
            total_count,
            meta: None,
        }
    }

    pub fn with_meta(mut self, meta: Option<IndexMeta>) -> Self {
        self.meta = meta;
        self
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn get(&self, position: usize) -> Option<&str> {
        self.identifiers.get(position).map(String::as_str)
    }

    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }

    pub fn meta(&self) -> Option<&IndexMeta> {
        self.meta.as_ref()
    }

    pub fn is_fallback(&self) -> bool {
        self.identifiers.is_empty() && self.total_count > 0
    }
}

/// A resolved catalog entry. The pager only cares that it exists; the card
/// layer reads its fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub identifier: String,
    pub data: Value,
}

impl Record {
    pub fn new(identifier: impl Into<String>, data: Value) -> Self {
        Self {
            identifier: identifier.into(),
            data,
        }
    }
}

/// Records resolved for one page, in index order. Failed lookups are absent,
/// not placeholders.
pub type RecordBatch = Vec<Record>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NavState {
    pub can_prev: bool,
    pub can_next: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome {
    Loaded,
    Unchanged,
}
