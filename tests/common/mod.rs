#![allow(dead_code)]

use std::path::{Path, PathBuf};

#[path = "../../src/pokepager/test_utils.rs"]
mod catalog;

pub use catalog::{creature_json, CatalogServer};

pub fn write_index(dir: &Path, names: &[&str]) -> PathBuf {
    let path = dir.join("base_names.json");
    let doc = serde_json::json!({
        "meta": { "source": "derived-from-base_index", "count": names.len() },
        "bases": names,
    });
    std::fs::write(&path, doc.to_string()).unwrap();
    path
}
