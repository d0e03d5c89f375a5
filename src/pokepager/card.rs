//! Card layout: turns a page's records into exactly `page_size` slots.
//!
//! Pure data shaping, no terminal knowledge. Records beyond `page_size` are
//! dropped and missing ones become [`CardSlot::Empty`].

use crate::model::Record;
use serde::Serialize;
use serde_json::Value;

pub const UNKNOWN: &str = "unknown";
pub const TYPE_SEPARATOR: &str = " · ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub identifier: String,
    pub name: String,
    pub image: Option<String>,
    pub types: Vec<String>,
    pub primary_type: String,
    pub type_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CardSlot {
    Filled(Card),
    Empty,
}

impl CardSlot {
    pub fn is_empty(&self) -> bool {
        matches!(self, CardSlot::Empty)
    }
}

pub fn layout(batch: &[Record], page_size: usize) -> Vec<CardSlot> {
    let mut slots: Vec<CardSlot> = batch
        .iter()
        .take(page_size)
        .map(|record| CardSlot::Filled(card_from_record(record)))
        .collect();
    slots.resize(page_size, CardSlot::Empty);
    slots
}

pub fn card_from_record(record: &Record) -> Card {
    let data = &record.data;
    let types = type_names(data);
    Card {
        identifier: record.identifier.clone(),
        name: data
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or(UNKNOWN)
            .to_string(),
        image: artwork_url(data),
        primary_type: primary_type(&types).to_string(),
        type_label: format_types(&types),
        types,
    }
}

/// Official artwork first, then the default sprite.
fn artwork_url(data: &Value) -> Option<String> {
    let sprites = data.get("sprites")?;
    sprites
        .pointer("/other/official-artwork/front_default")
        .and_then(Value::as_str)
        .or_else(|| sprites.get("front_default").and_then(Value::as_str))
        .filter(|url| !url.is_empty())
        .map(str::to_string)
}

fn type_names(data: &Value) -> Vec<String> {
    data.get("types")
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(|entry| entry.pointer("/type/name").and_then(Value::as_str))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn primary_type(types: &[String]) -> &str {
    types.first().map(String::as_str).unwrap_or(UNKNOWN)
}

fn format_types(types: &[String]) -> String {
    types
        .iter()
        .map(|name| capitalize(name))
        .collect::<Vec<_>>()
        .join(TYPE_SEPARATOR)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bulbasaur() -> Record {
        Record::new(
            "bulbasaur",
            json!({
                "name": "bulbasaur",
                "sprites": {
                    "front_default": "https://img.test/1.png",
                    "other": { "official-artwork": { "front_default": "https://img.test/art/1.png" } }
                },
                "types": [
                    { "slot": 1, "type": { "name": "grass" } },
                    { "slot": 2, "type": { "name": "poison" } }
                ]
            }),
        )
    }

    #[test]
    fn card_reads_name_artwork_and_types() {
        let card = card_from_record(&bulbasaur());
        assert_eq!(card.name, "bulbasaur");
        assert_eq!(card.image.as_deref(), Some("https://img.test/art/1.png"));
        assert_eq!(card.types, vec!["grass", "poison"]);
        assert_eq!(card.primary_type, "grass");
        assert_eq!(card.type_label, "Grass · Poison");
    }

    #[test]
    fn card_falls_back_to_default_sprite() {
        let record = Record::new(
            "pichu",
            json!({ "name": "pichu", "sprites": { "front_default": "https://img.test/172.png" } }),
        );
        let card = card_from_record(&record);
        assert_eq!(card.image.as_deref(), Some("https://img.test/172.png"));
    }

    #[test]
    fn card_tolerates_sparse_records() {
        let card = card_from_record(&Record::new("x", json!({})));
        assert_eq!(card.name, "unknown");
        assert_eq!(card.image, None);
        assert!(card.types.is_empty());
        assert_eq!(card.primary_type, "unknown");
        assert_eq!(card.type_label, "");
    }

    #[test]
    fn layout_pads_with_empty_slots() {
        let slots = layout(&[bulbasaur()], 4);
        assert_eq!(slots.len(), 4);
        assert!(!slots[0].is_empty());
        assert!(slots[1..].iter().all(CardSlot::is_empty));
    }

    #[test]
    fn layout_never_exceeds_page_size() {
        let batch = vec![bulbasaur(), bulbasaur(), bulbasaur()];
        let slots = layout(&batch, 2);
        assert_eq!(slots.len(), 2);
        assert!(slots.iter().all(|s| !s.is_empty()));
    }
}
