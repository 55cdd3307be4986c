use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One restaurant entry. Fields are schemaless JSON so unknown keys pass
/// through untouched; `serde_json`'s `preserve_order` feature keeps the
/// remaining keys in their original order on write-back.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    pub fields: Map<String, Value>,
}

/// Counts produced by the transform stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanStats {
    /// Restaurants processed (equal to the record count of the input).
    pub restaurants: usize,
    /// Total menu items across all restaurants, 0 for records without a
    /// `menu_highlights` field.
    pub menu_items: usize,
}

#[derive(Debug, Clone)]
pub struct CleanOutcome {
    pub records: Vec<Record>,
    pub stats: CleanStats,
}
