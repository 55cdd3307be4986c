use crate::config::CliConfig;
use crate::domain::model::{CleanOutcome, CleanStats, Record};
use crate::domain::ports::{Pipeline, Storage};
use crate::utils::error::{CleanError, Result};
use async_trait::async_trait;
use serde_json::Value;

const RESTAURANT_IMAGES_FIELD: &str = "restaurant_images";
const MENU_HIGHLIGHTS_FIELD: &str = "menu_highlights";
const MENU_ITEM_IMAGE_FIELD: &str = "image";

/// One-shot cleaning pipeline: reads the restaurants file, strips image
/// fields, and writes the result back to the same path.
pub struct CleanPipeline<S: Storage> {
    storage: S,
    config: CliConfig,
}

impl<S: Storage> CleanPipeline<S> {
    pub fn new(storage: S, config: CliConfig) -> Self {
        Self { storage, config }
    }
}

/// Removes `restaurant_images` from the record and `image` from each menu
/// highlight. Returns the number of menu items the record carries. Removal is
/// idempotent; absent fields are a no-op. A `menu_highlights` value that is
/// not an array is left untouched and counted as zero items; a non-object
/// element is left untouched but still counted, since the count tracks the
/// sequence length.
fn scrub_record(record: &mut Record) -> usize {
    // With `preserve_order`, `Map::remove` is a swap-remove; `shift_remove`
    // keeps the remaining keys in their original order (spec invariant).
    record.fields.shift_remove(RESTAURANT_IMAGES_FIELD);

    match record.fields.get_mut(MENU_HIGHLIGHTS_FIELD) {
        Some(Value::Array(items)) => {
            for item in items.iter_mut() {
                if let Value::Object(fields) = item {
                    fields.shift_remove(MENU_ITEM_IMAGE_FIELD);
                }
            }
            items.len()
        }
        Some(other) => {
            tracing::warn!(
                "Skipping non-array {} field (found {})",
                MENU_HIGHLIGHTS_FIELD,
                json_type_name(other)
            );
            0
        }
        None => 0,
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[async_trait]
impl<S: Storage> Pipeline for CleanPipeline<S> {
    async fn extract(&self) -> Result<Vec<Record>> {
        let path = &self.config.input;

        let bytes = self.storage.read_file(path).await.map_err(|e| match e {
            CleanError::IoError(ref io) if io.kind() == std::io::ErrorKind::NotFound => {
                CleanError::NotFound { path: path.clone() }
            }
            other => other,
        })?;

        let records: Vec<Record> = serde_json::from_slice(&bytes)?;
        Ok(records)
    }

    async fn transform(&self, mut records: Vec<Record>) -> Result<CleanOutcome> {
        let mut menu_items = 0;
        for record in records.iter_mut() {
            menu_items += scrub_record(record);
        }

        let stats = CleanStats {
            restaurants: records.len(),
            menu_items,
        };
        tracing::debug!(
            "Transformed {} restaurants, {} menu items",
            stats.restaurants,
            stats.menu_items
        );

        Ok(CleanOutcome { records, stats })
    }

    async fn load(&self, outcome: CleanOutcome) -> Result<String> {
        let path = &self.config.input;
        let json = serde_json::to_string_pretty(&outcome.records)?;

        self.storage
            .write_file(path, json.as_bytes())
            .await
            .map_err(|e| match e {
                CleanError::IoError(source) => CleanError::WriteError {
                    path: path.clone(),
                    source,
                },
                other => other,
            })?;

        Ok(path.clone())
    }
}
