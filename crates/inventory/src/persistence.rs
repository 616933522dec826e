//! JSON file persistence for [`Inventory`].
//!
//! Files hold a JSON array of product records in inventory order. Saves go to a
//! temporary file next to the target and are renamed over it, so a reader never
//! sees a half-written file. Loads are all-or-nothing.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde_json::Value;

use stockroom_core::{InventoryError, InventoryResult};
use stockroom_products::{ProductRecord, decode_value, encode};

use crate::store::Inventory;

/// Conventional file name used when the caller does not pick one.
pub const DEFAULT_DATA_FILE: &str = "inventory_data.json";

impl Inventory {
    /// Build an inventory from a saved file.
    pub fn from_file(path: impl AsRef<Path>) -> InventoryResult<Self> {
        read_inventory(path.as_ref())
    }

    /// Write every product to `path`, replacing whatever was there.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> InventoryResult<()> {
        let path = path.as_ref();
        let records: Vec<ProductRecord> = self.products().map(encode).collect();

        let mut bytes = serde_json::to_vec_pretty(&records)
            .map_err(|e| InventoryError::persistence(path, format!("failed to serialize: {e}")))?;
        bytes.push(b'\n');

        write_atomically(path, &bytes).map_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "inventory save failed");
            InventoryError::persistence(path, e)
        })?;

        tracing::info!(path = %path.display(), products = records.len(), "inventory saved");
        Ok(())
    }

    /// Replace the current contents with the products stored in `path`.
    ///
    /// On any error the inventory keeps its previous contents. Returns the
    /// number of products loaded.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> InventoryResult<usize> {
        let path = path.as_ref();
        let loaded = read_inventory(path).inspect_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "inventory load rejected");
        })?;

        *self = loaded;
        tracing::info!(path = %path.display(), products = self.len(), "inventory loaded");
        Ok(self.len())
    }
}

fn read_inventory(path: &Path) -> InventoryResult<Inventory> {
    let text = fs::read_to_string(path).map_err(|e| InventoryError::persistence(path, e))?;

    let values: Vec<Value> = serde_json::from_str(&text).map_err(|e| {
        InventoryError::invalid_data(format!(
            "{} is not a JSON array of product records: {e}",
            path.display()
        ))
    })?;

    let mut inventory = Inventory::new();
    for (index, value) in values.into_iter().enumerate() {
        let product = decode_value(value).map_err(|e| match e {
            InventoryError::InvalidProductData(msg) => {
                InventoryError::invalid_data(format!("record {index}: {msg}"))
            }
            other => other,
        })?;

        inventory.add_product(product).map_err(|e| match e {
            InventoryError::DuplicateProductId(id) => InventoryError::invalid_data(format!(
                "record {index}: duplicate product_id {id}"
            )),
            other => other,
        })?;
    }
    Ok(inventory)
}

fn write_atomically(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    // A failed rename drops the temp file, which deletes it.
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
