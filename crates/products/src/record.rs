//! Record codec: `Product` <-> the structured record stored in inventory files.
//!
//! A record carries the shared fields, a `type` tag and the variant's own
//! fields. Unknown keys are ignored on read; missing or ill-typed required keys
//! fail with `InvalidProductData`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use stockroom_core::{InventoryError, InventoryResult, Money, ProductId};

use crate::product::{Product, ProductKind, ProductType};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Wire form of one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub product_id: String,
    #[serde(rename = "type")]
    pub product_type: String,
    pub name: String,
    pub price: f64,
    #[serde(alias = "quantity")]
    pub quantity_in_stock: u64,
    /// Variant fields, plus whatever else the record carried.
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl ProductRecord {
    /// Parse a record from an arbitrary JSON value.
    pub fn from_value(value: Value) -> InventoryResult<Self> {
        serde_json::from_value(value)
            .map_err(|e| InventoryError::invalid_data(format!("malformed record: {e}")))
    }
}

pub fn encode(product: &Product) -> ProductRecord {
    let mut details = Map::new();
    match product.kind() {
        ProductKind::Generic => {}
        ProductKind::Electronics {
            brand,
            warranty_years,
        } => {
            details.insert("brand".into(), Value::from(brand.as_str()));
            details.insert("warranty_years".into(), Value::from(*warranty_years));
        }
        ProductKind::Grocery { expiry_date } => {
            details.insert(
                "expiry_date".into(),
                Value::from(expiry_date.format(DATE_FORMAT).to_string()),
            );
        }
        ProductKind::Clothing { size, material } => {
            details.insert("size".into(), Value::from(size.as_str()));
            details.insert("material".into(), Value::from(material.as_str()));
        }
    }

    ProductRecord {
        product_id: product.product_id().to_string(),
        product_type: product.product_type().as_str().to_string(),
        name: product.name().to_string(),
        price: product.price().to_major(),
        quantity_in_stock: product.quantity_in_stock(),
        details,
    }
}

pub fn decode(record: &ProductRecord) -> InventoryResult<Product> {
    let product_type: ProductType = record.product_type.parse()?;
    let id = ProductId::new(&record.product_id)?;
    let price = Money::from_major(record.price)
        .map_err(|e| with_context(e, &record.product_id))?;

    let details = &record.details;
    let kind = match product_type {
        ProductType::Generic => ProductKind::Generic,
        ProductType::Electronics => ProductKind::Electronics {
            brand: required_str(details, "brand", &id)?,
            warranty_years: required_u32(details, "warranty_years", &id)?,
        },
        ProductType::Grocery => ProductKind::Grocery {
            expiry_date: required_date(details, "expiry_date", &id)?,
        },
        ProductType::Clothing => ProductKind::Clothing {
            size: required_str(details, "size", &id)?,
            material: required_str(details, "material", &id)?,
        },
    };

    Ok(Product::new(
        id,
        record.name.clone(),
        price,
        record.quantity_in_stock,
        kind,
    ))
}

/// Parse and decode a raw JSON value in one step.
pub fn decode_value(value: Value) -> InventoryResult<Product> {
    decode(&ProductRecord::from_value(value)?)
}

fn with_context(err: InventoryError, product_id: &str) -> InventoryError {
    match err {
        InventoryError::InvalidProductData(msg) => {
            InventoryError::invalid_data(format!("{product_id}: {msg}"))
        }
        other => other,
    }
}

fn required<'a>(details: &'a Map<String, Value>, key: &str, id: &ProductId) -> InventoryResult<&'a Value> {
    details
        .get(key)
        .ok_or_else(|| InventoryError::invalid_data(format!("{id}: missing field `{key}`")))
}

fn required_str(details: &Map<String, Value>, key: &str, id: &ProductId) -> InventoryResult<String> {
    required(details, key, id)?
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| InventoryError::invalid_data(format!("{id}: field `{key}` must be a string")))
}

fn required_u32(details: &Map<String, Value>, key: &str, id: &ProductId) -> InventoryResult<u32> {
    required(details, key, id)?
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| {
            InventoryError::invalid_data(format!("{id}: field `{key}` must be a non-negative integer"))
        })
}

fn required_date(details: &Map<String, Value>, key: &str, id: &ProductId) -> InventoryResult<NaiveDate> {
    let raw = required_str(details, key, id)?;
    NaiveDate::parse_from_str(&raw, DATE_FORMAT).map_err(|e| {
        InventoryError::invalid_data(format!("{id}: field `{key}` is not a YYYY-MM-DD date ({raw:?}: {e})"))
    })
}
