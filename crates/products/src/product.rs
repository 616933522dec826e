use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockroom_core::{Entity, InventoryError, InventoryResult, Money, ProductId};

/// Variant tag of a product, as written in the `type` field of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    Generic,
    Electronics,
    Grocery,
    Clothing,
}

impl ProductType {
    pub const ALL: [ProductType; 4] = [
        ProductType::Generic,
        ProductType::Electronics,
        ProductType::Grocery,
        ProductType::Clothing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Generic => "generic",
            ProductType::Electronics => "electronics",
            ProductType::Grocery => "grocery",
            ProductType::Clothing => "clothing",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ProductType::Generic => "Generic",
            ProductType::Electronics => "Electronics",
            ProductType::Grocery => "Grocery",
            ProductType::Clothing => "Clothing",
        }
    }
}

impl core::fmt::Display for ProductType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for ProductType {
    type Err = InventoryError;

    /// Case-insensitive, so `"Electronics"` and `"electronics"` both parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ProductType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| InventoryError::invalid_data(format!("unknown product type: {wanted:?}")))
    }
}

/// Category-specific fields of a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductKind {
    Generic,
    Electronics { brand: String, warranty_years: u32 },
    Grocery { expiry_date: NaiveDate },
    Clothing { size: String, material: String },
}

impl ProductKind {
    pub fn product_type(&self) -> ProductType {
        match self {
            ProductKind::Generic => ProductType::Generic,
            ProductKind::Electronics { .. } => ProductType::Electronics,
            ProductKind::Grocery { .. } => ProductType::Grocery,
            ProductKind::Clothing { .. } => ProductType::Clothing,
        }
    }
}

/// One inventory entry.
///
/// `quantity_in_stock` never goes below zero: sales larger than the stock are
/// rejected before anything changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Money,
    quantity_in_stock: u64,
    kind: ProductKind,
}

impl Product {
    /// Unchecked constructor for already-validated parts.
    ///
    /// `price` must not exceed `Money::MAX_CENTS`; outside this crate go through
    /// [`Product::try_new`] or the record codec.
    pub(crate) fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Money,
        quantity_in_stock: u64,
        kind: ProductKind,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            quantity_in_stock,
            kind,
        }
    }

    /// Build a product from unvalidated input.
    ///
    /// Fails with `InvalidProductData` on an empty ID, a negative or malformed
    /// price, or a negative quantity.
    pub fn try_new(
        product_id: &str,
        name: impl Into<String>,
        price: f64,
        quantity_in_stock: i64,
        kind: ProductKind,
    ) -> InventoryResult<Self> {
        let id = ProductId::new(product_id)?;
        let price = Money::from_major(price)?;
        let quantity_in_stock = u64::try_from(quantity_in_stock).map_err(|_| {
            InventoryError::invalid_data(format!(
                "quantity_in_stock cannot be negative (got {quantity_in_stock})"
            ))
        })?;
        Ok(Self::new(id, name, price, quantity_in_stock, kind))
    }

    pub fn product_id(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn quantity_in_stock(&self) -> u64 {
        self.quantity_in_stock
    }

    pub fn kind(&self) -> &ProductKind {
        &self.kind
    }

    pub fn product_type(&self) -> ProductType {
        self.kind.product_type()
    }

    pub fn expiry_date(&self) -> Option<NaiveDate> {
        match self.kind {
            ProductKind::Grocery { expiry_date } => Some(expiry_date),
            _ => None,
        }
    }

    /// Add `amount` units to stock.
    pub fn restock(&mut self, amount: i64) -> InventoryResult<()> {
        let amount = positive(amount, "restock amount")?;
        self.quantity_in_stock = self.quantity_in_stock.checked_add(amount).ok_or_else(|| {
            InventoryError::invalid_operation(format!(
                "restocking {amount} units of {} would overflow the stock counter",
                self.id
            ))
        })?;
        Ok(())
    }

    /// Remove `quantity` units from stock.
    pub fn sell(&mut self, quantity: i64) -> InventoryResult<()> {
        let quantity = positive(quantity, "sell quantity")?;
        if quantity > self.quantity_in_stock {
            return Err(InventoryError::InsufficientStock {
                product_id: self.id.clone(),
                requested: quantity,
                available: self.quantity_in_stock,
            });
        }
        self.quantity_in_stock -= quantity;
        Ok(())
    }

    pub fn total_value(&self) -> Money {
        self.price.times(self.quantity_in_stock)
    }

    /// True iff this is a grocery whose expiry date lies before `reference`.
    ///
    /// Non-grocery products never expire.
    pub fn is_expired(&self, reference: NaiveDate) -> bool {
        self.expiry_date().is_some_and(|expiry| expiry < reference)
    }

    /// Human-readable one-line summary including variant fields.
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// Like [`Product::describe`], with a freshness status for groceries.
    pub fn describe_as_of(&self, reference: NaiveDate) -> String {
        DescribeAsOf {
            product: self,
            reference,
        }
        .to_string()
    }

    fn write_description(
        &self,
        f: &mut core::fmt::Formatter<'_>,
        reference: Option<NaiveDate>,
    ) -> core::fmt::Result {
        write!(
            f,
            "[{}] {} (ID: {}",
            self.product_type().label(),
            self.name,
            self.id
        )?;
        match &self.kind {
            ProductKind::Generic => {}
            ProductKind::Electronics {
                brand,
                warranty_years,
            } => write!(f, ", Brand: {brand}, Warranty: {warranty_years} yrs")?,
            ProductKind::Grocery { expiry_date } => {
                write!(f, ", Expiry: {}", expiry_date.format("%Y-%m-%d"))?;
                if let Some(reference) = reference {
                    let status = if self.is_expired(reference) {
                        "Expired"
                    } else {
                        "Fresh"
                    };
                    write!(f, ", Status: {status}")?;
                }
            }
            ProductKind::Clothing { size, material } => {
                write!(f, ", Size: {size}, Material: {material}")?
            }
        }
        write!(
            f,
            ", Price: {}, Stock: {})",
            self.price, self.quantity_in_stock
        )
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.write_description(f, None)
    }
}

struct DescribeAsOf<'a> {
    product: &'a Product,
    reference: NaiveDate,
}

impl core::fmt::Display for DescribeAsOf<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.product.write_description(f, Some(self.reference))
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

fn positive(value: i64, what: &str) -> InventoryResult<u64> {
    if value <= 0 {
        return Err(InventoryError::invalid_operation(format!(
            "{what} must be positive (got {value})"
        )));
    }
    Ok(value as u64)
}
