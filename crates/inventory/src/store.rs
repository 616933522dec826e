use std::collections::HashMap;

use chrono::NaiveDate;

use stockroom_core::{Entity, InventoryError, InventoryResult, Money, ProductId};
use stockroom_products::{Product, ProductType};

/// In-memory collection of products keyed by ID.
///
/// Iteration follows insertion order, so listings and saved files are
/// deterministic. Every failed operation leaves the collection untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    products: HashMap<ProductId, Product>,
    order: Vec<ProductId>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.products.contains_key(product_id)
    }

    pub fn get(&self, product_id: &ProductId) -> Option<&Product> {
        self.products.get(product_id)
    }

    /// Products in insertion order.
    pub fn products(&self) -> impl Iterator<Item = &Product> + '_ {
        self.order.iter().filter_map(|id| self.products.get(id))
    }

    pub fn list_all_products(&self) -> Vec<&Product> {
        self.products().collect()
    }

    pub fn add_product(&mut self, product: Product) -> InventoryResult<()> {
        let id = product.id().clone();
        if self.products.contains_key(&id) {
            return Err(InventoryError::duplicate(id));
        }
        tracing::debug!(product_id = %id, product_type = %product.product_type(), "product added");
        self.order.push(id.clone());
        self.products.insert(id, product);
        Ok(())
    }

    /// Remove a product and hand it back to the caller.
    pub fn remove_product(&mut self, product_id: &ProductId) -> InventoryResult<Product> {
        let product = self
            .products
            .remove(product_id)
            .ok_or_else(|| InventoryError::not_found(product_id.clone()))?;
        self.order.retain(|id| id != product_id);
        tracing::debug!(product_id = %product_id, "product removed");
        Ok(product)
    }

    /// Case-insensitive substring search over product names.
    pub fn search_by_name(&self, needle: &str) -> Vec<&Product> {
        let needle = needle.to_lowercase();
        self.products()
            .filter(|p| p.name().to_lowercase().contains(&needle))
            .collect()
    }

    pub fn search_by_type(&self, product_type: ProductType) -> Vec<&Product> {
        self.products()
            .filter(|p| p.product_type() == product_type)
            .collect()
    }

    pub fn sell_product(&mut self, product_id: &ProductId, quantity: i64) -> InventoryResult<()> {
        let product = self.product_mut(product_id)?;
        product.sell(quantity)?;
        tracing::debug!(
            product_id = %product_id,
            quantity,
            remaining = product.quantity_in_stock(),
            "product sold"
        );
        Ok(())
    }

    pub fn restock_product(&mut self, product_id: &ProductId, amount: i64) -> InventoryResult<()> {
        let product = self.product_mut(product_id)?;
        product.restock(amount)?;
        tracing::debug!(
            product_id = %product_id,
            amount,
            in_stock = product.quantity_in_stock(),
            "product restocked"
        );
        Ok(())
    }

    /// Drop every grocery that expired before `reference`; returns how many went.
    pub fn remove_expired_products(&mut self, reference: NaiveDate) -> usize {
        let expired: Vec<ProductId> = self
            .products()
            .filter(|p| p.is_expired(reference))
            .map(|p| p.id().clone())
            .collect();

        for id in &expired {
            self.products.remove(id);
        }
        self.order.retain(|id| !expired.contains(id));

        if !expired.is_empty() {
            tracing::debug!(count = expired.len(), %reference, "expired groceries removed");
        }
        expired.len()
    }

    pub fn total_inventory_value(&self) -> Money {
        self.products().map(Product::total_value).sum()
    }

    fn product_mut(&mut self, product_id: &ProductId) -> InventoryResult<&mut Product> {
        self.products
            .get_mut(product_id)
            .ok_or_else(|| InventoryError::not_found(product_id.clone()))
    }
}
