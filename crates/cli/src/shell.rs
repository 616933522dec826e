//! Menu loop and command dispatch.
//!
//! The shell owns only terminal IO and the data file path. The inventory is
//! passed in by the caller and every action maps to one inventory operation.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use chrono::NaiveDate;

use stockroom_core::ProductId;
use stockroom_inventory::Inventory;
use stockroom_products::{Product, ProductKind, ProductType};

use crate::prompt::{CommandError, Prompter};

/// One entry of the main menu.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    AddProduct,
    SellProduct,
    RestockProduct,
    ListProducts,
    SearchByName,
    SearchByType,
    RemoveProduct,
    RemoveExpired,
    TotalValue,
    Save,
    Load,
    Exit,
}

impl MenuChoice {
    const ENTRIES: [(&'static str, MenuChoice, &'static str); 12] = [
        ("1", MenuChoice::AddProduct, "Add Product"),
        ("2", MenuChoice::SellProduct, "Sell Product"),
        ("3", MenuChoice::RestockProduct, "Restock Product"),
        ("4", MenuChoice::ListProducts, "View All Products"),
        ("5", MenuChoice::SearchByName, "Search Product by Name"),
        ("6", MenuChoice::SearchByType, "Search Product by Type"),
        ("7", MenuChoice::RemoveProduct, "Remove Product"),
        ("8", MenuChoice::RemoveExpired, "Remove Expired Groceries"),
        ("9", MenuChoice::TotalValue, "Total Inventory Value"),
        ("10", MenuChoice::Save, "Save Inventory to File"),
        ("11", MenuChoice::Load, "Load Inventory from File"),
        ("0", MenuChoice::Exit, "Exit"),
    ];

    pub fn parse(input: &str) -> Option<MenuChoice> {
        let key = input.trim();
        Self::ENTRIES
            .iter()
            .find(|(k, _, _)| *k == key)
            .map(|(_, choice, _)| *choice)
    }
}

/// Whether the loop keeps going after an action.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Shell<R, W> {
    io: Prompter<R, W>,
    data_file: PathBuf,
    today: fn() -> NaiveDate,
}

fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, data_file: impl Into<PathBuf>) -> Self {
        Self {
            io: Prompter::new(input, output),
            data_file: data_file.into(),
            today: local_today,
        }
    }

    /// Replace the clock used for expiry checks.
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn into_output(self) -> W {
        self.io.into_output()
    }

    /// Show the menu until the user exits or input ends.
    pub fn run(&mut self, inventory: &mut Inventory) -> anyhow::Result<()> {
        loop {
            self.print_menu()?;
            let raw = match self.io.ask("Enter choice") {
                Ok(raw) => raw,
                Err(CommandError::EndOfInput) => break,
                Err(e) => return Err(e.into()),
            };

            let Some(choice) = MenuChoice::parse(&raw) else {
                writeln!(self.io.output(), "Invalid choice.")?;
                continue;
            };

            match self.execute(choice, inventory) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(CommandError::EndOfInput) => break,
                Err(CommandError::Io(e)) => return Err(e.into()),
                Err(e @ (CommandError::Inventory(_) | CommandError::Input(_))) => {
                    tracing::debug!(?choice, error = %e, "menu action failed");
                    writeln!(self.io.output(), "Error: {e}")?;
                }
            }
        }
        writeln!(self.io.output(), "Exiting system.")?;
        Ok(())
    }

    /// Run one menu action against `inventory`.
    pub fn execute(
        &mut self,
        choice: MenuChoice,
        inventory: &mut Inventory,
    ) -> Result<Flow, CommandError> {
        match choice {
            MenuChoice::AddProduct => {
                let product = self.read_product()?;
                inventory.add_product(product)?;
                self.say("Product added successfully.")?;
            }
            MenuChoice::SellProduct => {
                let id = self.read_id()?;
                let quantity = self.io.ask_parsed("Quantity to sell", "a whole number")?;
                inventory.sell_product(&id, quantity)?;
                self.say("Product sold successfully.")?;
            }
            MenuChoice::RestockProduct => {
                let id = self.read_id()?;
                let amount = self.io.ask_parsed("Quantity to restock", "a whole number")?;
                inventory.restock_product(&id, amount)?;
                self.say("Product restocked successfully.")?;
            }
            MenuChoice::ListProducts => {
                let products = inventory.list_all_products();
                self.print_products(&products, "No products in inventory.")?;
            }
            MenuChoice::SearchByName => {
                let needle = self.io.ask("Enter name to search")?;
                let products = inventory.search_by_name(&needle);
                self.print_products(&products, "No matching products.")?;
            }
            MenuChoice::SearchByType => {
                let product_type: ProductType = self.io.ask("Enter product type")?.parse()?;
                let products = inventory.search_by_type(product_type);
                self.print_products(&products, "No matching products.")?;
            }
            MenuChoice::RemoveProduct => {
                let id = self.read_id()?;
                let removed = inventory.remove_product(&id)?;
                self.say(&format!("Removed: {}", removed.describe()))?;
            }
            MenuChoice::RemoveExpired => {
                let removed = inventory.remove_expired_products((self.today)());
                self.say(&format!("Removed {removed} expired grocery product(s)."))?;
            }
            MenuChoice::TotalValue => {
                let total = inventory.total_inventory_value();
                self.say(&format!("Total Inventory Value: {total}"))?;
            }
            MenuChoice::Save => {
                inventory.save_to_file(&self.data_file)?;
                let msg = format!("Inventory saved to {}.", self.data_file.display());
                self.say(&msg)?;
            }
            MenuChoice::Load => {
                let count = inventory.load_from_file(&self.data_file)?;
                let msg = format!(
                    "Loaded {count} product(s) from {}.",
                    self.data_file.display()
                );
                self.say(&msg)?;
            }
            MenuChoice::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    fn say(&mut self, line: &str) -> Result<(), CommandError> {
        writeln!(self.io.output(), "{line}")?;
        Ok(())
    }

    fn print_menu(&mut self) -> std::io::Result<()> {
        let out = self.io.output();
        writeln!(out)?;
        writeln!(out, "------ Inventory Menu ------")?;
        for (key, _, label) in MenuChoice::ENTRIES.iter() {
            writeln!(out, "{key}. {label}")?;
        }
        Ok(())
    }

    fn print_products(&mut self, products: &[&Product], empty: &str) -> Result<(), CommandError> {
        if products.is_empty() {
            return self.say(empty);
        }
        let today = (self.today)();
        for product in products {
            writeln!(self.io.output(), "{}", product.describe_as_of(today))?;
        }
        Ok(())
    }

    fn read_id(&mut self) -> Result<ProductId, CommandError> {
        Ok(ProductId::new(self.io.ask("Product ID")?)?)
    }

    fn read_product(&mut self) -> Result<Product, CommandError> {
        let product_type: ProductType = self
            .io
            .ask("Type (generic/electronics/grocery/clothing)")?
            .parse()?;
        let product_id = self.io.ask("Product ID")?;
        let name = self.io.ask("Name")?;
        let price: f64 = self.io.ask_parsed("Price", "a number")?;
        let quantity: i64 = self.io.ask_parsed("Quantity", "a whole number")?;

        let kind = match product_type {
            ProductType::Generic => ProductKind::Generic,
            ProductType::Electronics => ProductKind::Electronics {
                brand: self.io.ask("Brand")?,
                warranty_years: self
                    .io
                    .ask_parsed("Warranty (years)", "a non-negative whole number")?,
            },
            ProductType::Grocery => {
                let raw = self.io.ask("Expiry Date (YYYY-MM-DD)")?;
                let expiry_date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
                    CommandError::Input(format!("expected a YYYY-MM-DD date, got {raw:?}"))
                })?;
                ProductKind::Grocery { expiry_date }
            }
            ProductType::Clothing => ProductKind::Clothing {
                size: self.io.ask("Size")?,
                material: self.io.ask("Material")?,
            },
        };

        Ok(Product::try_new(&product_id, name, price, quantity, kind)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_menu_keys() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::AddProduct));
        assert_eq!(MenuChoice::parse(" 10 "), Some(MenuChoice::Save));
        assert_eq!(MenuChoice::parse("11"), Some(MenuChoice::Load));
        assert_eq!(MenuChoice::parse("0"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("12"), None);
        assert_eq!(MenuChoice::parse("add"), None);
    }
}
