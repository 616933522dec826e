//! Scripted menu sessions.

use std::io::Cursor;
use std::path::Path;

use chrono::NaiveDate;
use stockroom_cli::{CommandError, Flow, MenuChoice, Shell};
use stockroom_core::{InventoryError, Money, ProductId};
use stockroom_inventory::Inventory;

fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

fn id(s: &str) -> ProductId {
    ProductId::new(s).unwrap()
}

fn run_script(script: &str, inventory: &mut Inventory, data_file: &Path) -> String {
    let mut shell = Shell::new(Cursor::new(script.as_bytes().to_vec()), Vec::new(), data_file)
        .with_clock(fixed_today);
    shell.run(inventory).unwrap();
    String::from_utf8(shell.into_output()).unwrap()
}

#[test]
fn add_sell_restock_and_value() {
    let dir = tempfile::tempdir().unwrap();
    let script = "\
1\nelectronics\nE1\nLaptop\n1000\n3\nAcme\n2\n\
1\ngeneric\nX1\nGift Card\n25.5\n2\n\
2\nE1\n1\n\
3\nX1\n4\n\
9\n\
0\n";
    let mut inv = Inventory::new();
    let out = run_script(script, &mut inv, &dir.path().join("inv.json"));

    assert_eq!(out.matches("Product added successfully.").count(), 2);
    assert!(out.contains("Product sold successfully."));
    assert!(out.contains("Product restocked successfully."));
    assert!(out.contains("Total Inventory Value: $2153.00"));
    assert!(out.ends_with("Exiting system.\n"));

    assert_eq!(inv.get(&id("E1")).unwrap().quantity_in_stock(), 2);
    assert_eq!(inv.get(&id("X1")).unwrap().quantity_in_stock(), 6);
    assert_eq!(inv.total_inventory_value(), Money::from_cents(215_300));
}

#[test]
fn errors_are_reported_and_session_continues() {
    let dir = tempfile::tempdir().unwrap();
    let script = "\
1\ngeneric\nA\nAnvil\n10\n2\n\
1\ngeneric\nA\nDuplicate\n1\n1\n\
2\nA\n5\n\
2\nmissing\n1\n\
3\nA\nlots\n\
1\nfurniture\n\
42\n\
4\n\
0\n";
    let mut inv = Inventory::new();
    let out = run_script(script, &mut inv, &dir.path().join("inv.json"));

    assert!(out.contains("Error: product ID already exists: A"));
    assert!(out.contains("Error: insufficient stock for A: requested 5, only 2 left"));
    assert!(out.contains("Error: product not found: missing"));
    assert!(out.contains("Error: invalid input: expected a whole number, got \"lots\""));
    assert!(out.contains("Error: invalid product data: unknown product type: \"furniture\""));
    assert!(out.contains("Invalid choice."));
    assert!(out.contains("[Generic] Anvil (ID: A, Price: $10.00, Stock: 2)"));

    assert_eq!(inv.len(), 1);
    assert_eq!(inv.get(&id("A")).unwrap().name(), "Anvil");
}

#[test]
fn listing_marks_grocery_freshness_and_expired_ones_are_removed() {
    let dir = tempfile::tempdir().unwrap();
    let script = "\
1\ngrocery\nG1\nOld Milk\n1.2\n4\n2024-05-31\n\
1\ngrocery\nG2\nCheese\n6\n1\n2024-06-01\n\
6\nGROCERY\n\
8\n\
4\n\
0\n";
    let mut inv = Inventory::new();
    let out = run_script(script, &mut inv, &dir.path().join("inv.json"));

    assert!(out.contains("[Grocery] Old Milk (ID: G1, Expiry: 2024-05-31, Status: Expired"));
    assert!(out.contains("[Grocery] Cheese (ID: G2, Expiry: 2024-06-01, Status: Fresh"));
    assert!(out.contains("Removed 1 expired grocery product(s)."));
    assert_eq!(inv.len(), 1);
    assert!(inv.contains(&id("G2")));
}

#[test]
fn save_and_load_use_the_configured_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shop.json");

    let save_script = "\
1\nclothing\nC1\nJacket\n80\n2\nL\nDenim\n\
10\n\
0\n";
    let mut first = Inventory::new();
    let out = run_script(save_script, &mut first, &path);
    assert!(out.contains("Inventory saved to"));
    assert!(path.exists());

    let mut second = Inventory::new();
    let out = run_script("11\n5\njack\n0\n", &mut second, &path);
    assert!(out.contains("Loaded 1 product(s) from"));
    assert!(out.contains("[Clothing] Jacket (ID: C1, Size: L, Material: Denim, Price: $80.00, Stock: 2)"));
    assert_eq!(second, first);
}

#[test]
fn loading_a_missing_file_keeps_current_state() {
    let dir = tempfile::tempdir().unwrap();
    let mut inv = Inventory::new();
    let out = run_script(
        "1\ngeneric\nA\nAnvil\n10\n2\n11\n0\n",
        &mut inv,
        &dir.path().join("absent.json"),
    );
    assert!(out.contains("Error: persistence error"));
    assert_eq!(inv.len(), 1);
}

#[test]
fn end_of_input_exits_cleanly_mid_prompt() {
    let dir = tempfile::tempdir().unwrap();
    let mut inv = Inventory::new();
    let out = run_script("1\nelectronics\nE1\n", &mut inv, &dir.path().join("inv.json"));
    assert!(out.ends_with("Exiting system.\n"));
    assert!(inv.is_empty());
}

#[test]
fn execute_dispatches_a_single_action() {
    let dir = tempfile::tempdir().unwrap();
    let mut inv = Inventory::new();
    let mut shell = Shell::new(
        Cursor::new(b"missing\n".to_vec()),
        Vec::new(),
        dir.path().join("inv.json"),
    );

    match shell.execute(MenuChoice::RemoveProduct, &mut inv) {
        Err(CommandError::Inventory(InventoryError::ProductNotFound(pid))) => {
            assert_eq!(pid, id("missing"))
        }
        other => panic!("Expected ProductNotFound, got {other:?}"),
    }
    assert_eq!(shell.execute(MenuChoice::Exit, &mut inv).unwrap(), Flow::Exit);
}
