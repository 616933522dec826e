//! Inventory store.
//!
//! The in-memory collection of products, its invariant-preserving operations,
//! and its JSON file persistence.

pub mod persistence;
pub mod store;

pub use persistence::DEFAULT_DATA_FILE;
pub use store::Inventory;
