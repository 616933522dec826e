//! `stockroom-core` — shared inventory building blocks.
//!
//! Identifiers, value objects and the error taxonomy. No IO lives here.

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{ErrorKind, InventoryError, InventoryResult};
pub use id::ProductId;
pub use value_object::{Money, ValueObject};
