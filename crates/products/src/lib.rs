//! Products domain module.
//!
//! The closed set of product variants, their stock rules, and the record codec
//! used by inventory files. Pure logic: no IO.

pub mod product;
pub mod record;

pub use product::{Product, ProductKind, ProductType};
pub use record::{ProductRecord, decode, decode_value, encode};
