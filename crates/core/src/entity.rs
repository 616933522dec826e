//! Entity trait: identity that survives state changes.
//!
//! A product keeps its ID while its stock moves; collections key entries by
//! this identity.

/// Anything stored in a keyed collection.
pub trait Entity {
    /// Strongly-typed identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    fn id(&self) -> &Self::Id;
}
