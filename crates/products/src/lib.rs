//! Products domain module.
//!
//! Product identity, the variant catalog, variant selection, and the values
//! derived from them. Everything here is deterministic domain logic (no IO, no
//! rendering).

pub mod catalog;
pub mod derived;
pub mod product;
pub mod variant;

pub use catalog::socks;
pub use derived::{ShippingCost, StockStatus};
pub use product::{Product, ProductDraft};
pub use variant::Variant;
