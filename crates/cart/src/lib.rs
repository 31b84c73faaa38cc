//! Cart domain module.
//!
//! The cart is an ordered list of variant ids with duplicates allowed,
//! modelled as an aggregate: commands decide, events evolve state.

pub mod cart;

pub use cart::{AddToCart, Cart, CartCommand, CartEvent, ItemAdded, ItemRemoved, RemoveFromCart};
