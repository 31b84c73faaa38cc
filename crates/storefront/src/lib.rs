//! `storefront`
//!
//! **Responsibility:** the product-display widget, composed from its parts.
//!
//! This crate provides:
//! - `ProductCard`: product state, derived values, review subscription
//! - `TabPanel` / `DetailsList`: tab selection and tab content
//! - `App`: the root that owns the cart, premium flag and review channel
//! - `StorefrontConfig`: startup configuration
//!
//! On `wasm32` a Leptos frontend mounts the widget into the page.

pub mod app;
pub mod card;
pub mod config;
pub mod details;
pub mod tabs;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

pub use app::{App, ReviewChannel, start};
pub use card::{CardView, ProductCard, Swatch};
pub use config::StorefrontConfig;
pub use details::DetailsList;
pub use tabs::{Tab, TabContent, TabPanel};
