//! Values derived from a product's state.
//!
//! These are plain functions: callers recompute them after any mutation
//! instead of relying on cached fields.

use core::fmt;

use crate::product::Product;

/// `"<brand> <name>"`.
pub fn title(product: &Product) -> String {
    format!("{} {}", product.brand(), product.name())
}

pub fn sale_message(product: &Product) -> String {
    if product.on_sale() {
        format!("{} are on sale!", title(product))
    } else {
        format!("{} are not on sale.", title(product))
    }
}

/// Image of the currently selected variant.
pub fn active_image(product: &Product) -> &str {
    product.selected_variant().image()
}

pub fn in_stock(product: &Product) -> bool {
    product.selected_variant().is_available()
}

pub fn stock_status(product: &Product) -> StockStatus {
    if in_stock(product) {
        StockStatus::InStock
    } else {
        StockStatus::OutOfStock
    }
}

/// Shipping cost depends only on premium eligibility.
pub fn shipping_cost(premium: bool) -> ShippingCost {
    if premium {
        ShippingCost::Free
    } else {
        ShippingCost::Standard
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ShippingCost {
    Free,
    Standard,
}

impl ShippingCost {
    pub fn label(self) -> &'static str {
        match self {
            ShippingCost::Free => "Free",
            ShippingCost::Standard => "$2.99",
        }
    }
}

impl fmt::Display for ShippingCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StockStatus {
    InStock,
    OutOfStock,
}

impl StockStatus {
    pub fn label(self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::OutOfStock => "Out of Stock",
        }
    }
}
